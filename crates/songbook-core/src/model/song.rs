use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel used for the album title and URL of songs with no album
/// (promo singles, loose collaborations).
pub const NO_ALBUM: &str = "NA";

/// One row of an album page's tracklist, before the track's own page has
/// been scraped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    /// Position within the album; 0 for non-album tracks.
    pub number: u32,
    pub title: String,
    /// Locator of the track's lyrics page.
    pub url: String,
}

/// One scraped release instance.
///
/// The song URL is the natural identity of a release instance: the same
/// song title can appear under multiple URLs (original vs. rerecorded,
/// album cut vs. single). Collapsing duplicates by *title* is an editing
/// decision, see [`DiscographyTable::dedupe_by_title`].
///
/// [`DiscographyTable::dedupe_by_title`]: crate::DiscographyTable::dedupe_by_title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub album_title: String,
    pub album_url: String,
    pub category: String,
    /// 0 when the song has no album.
    pub album_track_number: u32,
    pub song_title: String,
    pub song_url: String,
    pub song_artists: Vec<String>,
    /// Absent when the source page carries no dateable metadata.
    pub song_release_date: Option<NaiveDate>,
    /// 0 when the source page reports no view count.
    pub song_page_views: u64,
    /// Lyrics as an ordered sequence of lines.
    pub song_lyrics: Vec<String>,
    pub song_writers: Vec<String>,
    pub song_producers: Vec<String>,
    pub song_tags: Vec<String>,
}

impl SongRecord {
    /// Create a record with the given identity and empty everything else.
    #[must_use]
    pub fn new(song_title: impl Into<String>, song_url: impl Into<String>) -> Self {
        Self {
            album_title: NO_ALBUM.to_string(),
            album_url: NO_ALBUM.to_string(),
            category: String::new(),
            album_track_number: 0,
            song_title: song_title.into(),
            song_url: song_url.into(),
            song_artists: Vec::new(),
            song_release_date: None,
            song_page_views: 0,
            song_lyrics: Vec::new(),
            song_writers: Vec::new(),
            song_producers: Vec::new(),
            song_tags: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_record_new_defaults() {
        let record = SongRecord::new("Test Song", "https://example.com/test-song");
        assert_eq!(record.song_title, "Test Song");
        assert_eq!(record.album_title, NO_ALBUM);
        assert_eq!(record.album_url, NO_ALBUM);
        assert_eq!(record.album_track_number, 0);
        assert_eq!(record.song_page_views, 0);
        assert!(record.song_release_date.is_none());
        assert!(record.song_artists.is_empty());
    }
}
