//! Record assembly: one album page plus each track's own page, merged
//! into enriched song records.

use chrono::NaiveDate;
use scraper::Html;

use songbook_core::model::{SongRecord, TrackDescriptor};

use crate::error::ScrapeResult;
use crate::extract::{self, CreditRole};
use crate::fetch::Fetcher;

/// All per-song fields pulled from one song page.
#[derive(Debug, Default)]
pub struct SongFields {
    pub artists: Vec<String>,
    pub release_date: Option<NaiveDate>,
    pub page_views: u64,
    pub lyrics: Vec<String>,
    pub writers: Vec<String>,
    pub producers: Vec<String>,
    pub tags: Vec<String>,
}

/// Run every field extractor against one parsed song page.
///
/// Pure over the document, so fixture pages exercise the same merge the
/// live pipeline uses. Absent fields come back empty; only malformed
/// numeric/date text fails.
pub fn song_fields_from_doc(doc: &Html) -> ScrapeResult<SongFields> {
    let (release_date, page_views) = extract::release_metadata(doc)?;
    Ok(SongFields {
        artists: extract::performers(doc),
        release_date,
        page_views,
        lyrics: extract::lyric_lines(doc),
        writers: extract::credits(doc, CreditRole::Writers),
        producers: extract::credits(doc, CreditRole::Producers),
        tags: extract::tags(doc),
    })
}

/// Merge a track descriptor, its album's identity, and the fields from
/// its own page into one flat record.
#[must_use]
pub fn record_from_parts(
    album_title: &str,
    album_url: &str,
    category: &str,
    track: TrackDescriptor,
    fields: SongFields,
) -> SongRecord {
    SongRecord {
        album_title: album_title.to_string(),
        album_url: album_url.to_string(),
        category: category.to_string(),
        album_track_number: track.number,
        song_title: track.title,
        song_url: track.url,
        song_artists: fields.artists,
        song_release_date: fields.release_date,
        song_page_views: fields.page_views,
        song_lyrics: fields.lyrics,
        song_writers: fields.writers,
        song_producers: fields.producers,
        song_tags: fields.tags,
    }
}

/// Scrape one album: the album page once, then each track page once.
///
/// Sequential by design; a fetch failure anywhere aborts the album.
/// Garbage markup propagates as missing fields, not as an error.
pub async fn assemble_album(
    fetcher: &Fetcher,
    album_title: &str,
    album_url: &str,
    category: &str,
) -> ScrapeResult<Vec<SongRecord>> {
    let album_html = fetcher.get(album_url).await?;
    let tracks = {
        let doc = Html::parse_document(&album_html);
        extract::tracklist(&doc)
    };
    log::info!("{album_title}: {} tracks", tracks.len());

    let mut records = Vec::with_capacity(tracks.len());
    for track in tracks {
        let song_html = fetcher.get(&track.url).await?;
        let fields = {
            let doc = Html::parse_document(&song_html);
            song_fields_from_doc(&doc)?
        };
        log::debug!("{}: scraped {}", album_title, track.title);
        records.push(record_from_parts(
            album_title,
            album_url,
            category,
            track,
            fields,
        ));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONG_PAGE: &str = r#"
        <html><body>
            <h1 class="SongHeaderdesktop__Title-sc-1">Test Song</h1>
            <div class="HeaderArtistAndTracklistdesktop__Container-sc-4vdeb8-0 hjExsS">
                <span><span>Ann Artist &amp; Ben Band</span></span>
            </div>
            <div class="MetadataStats__Container-sc-1">
                <span class="LabelWithIcon__Label-sc-1">May 5, 2023</span>
                <span class="LabelWithIcon__Label-sc-1">44</span>
                <span class="LabelWithIcon__Label-sc-1">2.4M views</span>
            </div>
            <div data-lyrics-container="true">[Verse]<br>Only line</div>
            <div class="SongInfo__Credit-sc-1">
                <span>Written By</span><a>Ann Artist</a>
            </div>
            <div class="SongInfo__Credit-sc-1">
                <span>Produced By</span><a>Pat Producer</a>
            </div>
            <div class="SongTags__Container-xixwg3-1"><a>Pop</a></div>
        </body></html>
    "#;

    #[test]
    fn test_song_fields_from_doc_merges_every_extractor() {
        let doc = Html::parse_document(SONG_PAGE);
        let fields = song_fields_from_doc(&doc).unwrap();
        assert_eq!(fields.artists, vec!["Ann Artist", "Ben Band"]);
        assert_eq!(
            fields.release_date,
            chrono::NaiveDate::from_ymd_opt(2023, 5, 5)
        );
        assert_eq!(fields.page_views, 2_400_000);
        assert_eq!(fields.lyrics, vec!["Only line"]);
        assert_eq!(fields.writers, vec!["Ann Artist"]);
        assert_eq!(fields.producers, vec!["Pat Producer"]);
        assert_eq!(fields.tags, vec!["Pop"]);
    }

    #[test]
    fn test_record_from_parts_carries_album_identity() {
        let track = TrackDescriptor {
            number: 3,
            title: "Test Song".to_string(),
            url: "https://example.com/test-song".to_string(),
        };
        let doc = Html::parse_document(SONG_PAGE);
        let fields = song_fields_from_doc(&doc).unwrap();
        let record = record_from_parts(
            "Debut",
            "https://example.com/albums/Debut",
            "studio album",
            track,
            fields,
        );
        assert_eq!(record.album_title, "Debut");
        assert_eq!(record.category, "studio album");
        assert_eq!(record.album_track_number, 3);
        assert_eq!(record.song_title, "Test Song");
        assert_eq!(record.song_page_views, 2_400_000);
    }
}
