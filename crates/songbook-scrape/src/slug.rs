//! URL slug transforms for album and artist names.

use regex::Regex;
use std::sync::OnceLock;

/// Characters outside {letters, digits, whitespace, hyphen, apostrophe},
/// plus whitespace-hyphen runs, all removed before hyphenation.
fn strip_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\s'-]|\s-|'").expect("valid slug regex"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Slug form of an artist name: whitespace replaced with hyphens.
#[must_use]
pub fn artist_slug(name: &str) -> String {
    whitespace_re().replace_all(name, "-").into_owned()
}

/// Slug form of an album title.
///
/// Drops punctuation and apostrophes, then hyphenates the remaining
/// whitespace. Idempotent: a title that is already a slug passes through
/// unchanged.
#[must_use]
pub fn album_slug(title: &str) -> String {
    let stripped = strip_re().replace_all(title, "");
    whitespace_re().replace_all(&stripped, "-").into_owned()
}

/// Canonical album page URL for an artist/title pair.
#[must_use]
pub fn album_url(base_url: &str, artist: &str, album_title: &str) -> String {
    format!(
        "{}/albums/{}/{}",
        base_url.trim_end_matches('/'),
        artist_slug(artist),
        album_slug(album_title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_slug_hyphenates_whitespace() {
        assert_eq!(album_slug("Speak Now"), "Speak-Now");
    }

    #[test]
    fn test_album_slug_drops_punctuation_and_apostrophes() {
        assert_eq!(album_slug("Red (Taylor's Version)"), "Red-Taylors-Version");
        assert_eq!(album_slug("1989 (Deluxe!)"), "1989-Deluxe");
    }

    #[test]
    fn test_album_slug_removes_whitespace_hyphen_runs() {
        assert_eq!(album_slug("folklore - deluxe"), "folklore-deluxe");
    }

    #[test]
    fn test_album_slug_idempotent_on_clean_input() {
        for title in ["Speak Now", "Red (Taylor's Version)", "evermore", "Lover"] {
            let once = album_slug(title);
            assert_eq!(album_slug(&once), once, "not idempotent for {title:?}");
        }
    }

    #[test]
    fn test_artist_slug() {
        assert_eq!(artist_slug("Taylor Swift"), "Taylor-Swift");
    }

    #[test]
    fn test_album_url() {
        assert_eq!(
            album_url("https://genius.com", "Taylor Swift", "Speak Now"),
            "https://genius.com/albums/Taylor-Swift/Speak-Now"
        );
    }
}
