//! Roster files: the delimited inputs that drive catalog builds, bulk
//! removals, and bulk additions. All rosters have a header row; a missing
//! expected column is a hard error before any row is read.

use std::path::Path;

use serde::Deserialize;

use songbook_core::model::CatalogEntry;

use crate::error::{ScrapeError, ScrapeResult};

/// One bulk-add roster entry. An empty `album_url` means "no album".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Addition {
    pub album_url: String,
    pub category: String,
    pub song_url: String,
}

#[derive(Debug, Deserialize)]
struct Removal {
    song_title: String,
}

fn check_columns(headers: &csv::StringRecord, required: &'static [&'static str]) -> ScrapeResult<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(ScrapeError::MissingColumn { column });
        }
    }
    Ok(())
}

fn read_roster<T>(path: &Path, required: &'static [&'static str]) -> ScrapeResult<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
{
    let mut reader = csv::Reader::from_path(path)?;
    check_columns(reader.headers()?, required)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

/// Load the album catalog: (album_title, category) pairs, in file order.
pub fn load_catalog(path: &Path) -> ScrapeResult<Vec<CatalogEntry>> {
    read_roster(path, &["album_title", "category"])
}

/// Load a bulk-removal roster: song titles, in file order.
pub fn load_removals(path: &Path) -> ScrapeResult<Vec<String>> {
    let removals: Vec<Removal> = read_roster(path, &["song_title"])?;
    Ok(removals.into_iter().map(|r| r.song_title).collect())
}

/// Load a bulk-add roster: (album_url, category, song_url) triples, in
/// file order.
pub fn load_additions(path: &Path) -> ScrapeResult<Vec<Addition>> {
    read_roster(path, &["album_url", "category", "song_url"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog() {
        let file = write_file("album_title,category\nDebut,studio album\nRedone,rerecording\n");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(
            catalog,
            vec![
                CatalogEntry::new("Debut", "studio album"),
                CatalogEntry::new("Redone", "rerecording"),
            ]
        );
    }

    #[test]
    fn test_load_removals() {
        let file = write_file("song_title\nOld Version\nLive Cut\n");
        let removals = load_removals(file.path()).unwrap();
        assert_eq!(removals, vec!["Old Version", "Live Cut"]);
    }

    #[test]
    fn test_load_additions_with_empty_album_url() {
        let file = write_file("album_url,category,song_url\n,single,https://example.com/u1\n");
        let additions = load_additions(file.path()).unwrap();
        assert_eq!(additions.len(), 1);
        assert!(additions[0].album_url.is_empty());
        assert_eq!(additions[0].category, "single");
    }

    #[test]
    fn test_missing_column_is_schema_mismatch() {
        let file = write_file("title,category\nDebut,studio album\n");
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ScrapeError::MissingColumn {
                column: "album_title"
            }
        ));
    }

    #[test]
    fn test_extra_columns_are_tolerated() {
        let file = write_file("album_title,category,notes\nDebut,studio album,first one\n");
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
