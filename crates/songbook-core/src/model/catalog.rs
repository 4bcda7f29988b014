use serde::{Deserialize, Serialize};

/// One album in the externally supplied catalog.
///
/// The category is a caller-defined classification label grouping albums
/// (e.g. "studio album", "rerecording", "non-album"). Entries are loaded
/// from a roster file and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Human-readable album title, used to derive the canonical album URL.
    pub album_title: String,
    /// Classification label for the album.
    pub category: String,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(album_title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            album_title: album_title.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_new() {
        let entry = CatalogEntry::new("Red", "studio album");
        assert_eq!(entry.album_title, "Red");
        assert_eq!(entry.category, "studio album");
    }
}
