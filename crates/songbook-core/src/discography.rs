//! The flat discography dataset and its edit operations.
//!
//! Every operation returns a new table value; the working table is never
//! mutated behind a caller's back. Row order is album-then-track order as
//! produced by the builder and is preserved by every operation here.

use std::collections::HashSet;

use crate::model::SongRecord;

/// Ordered collection of [`SongRecord`]s, one row per scraped release
/// instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscographyTable {
    rows: Vec<SongRecord>,
}

impl DiscographyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_rows(rows: Vec<SongRecord>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[SongRecord] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<SongRecord> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, record: SongRecord) {
        self.rows.push(record);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SongRecord> {
        self.rows.iter()
    }

    /// Keep only the first row for each song title.
    ///
    /// Used to scrub rereleases that chart on compilation pages under the
    /// same title as the original release instance.
    #[must_use]
    pub fn dedupe_by_title(&self) -> Self {
        let mut seen = HashSet::new();
        let rows = self
            .rows
            .iter()
            .filter(|row| seen.insert(row.song_title.clone()))
            .cloned()
            .collect();
        Self { rows }
    }

    /// Remove every row whose song title equals `title`.
    ///
    /// With `dedupe`, exact-title duplicates are dropped first (keeping the
    /// first occurrence of each title).
    #[must_use]
    pub fn remove_song(&self, title: &str, dedupe: bool) -> Self {
        let table = if dedupe { self.dedupe_by_title() } else { self.clone() };
        let rows = table
            .rows
            .into_iter()
            .filter(|row| row.song_title != title)
            .collect();
        Self { rows }
    }

    /// Remove every row whose song title appears in `titles`.
    ///
    /// The duplicate scrub runs once, before any removal.
    #[must_use]
    pub fn remove_songs(&self, titles: &[String], dedupe: bool) -> Self {
        let mut table = if dedupe { self.dedupe_by_title() } else { self.clone() };
        for title in titles {
            table = table.remove_song(title, false);
        }
        table
    }

    /// Rename a credited individual across all credit-bearing fields.
    ///
    /// Each of the artist, writer, and producer lists is rewritten
    /// independently per row; list order and length are preserved. Renaming
    /// a name that appears nowhere leaves the table unchanged, and the
    /// operation is idempotent.
    #[must_use]
    pub fn rename_credit(&self, old_name: &str, new_name: &str) -> Self {
        let rename = |names: &[String]| -> Vec<String> {
            names
                .iter()
                .map(|name| {
                    if name == old_name {
                        new_name.to_string()
                    } else {
                        name.clone()
                    }
                })
                .collect()
        };

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.song_artists = rename(&row.song_artists);
                row.song_writers = rename(&row.song_writers);
                row.song_producers = rename(&row.song_producers);
                row
            })
            .collect();
        Self { rows }
    }

    /// Stable-sort rows by the position of their category in `order`.
    ///
    /// Rows whose category is not listed sort last; the incoming row order
    /// is preserved within each category group. The ordering list is always
    /// supplied by the caller, it is not baked into the table.
    #[must_use]
    pub fn sort_by_category(&self, order: &[String]) -> Self {
        let position = |category: &str| {
            order
                .iter()
                .position(|c| c == category)
                .unwrap_or(order.len())
        };
        let mut rows = self.rows.clone();
        rows.sort_by_key(|row| position(&row.category));
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a DiscographyTable {
    type Item = &'a SongRecord;
    type IntoIter = std::slice::Iter<'a, SongRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: &str) -> SongRecord {
        SongRecord::new(title, url)
    }

    fn titles(table: &DiscographyTable) -> Vec<&str> {
        table.iter().map(|r| r.song_title.as_str()).collect()
    }

    #[test]
    fn test_remove_song_is_set_difference() {
        let table = DiscographyTable::from_rows(vec![
            record("Alpha", "u1"),
            record("Beta", "u2"),
            record("Gamma", "u3"),
        ]);

        let result = table.remove_song("Beta", false);
        assert_eq!(titles(&result), vec!["Alpha", "Gamma"]);

        // Removing an absent title changes nothing.
        let unchanged = table.remove_song("Delta", false);
        assert_eq!(unchanged, table);
    }

    #[test]
    fn test_remove_song_dedupes_first_keeping_first_occurrence() {
        let table = DiscographyTable::from_rows(vec![
            record("Dup", "u1"),
            record("Other", "u2"),
            record("Dup", "u3"),
        ]);

        // Removing an unrelated title with the dedupe pass leaves exactly
        // one "Dup" row: the first.
        let result = table.remove_song("Unrelated", true);
        assert_eq!(titles(&result), vec!["Dup", "Other"]);
        assert_eq!(result.rows()[0].song_url, "u1");
    }

    #[test]
    fn test_remove_songs_bulk() {
        let table = DiscographyTable::from_rows(vec![
            record("Alpha", "u1"),
            record("Beta", "u2"),
            record("Gamma", "u3"),
        ]);

        let drop = vec!["Alpha".to_string(), "Gamma".to_string()];
        let result = table.remove_songs(&drop, true);
        assert_eq!(titles(&result), vec!["Beta"]);
    }

    #[test]
    fn test_rename_credit_all_fields_independently() {
        let mut row = record("Song", "u1");
        row.song_artists = vec!["Ann".to_string(), "Ben".to_string()];
        row.song_writers = vec!["Ann".to_string()];
        row.song_producers = vec!["Cleo".to_string(), "Ann".to_string()];
        let table = DiscographyTable::from_rows(vec![row]);

        let renamed = table.rename_credit("Ann", "Anna");
        let row = &renamed.rows()[0];
        assert_eq!(row.song_artists, vec!["Anna", "Ben"]);
        assert_eq!(row.song_writers, vec!["Anna"]);
        assert_eq!(row.song_producers, vec!["Cleo", "Anna"]);
    }

    #[test]
    fn test_rename_credit_is_idempotent() {
        let mut row = record("Song", "u1");
        row.song_writers = vec!["Ann".to_string(), "Ben".to_string()];
        let table = DiscographyTable::from_rows(vec![row]);

        let once = table.rename_credit("Ann", "Anna");
        let twice = once.rename_credit("Ann", "Anna");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rename_credit_unknown_name_is_noop() {
        let mut row = record("Song", "u1");
        row.song_producers = vec!["Cleo".to_string()];
        let table = DiscographyTable::from_rows(vec![row]);

        let result = table.rename_credit("Nobody", "Somebody");
        assert_eq!(result, table);
    }

    #[test]
    fn test_sort_by_category_stable_with_unlisted_last() {
        let mut a = record("A", "u1");
        a.category = "rerecording".to_string();
        let mut b = record("B", "u2");
        b.category = "studio album".to_string();
        let mut c = record("C", "u3");
        c.category = "bootleg".to_string();
        let mut d = record("D", "u4");
        d.category = "studio album".to_string();
        let table = DiscographyTable::from_rows(vec![a, b, c, d]);

        let order = vec!["studio album".to_string(), "rerecording".to_string()];
        let sorted = table.sort_by_category(&order);
        assert_eq!(titles(&sorted), vec!["B", "D", "A", "C"]);
    }

    #[test]
    fn test_dedupe_by_title_keeps_first() {
        let table = DiscographyTable::from_rows(vec![
            record("One", "u1"),
            record("One", "u2"),
            record("Two", "u3"),
        ]);

        let deduped = table.dedupe_by_title();
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped.rows()[0].song_url, "u1");
    }
}
