use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::{Connection, Transaction};

use crate::discography::DiscographyTable;
use crate::error::{Error, Result};
use crate::model::{SongRecord, NO_ALBUM};

use super::schema::{CREATE_DATA_TABLES, DATA_TABLES, DROP_DATA_TABLES, MIGRATIONS};

/// Release dates are stored as ISO calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A store connection. One writer at a time by design; the connection is
/// opened and closed around each export or read.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) a store at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.apply_migrations()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.apply_migrations()?;
        Ok(store)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_migrations(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        drop(stmt);

        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Export
impl Store {
    /// Rebuild all six data tables from the given snapshot.
    ///
    /// Full-replace semantics: existing tables are dropped and recreated
    /// inside one transaction, so every table is derived from the same
    /// input and the store is never left half-written. Exporting the same
    /// table twice yields an equivalent store.
    pub fn replace_discography(&mut self, table: &DiscographyTable) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute_batch(DROP_DATA_TABLES)?;
        tx.execute_batch(CREATE_DATA_TABLES)?;

        Self::insert_albums(&tx, table)?;
        Self::insert_songs(&tx, table)?;
        Self::insert_exploded(&tx, "artists", "song_artist", table, artists_of)?;
        Self::insert_exploded(&tx, "writers", "song_writer", table, writers_of)?;
        Self::insert_exploded(&tx, "producers", "song_producer", table, producers_of)?;
        Self::insert_exploded(&tx, "tags", "song_tag", table, tags_of)?;

        tx.commit()?;
        log::info!("Exported {} songs", table.len());
        Ok(())
    }

    /// Albums are deduplicated by (title, url), first occurrence wins.
    fn insert_albums(tx: &Transaction<'_>, table: &DiscographyTable) -> Result<()> {
        let mut seen = HashSet::new();
        let mut stmt = tx.prepare(
            "INSERT INTO albums (album_title, album_url, category) VALUES (?1, ?2, ?3)",
        )?;
        for row in table {
            if seen.insert((row.album_title.clone(), row.album_url.clone())) {
                stmt.execute(rusqlite::params![
                    row.album_title,
                    row.album_url,
                    row.category
                ])?;
            }
        }
        Ok(())
    }

    fn insert_songs(tx: &Transaction<'_>, table: &DiscographyTable) -> Result<()> {
        let mut stmt = tx.prepare(
            "INSERT INTO songs (
                song_title, album_title, album_track_number, song_url,
                song_release_date, song_page_views, song_lyrics
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for row in table {
            stmt.execute(rusqlite::params![
                row.song_title,
                row.album_title,
                i64::from(row.album_track_number),
                row.song_url,
                row.song_release_date.map(|d| d.format(DATE_FORMAT).to_string()),
                i64::try_from(row.song_page_views).unwrap_or(0),
                row.song_lyrics.join("\n"),
            ])?;
        }
        Ok(())
    }

    fn insert_exploded<F>(
        tx: &Transaction<'_>,
        table_name: &str,
        column: &str,
        table: &DiscographyTable,
        values: F,
    ) -> Result<()>
    where
        F: Fn(&SongRecord) -> &[String],
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO {table_name} (song_title, {column}) VALUES (?1, ?2)"
        ))?;
        for row in table {
            let list = values(row);
            if list.is_empty() {
                stmt.execute(rusqlite::params![row.song_title, Option::<String>::None])?;
            } else {
                for value in list {
                    stmt.execute(rusqlite::params![row.song_title, value])?;
                }
            }
        }
        Ok(())
    }
}

fn artists_of(record: &SongRecord) -> &[String] {
    &record.song_artists
}

fn writers_of(record: &SongRecord) -> &[String] {
    &record.song_writers
}

fn producers_of(record: &SongRecord) -> &[String] {
    &record.song_producers
}

fn tags_of(record: &SongRecord) -> &[String] {
    &record.song_tags
}

// Read-back
impl Store {
    /// Reconstruct the flat discography table from the store.
    ///
    /// Exploded tables are keyed by song title, so two release instances
    /// that share a title get the merged credit lists of both on read-back.
    /// The editor's duplicate scrub is the intended remedy when that
    /// matters.
    pub fn load_discography(&self) -> Result<DiscographyTable> {
        let albums = self.load_albums()?;
        let artists = self.load_exploded("artists", "song_artist")?;
        let writers = self.load_exploded("writers", "song_writer")?;
        let producers = self.load_exploded("producers", "song_producer")?;
        let tags = self.load_exploded("tags", "song_tag")?;

        let mut stmt = self.conn.prepare(
            "SELECT song_title, album_title, album_track_number, song_url,
                    song_release_date, song_page_views, song_lyrics
             FROM songs
             ORDER BY rowid",
        )?;
        let mut rows = stmt.query([])?;
        let mut table = DiscographyTable::new();
        while let Some(row) = rows.next()? {
            let song_title: String = row.get(0)?;
            let album_title: String = row.get(1)?;
            let (album_url, category) = albums
                .get(&album_title)
                .cloned()
                .unwrap_or_else(|| (NO_ALBUM.to_string(), String::new()));

            let mut record = SongRecord::new(song_title.clone(), row.get::<_, String>(3)?);
            record.album_title = album_title;
            record.album_url = album_url;
            record.category = category;
            record.album_track_number = row.get::<_, i64>(2)? as u32;
            record.song_release_date = row
                .get::<_, Option<String>>(4)?
                .map(|s| {
                    NaiveDate::parse_from_str(&s, DATE_FORMAT)
                        .map_err(|e| Error::InvalidData(format!("release date {s:?}: {e}")))
                })
                .transpose()?;
            record.song_page_views = row.get::<_, i64>(5)? as u64;
            let lyrics: String = row.get(6)?;
            record.song_lyrics = if lyrics.is_empty() {
                Vec::new()
            } else {
                lyrics.split('\n').map(String::from).collect()
            };
            record.song_artists = artists.get(&song_title).cloned().unwrap_or_default();
            record.song_writers = writers.get(&song_title).cloned().unwrap_or_default();
            record.song_producers = producers.get(&song_title).cloned().unwrap_or_default();
            record.song_tags = tags.get(&song_title).cloned().unwrap_or_default();
            table.push(record);
        }
        Ok(table)
    }

    fn load_albums(&self) -> Result<HashMap<String, (String, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT album_title, album_url, category FROM albums ORDER BY rowid")?;
        let mut rows = stmt.query([])?;
        let mut albums = HashMap::new();
        while let Some(row) = rows.next()? {
            let title: String = row.get(0)?;
            albums
                .entry(title)
                .or_insert((row.get::<_, String>(1)?, row.get::<_, String>(2)?));
        }
        Ok(albums)
    }

    fn load_exploded(
        &self,
        table_name: &str,
        column: &str,
    ) -> Result<HashMap<String, Vec<String>>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT song_title, {column} FROM {table_name} ORDER BY rowid"
        ))?;
        let mut rows = stmt.query([])?;
        let mut out: HashMap<String, Vec<String>> = HashMap::new();
        while let Some(row) = rows.next()? {
            let title: String = row.get(0)?;
            let value: Option<String> = row.get(1)?;
            let entry = out.entry(title).or_default();
            if let Some(value) = value {
                entry.push(value);
            }
        }
        Ok(out)
    }
}

// Summary queries (the dashboards' read interface)
impl Store {
    /// Row count for each data table.
    pub fn table_counts(&self) -> Result<Vec<(String, i64)>> {
        let mut counts = Vec::with_capacity(DATA_TABLES.len());
        for name in DATA_TABLES {
            let count: i64 =
                self.conn
                    .query_row(&format!("SELECT COUNT(*) FROM {name}"), [], |row| {
                        row.get(0)
                    })?;
            counts.push(((*name).to_string(), count));
        }
        Ok(counts)
    }

    /// Total page views per category, most-viewed first.
    pub fn views_by_category(&self) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT a.category, SUM(s.song_page_views) AS total_views
             FROM songs s
             JOIN albums a ON s.album_title = a.album_title
             GROUP BY a.category
             ORDER BY total_views DESC",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// The `limit` most-viewed song pages.
    pub fn top_songs_by_views(&self, limit: u32) -> Result<Vec<(String, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT song_title, song_page_views
             FROM songs
             ORDER BY song_page_views DESC
             LIMIT ?1",
        )?;
        let rows = stmt
            .query_map([limit], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
