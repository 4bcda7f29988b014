/// A schema migration.
#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    pub sql: &'static str,
}

/// The data tables of the store, in creation order. Songs logically
/// precede the exploded tables; albums stand alone.
pub const DATA_TABLES: &[&str] = &["albums", "songs", "artists", "writers", "producers", "tags"];

/// Canonical six-table schema. Exploded tables are keyed by song title,
/// one row per (title, value) pair; a song with an empty collection still
/// gets one NULL-valued row so every song appears in each exploded table.
pub(crate) const CREATE_DATA_TABLES: &str = r"
CREATE TABLE IF NOT EXISTS albums (
    album_title TEXT NOT NULL,
    album_url TEXT NOT NULL,
    category TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS songs (
    song_title TEXT NOT NULL,
    album_title TEXT NOT NULL,
    album_track_number INTEGER NOT NULL DEFAULT 0,
    song_url TEXT NOT NULL,
    song_release_date TEXT,
    song_page_views INTEGER NOT NULL DEFAULT 0,
    song_lyrics TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_songs_song_title ON songs(song_title);
CREATE INDEX IF NOT EXISTS idx_songs_album_title ON songs(album_title);

CREATE TABLE IF NOT EXISTS artists (
    song_title TEXT NOT NULL,
    song_artist TEXT
);

CREATE INDEX IF NOT EXISTS idx_artists_song_title ON artists(song_title);

CREATE TABLE IF NOT EXISTS writers (
    song_title TEXT NOT NULL,
    song_writer TEXT
);

CREATE INDEX IF NOT EXISTS idx_writers_song_title ON writers(song_title);

CREATE TABLE IF NOT EXISTS producers (
    song_title TEXT NOT NULL,
    song_producer TEXT
);

CREATE INDEX IF NOT EXISTS idx_producers_song_title ON producers(song_title);

CREATE TABLE IF NOT EXISTS tags (
    song_title TEXT NOT NULL,
    song_tag TEXT
);

CREATE INDEX IF NOT EXISTS idx_tags_song_title ON tags(song_title);
";

pub(crate) const DROP_DATA_TABLES: &str = r"
DROP TABLE IF EXISTS albums;
DROP TABLE IF EXISTS songs;
DROP TABLE IF EXISTS artists;
DROP TABLE IF EXISTS writers;
DROP TABLE IF EXISTS producers;
DROP TABLE IF EXISTS tags;
";

pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: CREATE_DATA_TABLES,
}];
