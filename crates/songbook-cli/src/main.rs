use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use songbook_scrape::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "songbook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the store (default: ~/.local/share/songbook/songbook.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Scrape the full album catalog and export the store
    ///
    /// Reads the catalog roster (columns: album_title, category), derives
    /// each album's canonical URL from its title, scrapes the album page
    /// and every track page, and exports the flattened discography to the
    /// store with full-replace semantics.
    ///
    /// Scraping is fully sequential: one request at a time, no retries.
    /// A fetch failure aborts the build and leaves the store untouched.
    Build {
        /// Path to the album catalog roster
        catalog: PathBuf,
        /// Artist whose discography is being compiled
        #[arg(long)]
        artist: String,
        /// Removals roster (column: song_title) applied before export
        #[arg(long)]
        drop: Option<PathBuf>,
        /// Keep exact-title duplicate rows when applying removals
        #[arg(long)]
        keep_duplicates: bool,
    },
    /// Add songs from a roster to an existing store
    ///
    /// The roster columns are album_url, category, song_url; an empty
    /// album_url marks a song with no album. Each song is scraped fresh
    /// and appended, then the store is re-exported.
    Add {
        /// Path to the additions roster
        roster: PathBuf,
    },
    /// Remove songs listed in a roster from an existing store
    Drop {
        /// Path to the removals roster (column: song_title)
        roster: PathBuf,
        /// Keep exact-title duplicate rows
        #[arg(long)]
        keep_duplicates: bool,
    },
    /// Rename a credited individual across artists, writers, and producers
    Rename {
        /// Name as currently credited
        #[arg(long)]
        old: String,
        /// Replacement name
        #[arg(long)]
        new: String,
    },
    /// Show store contents: table counts and the most-viewed songs
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => Config::load_with_db_path(db)?,
        None => Config::load()?,
    };

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        Commands::Build {
            catalog,
            artist,
            drop,
            keep_duplicates,
        } => {
            commands::run_build(&config, &catalog, &artist, drop.as_deref(), keep_duplicates)
                .await?;
        }
        Commands::Add { roster } => {
            commands::run_add(&config, &roster).await?;
        }
        Commands::Drop {
            roster,
            keep_duplicates,
        } => {
            commands::run_drop(&config, &roster, keep_duplicates)?;
        }
        Commands::Rename { old, new } => {
            commands::run_rename(&config, &old, &new)?;
        }
        Commands::Status => {
            commands::show_status(&config)?;
        }
    }

    Ok(())
}
