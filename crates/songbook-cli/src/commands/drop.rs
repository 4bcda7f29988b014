use std::path::Path;

use anyhow::Result;

use songbook_core::Store;
use songbook_scrape::{roster, Config};

pub fn run_drop(config: &Config, roster_path: &Path, keep_duplicates: bool) -> Result<()> {
    let titles = roster::load_removals(roster_path)?;

    let mut store = Store::open(&config.database_path)?;
    let table = store.load_discography()?;
    let before = table.len();

    let table = table.remove_songs(&titles, !keep_duplicates);
    store.replace_discography(&table)?;

    println!("✓ Removed {} rows ({before} → {})", before - table.len(), table.len());
    Ok(())
}
