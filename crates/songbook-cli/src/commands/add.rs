use std::path::Path;

use anyhow::Result;

use songbook_core::Store;
use songbook_scrape::{edit, roster, Config, Fetcher};

pub async fn run_add(config: &Config, roster_path: &Path) -> Result<()> {
    let additions = roster::load_additions(roster_path)?;

    let mut store = Store::open(&config.database_path)?;
    let mut table = store.load_discography()?;
    let before = table.len();

    let fetcher = Fetcher::new(config)?;
    edit::add_songs(&fetcher, &mut table, &additions).await?;

    store.replace_discography(&table)?;
    println!("✓ Added {} songs ({before} → {})", table.len() - before, table.len());
    Ok(())
}
