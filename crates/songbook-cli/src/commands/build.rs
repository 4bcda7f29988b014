use std::path::Path;

use anyhow::Result;

use songbook_core::Store;
use songbook_scrape::{build_discography, roster, Config, Fetcher};

pub async fn run_build(
    config: &Config,
    catalog_path: &Path,
    artist: &str,
    drop: Option<&Path>,
    keep_duplicates: bool,
) -> Result<()> {
    let catalog = roster::load_catalog(catalog_path)?;
    log::info!("Building discography for {artist}: {} albums", catalog.len());

    let fetcher = Fetcher::new(config)?;
    let mut table = build_discography(&fetcher, &config.base_url, artist, &catalog).await?;

    if let Some(path) = drop {
        let titles = roster::load_removals(path)?;
        table = table.remove_songs(&titles, !keep_duplicates);
        log::info!("Applied {} removals, {} songs remain", titles.len(), table.len());
    }

    let mut store = Store::open(&config.database_path)?;
    store.replace_discography(&table)?;

    println!(
        "✓ Exported {} songs to {}",
        table.len(),
        config.database_path.display()
    );
    Ok(())
}
