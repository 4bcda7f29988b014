use anyhow::Result;

use songbook_core::Store;
use songbook_scrape::Config;

pub fn run_rename(config: &Config, old_name: &str, new_name: &str) -> Result<()> {
    let mut store = Store::open(&config.database_path)?;
    let table = store.load_discography()?.rename_credit(old_name, new_name);
    store.replace_discography(&table)?;

    println!("✓ Renamed {old_name:?} to {new_name:?} across all credits");
    Ok(())
}
