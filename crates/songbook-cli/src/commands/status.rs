use anyhow::Result;

use songbook_core::Store;
use songbook_scrape::Config;

pub fn show_status(config: &Config) -> Result<()> {
    let store = Store::open(&config.database_path)?;

    println!("Store: {}", config.database_path.display());
    println!();
    println!("Tables:");
    for (table, count) in store.table_counts()? {
        println!("  {table:<10} {count:>7} rows");
    }

    let views = store.views_by_category()?;
    if !views.is_empty() {
        println!();
        println!("Page views by category:");
        for (category, total) in views {
            println!("  {category:<24} {total:>12}");
        }
    }

    let top = store.top_songs_by_views(10)?;
    if !top.is_empty() {
        println!();
        println!("Most-viewed songs:");
        for (title, count) in top {
            println!("  {title:<40} {count:>12}");
        }
    }

    Ok(())
}
