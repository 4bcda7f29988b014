//! Catalog-driven discography building.

use songbook_core::model::CatalogEntry;
use songbook_core::DiscographyTable;

use crate::assemble::assemble_album;
use crate::error::ScrapeResult;
use crate::fetch::Fetcher;
use crate::slug;

/// Build the flat discography table for an artist from an album catalog.
///
/// Each catalog entry's canonical URL is derived from its title, the
/// album is assembled, and the per-album lists are flattened in
/// album-then-track order. A fetch failure partway aborts the whole
/// build; there is no partial-result checkpointing.
pub async fn build_discography(
    fetcher: &Fetcher,
    base_url: &str,
    artist: &str,
    catalog: &[CatalogEntry],
) -> ScrapeResult<DiscographyTable> {
    let mut table = DiscographyTable::new();
    for entry in catalog {
        let album_url = slug::album_url(base_url, artist, &entry.album_title);
        log::info!("Scraping {} ({album_url})", entry.album_title);
        let records =
            assemble_album(fetcher, &entry.album_title, &album_url, &entry.category).await?;
        for record in records {
            table.push(record);
        }
    }
    log::info!("Built discography: {} songs from {} albums", table.len(), catalog.len());
    Ok(table)
}
