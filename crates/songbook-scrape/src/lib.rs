//! Scrape pipeline for songbook.
//!
//! Turns a lyrics-annotation site's album and song pages into the flat
//! discography table: page fetching, per-field extraction, record
//! assembly, catalog-driven building, roster loading, and the
//! network-touching editor operations.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod assemble;
pub mod build;
pub mod config;
pub mod edit;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod roster;
pub mod slug;

pub use build::build_discography;
pub use config::Config;
pub use error::{ScrapeError, ScrapeResult};
pub use fetch::Fetcher;
