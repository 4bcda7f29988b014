//! Error types for the scrape pipeline.

use thiserror::Error;

/// Errors that can occur while building or editing a discography.
///
/// A selector that matches nothing is never an error; absent fields come
/// back as empty collections or `None`. Only transport failures, non-2xx
/// responses, malformed numeric/date text, and roster problems fail hard.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The source site answered with a non-2xx status.
    #[error("fetch failed for {url}: HTTP {status}")]
    Fetch { url: String, status: u16 },

    /// Transport-level failure from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Numeric or date text that cannot be interpreted.
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },

    /// A roster file is missing an expected column.
    #[error("roster file missing column {column:?}")]
    MissingColumn { column: &'static str },

    /// An error propagated from roster reading.
    #[error("roster error: {0}")]
    Csv(#[from] csv::Error),

    /// An error propagated from the store.
    #[error("store error: {0}")]
    Store(#[from] songbook_core::Error),

    /// An I/O error outside the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for scrape results.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;
