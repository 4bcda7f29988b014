//! Core domain model for songbook.
//!
//! This crate defines the discography data model (catalog entries, track
//! descriptors, song records, the flat discography table and its edit
//! operations) and the SQLite store the table is exported to.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod discography;
pub mod error;
pub mod model;
pub mod store;

pub use discography::DiscographyTable;
pub use error::{Error, Result};
pub use store::Store;
