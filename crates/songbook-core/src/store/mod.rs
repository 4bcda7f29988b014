//! The relational store: a disposable SQLite projection of the flat
//! discography table, fully rebuilt on every export.

mod db;
mod schema;

pub use db::Store;
pub use schema::{Migration, DATA_TABLES, MIGRATIONS};
