//! Record store for moviedb
//!
//! SQLite-backed table of movies keyed by case-insensitive title. Owns the
//! uniqueness and atomic-mutation guarantees; everything else reads through
//! [`Storage::list_all`] and [`Storage::stats`].

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use migrations::SCHEMA_VERSION;
pub use storage::Storage;
