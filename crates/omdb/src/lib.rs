//! OMDb client for resolving a free-text title to movie metadata

mod client;
mod error;
mod models;


pub use client::{DEFAULT_BASE_URL, OmdbClient};
pub use error::OmdbError;
