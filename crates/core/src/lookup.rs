//! Metadata lookup abstraction
//!
//! Lets the service layer resolve a free-text title without depending on a
//! concrete HTTP client, so tests can substitute an in-memory lookup.

use async_trait::async_trait;

use crate::Result;

/// Best-effort match returned by a lookup service, before fallbacks are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMetadata {
    /// Title as resolved by the service; may differ from the query.
    pub title: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub poster: Option<String>,
}

/// Resolves a title to metadata via some remote service.
#[async_trait]
pub trait MovieLookup: Send + Sync {
    /// Returns `Ok(None)` when the service reports no match.
    async fn lookup(&self, title: &str) -> Result<Option<MovieMetadata>>;
}
