//! Typed error enum for the service layer.
//!
//! Unifies storage, lookup, and site failures into a single error type,
//! enabling callers to match on specific failure modes.

use moviedb_core::CoreError;
use moviedb_site::SiteError;
use moviedb_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage, lookup, and site failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage query failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Metadata lookup failed (network, API key, malformed response).
    #[error("lookup: {0}")]
    Lookup(#[from] CoreError),

    /// Website could not be generated.
    #[error("site: {0}")]
    Site(#[from] SiteError),

    /// Caller provided invalid input (empty title, rating out of range).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Required backend (lookup client) is not configured.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Blocking store task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(String),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}
