//! Typed error enum for the storage layer.
//!
//! Lets callers match on specific failure modes (duplicate title, transient
//! lock contention) instead of downcasting opaque boxes.

use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation (title collision).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// SQL / constraint / engine failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Database file or its directory could not be prepared.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data violates an invariant the schema should guarantee.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Schema setup failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Pool(_) => true,
            Self::Database(rusqlite::Error::SqliteFailure(err, _)) => {
                matches!(err.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
            },
            _ => false,
        }
    }

    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<rusqlite::Error>`, NOT blanket `#[from]`.
///
/// - UNIQUE / PRIMARY KEY violations → `Duplicate`
/// - Everything else → `Database`
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(sqlite_err, msg)
                if sqlite_err.code == ErrorCode::ConstraintViolation
                    && matches!(
                        sqlite_err.extended_code,
                        ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    ) =>
            {
                Self::Duplicate(msg.clone().unwrap_or_else(|| sqlite_err.to_string()))
            },
            _ => Self::Database(err),
        }
    }
}
