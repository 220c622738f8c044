//! `SQLite` record store.
//!
//! All methods are synchronous. Each operation checks out one pooled
//! connection; mutations run inside a single transaction so a failed
//! statement never leaves a partial write behind.

// SQLite uses i64 for counts, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod movies;
mod stats;

use moviedb_core::Movie;
use moviedb_core::env_config::env_parse_with_default;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

const DEFAULT_POOL_SIZE: u32 = 4;

/// Handle to the movie store. Cheap to clone; clones share one pool.
///
/// Construct once at startup and pass it to whatever needs it. The pool
/// (and every connection) is closed when the last clone is dropped.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Map a `SELECT title, year, rating, poster` row to a [`Movie`].
pub(crate) fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
    Ok(Movie { title: row.get(0)?, year: row.get(1)?, rating: row.get(2)?, poster: row.get(3)? })
}

/// Connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("MOVIEDB_DB_POOL_SIZE", DEFAULT_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the store at `db_path`.
    ///
    /// Creates the parent directory and the `movies` table when absent.
    /// Opening an existing store never alters its data.
    ///
    /// # Errors
    /// Returns error if the directory, pool or schema cannot be set up.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }
}
