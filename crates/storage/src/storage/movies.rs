use moviedb_core::{Catalog, Movie, WriteOutcome, normalize_title};
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, get_conn, row_to_movie};
use crate::error::StorageError;

impl Storage {
    /// Every stored movie in insertion order. An empty store yields an empty catalog.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_all(&self) -> Result<Catalog, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT title, year, rating, poster FROM movies ORDER BY id")?;
        let movies = stmt.query_map([], row_to_movie)?.collect::<Result<Vec<_>, _>>()?;
        Ok(Catalog::new(movies))
    }

    /// Case-insensitive point lookup.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find(&self, title: &str) -> Result<Option<Movie>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let movie = conn
            .query_row(
                "SELECT title, year, rating, poster FROM movies WHERE title_normalized = ?1",
                params![normalize_title(title)],
                row_to_movie,
            )
            .optional()?;
        Ok(movie)
    }

    /// Number of stored movies.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Insert a movie.
    ///
    /// Rejected as [`WriteOutcome::Duplicate`] when a title equal ignoring case
    /// is already stored. Surrounding whitespace is dropped, casing is kept as given.
    pub fn add(&self, movie: &Movie) -> WriteOutcome {
        let title = movie.title.trim();
        let key = normalize_title(title);
        if key.is_empty() {
            return WriteOutcome::Invalid { reason: "title must not be empty".to_owned() };
        }

        match self.insert_movie(movie, title, &key) {
            Ok(()) => {
                tracing::debug!(title, "movie added");
                WriteOutcome::Applied
            },
            Err(e) if e.is_duplicate() => {
                tracing::debug!(title, "duplicate title rejected");
                WriteOutcome::Duplicate { title: title.to_owned() }
            },
            Err(e) => {
                tracing::warn!(title, error = %e, "failed to add movie");
                WriteOutcome::Failed { diagnostic: e.to_string() }
            },
        }
    }

    /// Delete the movie whose title matches ignoring case.
    pub fn delete(&self, title: &str) -> WriteOutcome {
        let key = normalize_title(title);
        let result = self.execute_in_tx("delete", |tx| {
            tx.execute("DELETE FROM movies WHERE title_normalized = ?1", params![key])
        });
        Self::affected_to_outcome(result, title, "delete")
    }

    /// Replace the rating of the movie whose title matches ignoring case.
    ///
    /// Only `rating` changes; the stored title casing, year and poster are kept.
    /// The value is stored as given, range checks belong to the caller.
    pub fn update_rating(&self, title: &str, new_rating: f64) -> WriteOutcome {
        let key = normalize_title(title);
        let result = self.execute_in_tx("update rating", |tx| {
            tx.execute(
                "UPDATE movies SET rating = ?1 WHERE title_normalized = ?2",
                params![new_rating, key],
            )
        });
        Self::affected_to_outcome(result, title, "update rating")
    }

    fn insert_movie(&self, movie: &Movie, title: &str, key: &str) -> Result<(), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO movies (title, title_normalized, year, rating, poster)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![title, key, movie.year, movie.rating, movie.poster],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Run one statement in its own transaction and return the affected row count.
    fn execute_in_tx<F>(&self, op: &str, statement: F) -> Result<usize, StorageError>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> rusqlite::Result<usize>,
    {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        let affected = statement(&tx)?;
        if affected > 1 {
            // title_normalized is UNIQUE, so this means the index is gone; keep the store as it was.
            return Err(StorageError::Integrity(format!(
                "{op} matched {affected} rows, expected at most one"
            )));
        }
        tx.commit()?;
        Ok(affected)
    }

    fn affected_to_outcome(
        result: Result<usize, StorageError>,
        title: &str,
        op: &str,
    ) -> WriteOutcome {
        match result {
            Ok(0) => WriteOutcome::NotFound { title: title.to_owned() },
            Ok(_) => {
                tracing::debug!(title, op, "movie updated");
                WriteOutcome::Applied
            },
            Err(e) => {
                tracing::warn!(title, op, error = %e, "store mutation failed");
                WriteOutcome::Failed { diagnostic: e.to_string() }
            },
        }
    }
}
