use moviedb_core::RatingStats;

use super::{Storage, get_conn};
use crate::error::StorageError;

impl Storage {
    /// Count, min, max and average over all current ratings.
    ///
    /// Returns `Ok(None)` on an empty store rather than degenerate numbers.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn stats(&self) -> Result<Option<RatingStats>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare("SELECT rating FROM movies")?;
        let ratings = stmt.query_map([], |row| row.get::<_, f64>(0))?.collect::<Result<Vec<_>, _>>()?;
        Ok(RatingStats::from_ratings(&ratings))
    }
}
