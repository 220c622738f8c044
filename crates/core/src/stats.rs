use serde::{Deserialize, Serialize};

/// Aggregate over all stored ratings.
///
/// There is no empty value: an empty store yields `None` from
/// [`RatingStats::from_ratings`] instead of zeroed fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub count: usize,
    pub min_rating: f64,
    pub max_rating: f64,
    pub avg_rating: f64,
}

impl RatingStats {
    #[must_use]
    pub fn from_ratings(ratings: &[f64]) -> Option<Self> {
        let (&first, rest) = ratings.split_first()?;
        let (min_rating, max_rating, sum) = rest
            .iter()
            .fold((first, first, first), |(lo, hi, sum), &r| (lo.min(r), hi.max(r), sum + r));
        #[allow(clippy::cast_precision_loss, reason = "catalog sizes are far below 2^52")]
        let avg_rating = sum / ratings.len() as f64;
        Some(Self { count: ratings.len(), min_rating, max_rating, avg_rating })
    }
}
