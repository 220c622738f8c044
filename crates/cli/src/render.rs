//! Console text for movies and stats.

use moviedb_core::{Movie, RatingStats};

pub(crate) const NO_MOVIES: &str = "No movies in database.";

/// Ratings read like `8.8` or `9.0`, never `9`.
pub(crate) fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

pub(crate) fn movie_line(movie: &Movie) -> String {
    format!("{}: Rating {}, Year {}", movie.title, format_rating(movie.rating), movie.year)
}

pub(crate) fn stats_line(stats: &RatingStats) -> String {
    format!(
        "Movies: {} | Min rating: {:.2} | Max rating: {:.2} | Avg rating: {:.2}",
        stats.count, stats.min_rating, stats.max_rating, stats.avg_rating
    )
}
