//! Shared constants for moviedb.

/// Poster value stored when the lookup service has no poster.
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Year stored when the lookup service reports no usable year.
pub const FALLBACK_YEAR: i32 = 0;

/// Rating stored when the lookup service reports no usable rating.
pub const FALLBACK_RATING: f64 = 0.0;

/// Lowest rating a user may assign.
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a user may assign.
pub const MAX_RATING: f64 = 10.0;

/// Default heading of the generated web page.
pub const DEFAULT_SITE_TITLE: &str = "MY MOVIE APP";
