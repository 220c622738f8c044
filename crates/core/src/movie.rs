use serde::ser::SerializeMap as _;
use serde::{Deserialize, Serialize, Serializer};

/// A single catalog entry. The title is the record's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: i32,
    pub rating: f64,
    pub poster: String,
}

impl Movie {
    #[must_use]
    pub fn new(title: impl Into<String>, year: i32, rating: f64, poster: impl Into<String>) -> Self {
        Self { title: title.into(), year, rating, poster: poster.into() }
    }

    /// Comparison key used for uniqueness and title matching.
    #[must_use]
    pub fn title_key(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Normalize a title for case-insensitive comparison: trimmed, Unicode lowercase.
#[must_use]
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Value half of the `title -> {year, rating, poster}` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovieDetails<'a> {
    pub year: i32,
    pub rating: f64,
    pub poster: &'a str,
}

/// Snapshot of every stored movie, in store scan (insertion) order.
///
/// Serializes as a JSON object keyed by title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    #[must_use]
    pub const fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    /// Exact title lookup.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.title == title)
    }

    /// Case-insensitive title lookup.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Movie> {
        let key = normalize_title(title);
        self.movies.iter().find(|m| m.title_key() == key)
    }

    /// Titles in scan order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// Movies whose title contains `query`, ignoring case. An empty query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Movie> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.movies.iter().filter(|m| m.title.to_lowercase().contains(&needle)).collect()
    }

    /// Movies sorted by rating, highest first. Ties keep scan order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&Movie> {
        let mut ranked: Vec<&Movie> = self.movies.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked
    }
}

impl From<Vec<Movie>> for Catalog {
    fn from(movies: Vec<Movie>) -> Self {
        Self::new(movies)
    }
}

impl IntoIterator for Catalog {
    type Item = Movie;
    type IntoIter = std::vec::IntoIter<Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.movies.len()))?;
        for movie in &self.movies {
            map.serialize_entry(
                &movie.title,
                &MovieDetails { year: movie.year, rating: movie.rating, poster: &movie.poster },
            )?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Movie::new("Inception", 2010, 8.8, "http://img/inception.jpg"),
            Movie::new("The Room", 2003, 3.6, "N/A"),
            Movie::new("Interstellar", 2014, 8.7, "http://img/interstellar.jpg"),
            Movie::new("Memento", 2000, 8.8, "http://img/memento.jpg"),
        ])
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  The Matrix "), "the matrix");
        assert_eq!(normalize_title("AMÉLIE"), "amélie");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_get_is_exact_find_is_case_insensitive() {
        let catalog = sample();
        assert!(catalog.get("inception").is_none());
        assert_eq!(catalog.get("Inception").map(|m| m.year), Some(2010));
        assert_eq!(catalog.find("INCEPTION").map(|m| m.title.as_str()), Some("Inception"));
        assert!(catalog.find("Tenet").is_none());
    }

    #[test]
    fn test_search_substring_ignores_case() {
        let catalog = sample();
        let hits: Vec<&str> = catalog.search("IN").iter().map(|m| m.title.as_str()).collect();
        assert_eq!(hits, vec!["Inception", "Interstellar"]);
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_ranked_descending_and_stable() {
        let catalog = sample();
        let titles: Vec<&str> = catalog.ranked().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Memento", "Interstellar", "The Room"]);
    }

    #[test]
    fn test_serializes_as_title_keyed_object() {
        let catalog = Catalog::new(vec![Movie::new("Heat", 1995, 8.3, "N/A")]);
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json, serde_json::json!({"Heat": {"year": 1995, "rating": 8.3, "poster": "N/A"}}));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.ranked().is_empty());
        assert_eq!(serde_json::to_string(&catalog).unwrap(), "{}");
    }
}
