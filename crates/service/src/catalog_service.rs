use std::path::PathBuf;
use std::sync::Arc;

use moviedb_core::constants::{
    FALLBACK_RATING, FALLBACK_YEAR, MAX_RATING, MIN_RATING, POSTER_UNAVAILABLE,
};
use moviedb_core::{Catalog, Movie, MovieLookup, MovieMetadata, RatingStats, WriteOutcome};
use moviedb_site::SiteOptions;
use moviedb_storage::Storage;
use rand::Rng;
use rand::seq::SliceRandom as _;

use crate::error::ServiceError;

/// What happened to an add-by-title request.
#[derive(Debug, Clone, PartialEq)]
pub enum AddReport {
    /// Looked up and stored under the resolved title.
    Added(Movie),
    /// The catalog already holds this title (ignoring case); no lookup was made.
    AlreadyExists(Movie),
    /// The lookup service has no match for the query.
    NotFound { query: String },
    /// The store refused the resolved movie (e.g. the resolved title is already stored).
    Rejected(WriteOutcome),
}

/// Reject ratings the user may not assign: non-finite or outside 0–10.
pub fn validate_rating(rating: f64) -> Result<f64, ServiceError> {
    if rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(ServiceError::InvalidInput(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )))
    }
}

fn require_title(title: &str) -> Result<&str, ServiceError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ServiceError::InvalidInput("title cannot be empty".to_owned()));
    }
    Ok(title)
}

fn movie_from_metadata(meta: MovieMetadata) -> Movie {
    Movie {
        title: meta.title,
        year: meta.year.unwrap_or(FALLBACK_YEAR),
        rating: meta.rating.unwrap_or(FALLBACK_RATING),
        poster: meta.poster.unwrap_or_else(|| POSTER_UNAVAILABLE.to_owned()),
    }
}

/// Catalog use cases over one store handle and an optional lookup client.
#[derive(Clone)]
pub struct CatalogService {
    storage: Storage,
    lookup: Option<Arc<dyn MovieLookup>>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("storage", &self.storage)
            .field("lookup", &self.lookup.is_some())
            .finish()
    }
}

impl CatalogService {
    #[must_use]
    pub fn new(storage: Storage, lookup: Option<Arc<dyn MovieLookup>>) -> Self {
        Self { storage, lookup }
    }

    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Run a store call on the blocking pool.
    async fn blocking<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: FnOnce(Storage) -> Result<T, ServiceError> + Send + 'static,
        T: Send + 'static,
    {
        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || op(storage)).await?
    }

    /// Resolve `input` with the lookup client and store the result.
    ///
    /// Missing year, rating or poster fall back to 0, 0.0 and `"N/A"`.
    pub async fn add_by_title(&self, input: &str) -> Result<AddReport, ServiceError> {
        let query = require_title(input)?.to_owned();

        let lookup_key = query.clone();
        if let Some(existing) = self.blocking(move |s| Ok(s.find(&lookup_key)?)).await? {
            return Ok(AddReport::AlreadyExists(existing));
        }

        let lookup = self.lookup.as_ref().ok_or_else(|| {
            ServiceError::NotConfigured("movie lookup needs OMDB_API_KEY".to_owned())
        })?;
        let Some(meta) = lookup.lookup(&query).await? else {
            return Ok(AddReport::NotFound { query });
        };

        let movie = movie_from_metadata(meta);
        let to_store = movie.clone();
        let outcome = self.blocking(move |s| Ok(s.add(&to_store))).await?;

        if outcome.is_success() {
            tracing::info!(query = %query, title = %movie.title, "movie added");
            Ok(AddReport::Added(movie))
        } else {
            tracing::debug!(query = %query, outcome = %outcome, "store rejected looked-up movie");
            Ok(AddReport::Rejected(outcome))
        }
    }

    pub async fn list(&self) -> Result<Catalog, ServiceError> {
        self.blocking(|s| Ok(s.list_all()?)).await
    }

    pub async fn count(&self) -> Result<usize, ServiceError> {
        self.blocking(|s| Ok(s.count()?)).await
    }

    pub async fn stats(&self) -> Result<Option<RatingStats>, ServiceError> {
        self.blocking(|s| Ok(s.stats()?)).await
    }

    pub async fn delete(&self, title: &str) -> Result<WriteOutcome, ServiceError> {
        let title = require_title(title)?.to_owned();
        self.blocking(move |s| Ok(s.delete(&title))).await
    }

    /// Validate and store a new rating. Only the rating of the matched movie changes.
    pub async fn update_rating(&self, title: &str, rating: f64) -> Result<WriteOutcome, ServiceError> {
        let title = require_title(title)?.to_owned();
        let rating = validate_rating(rating)?;
        self.blocking(move |s| Ok(s.update_rating(&title, rating))).await
    }

    /// Case-insensitive substring search over titles, in catalog order.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, ServiceError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::InvalidInput("search text cannot be empty".to_owned()));
        }
        let catalog = self.list().await?;
        Ok(catalog.search(query).into_iter().cloned().collect())
    }

    /// All movies, best rated first.
    pub async fn ranked(&self) -> Result<Vec<Movie>, ServiceError> {
        let catalog = self.list().await?;
        Ok(catalog.ranked().into_iter().cloned().collect())
    }

    pub async fn random_pick(&self) -> Result<Option<Movie>, ServiceError> {
        let catalog = self.list().await?;
        Ok(catalog.as_slice().choose(&mut rand::thread_rng()).cloned())
    }

    pub async fn random_pick_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Option<Movie>, ServiceError> {
        let catalog = self.list().await?;
        Ok(catalog.as_slice().choose(rng).cloned())
    }

    /// Render the current catalog to a static page. Returns the written path.
    pub async fn generate_site(&self, options: &SiteOptions) -> Result<PathBuf, ServiceError> {
        let options = options.clone();
        self.blocking(move |s| {
            let catalog = s.list_all()?;
            Ok(moviedb_site::generate_website(&catalog, &options)?)
        })
        .await
    }
}
