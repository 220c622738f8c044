use std::time::Duration;

use async_trait::async_trait;
use moviedb_core::env_config::env_parse_with_default;
use moviedb_core::{CoreError, MovieLookup, MovieMetadata};

use crate::error::OmdbError;
use crate::models::OmdbResponse;

/// Public OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_RETRIES: usize = 2;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Client for the OMDb title lookup endpoint.
pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    max_retries: usize,
    retry_delay: Duration,
}

impl std::fmt::Debug for OmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OmdbClient")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl OmdbClient {
    /// Creates a new client with the given API key and base URL.
    ///
    /// # Errors
    /// Returns an error if the key is blank or the HTTP client cannot be built.
    pub fn new(api_key: String, base_url: String) -> Result<Self, OmdbError> {
        if api_key.trim().is_empty() {
            return Err(OmdbError::MissingApiKey);
        }
        let timeout = env_parse_with_default("OMDB_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| OmdbError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            api_key: api_key.trim().to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    /// Number of extra attempts after a transient failure.
    #[must_use]
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Base delay between attempts; the n-th retry waits n times this long.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a movie by title.
    ///
    /// Returns `Ok(None)` when OMDb answers "Movie not found!".
    ///
    /// # Errors
    /// Returns an error if the request fails, OMDb returns a non-success
    /// status or an API error other than "not found", or the body is not
    /// valid JSON.
    pub async fn fetch(&self, title: &str) -> Result<Option<MovieMetadata>, OmdbError> {
        let query = title.trim();
        let mut last_error: Option<OmdbError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_delay.saturating_mul(u32::try_from(attempt).unwrap_or(u32::MAX));
                tokio::time::sleep(delay).await;
                tracing::warn!("OMDb retry attempt {attempt}/{} after {delay:?}", self.max_retries);
            }

            match self.fetch_once(query).await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_transient() => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }

        Err(OmdbError::RetriesExhausted(Box::new(
            last_error.unwrap_or_else(|| OmdbError::Api("no attempt was made".to_owned())),
        )))
    }

    async fn fetch_once(&self, query: &str) -> Result<Option<MovieMetadata>, OmdbError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("t", query), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(OmdbError::HttpStatus { code: status.as_u16(), body: truncate(&body, 200).to_owned() });
        }

        let parsed: OmdbResponse = serde_json::from_str(&body).map_err(|e| OmdbError::JsonParse {
            context: format!("title lookup response (body: {})", truncate(&body, 200)),
            source: e,
        })?;

        if parsed.is_found() {
            let meta = parsed.into_metadata(query);
            tracing::debug!(query, resolved = %meta.title, "OMDb match");
            return Ok(Some(meta));
        }

        let message = parsed.error.unwrap_or_else(|| "unknown error".to_owned());
        if message.to_lowercase().contains("not found") {
            tracing::info!(query, reason = %message, "OMDb has no match");
            Ok(None)
        } else {
            Err(OmdbError::Api(message))
        }
    }
}

#[async_trait]
impl MovieLookup for OmdbClient {
    async fn lookup(&self, title: &str) -> moviedb_core::Result<Option<MovieMetadata>> {
        self.fetch(title).await.map_err(|e| CoreError::Lookup(e.to_string()))
    }
}

/// Truncates a string to the given maximum length at a char boundary.
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
