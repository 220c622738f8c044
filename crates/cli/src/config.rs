use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use moviedb_core::MovieLookup;
use moviedb_core::env_config::env_first_non_empty;
use moviedb_omdb::{DEFAULT_BASE_URL, OmdbClient};

const API_KEY_VARS: &[&str] = &["OMDB_API_KEY", "KEY"];

pub(crate) fn default_db_path() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join("moviedb").join("movies.db")
}

fn omdb_base_url() -> String {
    env_first_non_empty(&["OMDB_API_URL"]).unwrap_or_else(|| DEFAULT_BASE_URL.to_owned())
}

/// OMDb client from the environment, or `None` when no API key is set.
///
/// Commands that never add movies work without a key.
pub(crate) fn lookup_from_env() -> Result<Option<Arc<dyn MovieLookup>>> {
    let Some(api_key) = env_first_non_empty(API_KEY_VARS) else {
        tracing::debug!("no OMDb API key configured, adding movies is disabled");
        return Ok(None);
    };
    let client = OmdbClient::new(api_key, omdb_base_url()).context("failed to build OMDb client")?;
    tracing::debug!(base_url = client.base_url(), "OMDb lookup enabled");
    Ok(Some(Arc::new(client)))
}
