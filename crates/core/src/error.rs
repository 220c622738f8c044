use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in moviedb
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Lookup error: {0}")]
    Lookup(String),
}

pub type Result<T> = StdResult<T, CoreError>;
