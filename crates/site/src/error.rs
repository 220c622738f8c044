use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading templates or writing the generated page.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {path} has no {placeholder} placeholder")]
    TemplateMissingPlaceholder { path: PathBuf, placeholder: &'static str },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
