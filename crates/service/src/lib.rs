//! Service layer for moviedb
//!
//! Centralizes catalog use cases between the command dispatcher and the
//! store, lookup client and site renderer.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod catalog_service;
mod error;

pub use catalog_service::{AddReport, CatalogService, validate_rating};
pub use error::ServiceError;
