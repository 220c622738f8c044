//! Core types and traits for moviedb
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
pub mod env_config;
mod error;
mod lookup;
mod movie;
mod outcome;
mod stats;

pub use error::*;
pub use lookup::*;
pub use movie::*;
pub use outcome::*;
pub use stats::*;
