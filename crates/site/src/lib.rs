//! Static web page export for moviedb
//!
//! Renders a [`moviedb_core::Catalog`] into a single HTML document built from
//! a placeholder template. Read-only: callers hand in a snapshot.

mod error;
mod render;
mod template;
mod writer;

pub use error::SiteError;
pub use render::{POSTER_PLACEHOLDER_SRC, escape_html, render_website_html};
pub use template::{DEFAULT_STYLESHEET, DEFAULT_TEMPLATE, GRID_PLACEHOLDER, TITLE_PLACEHOLDER, load_template};
pub use writer::{SiteOptions, generate_website, write_site};
