use std::path::{Path, PathBuf};

use moviedb_core::Catalog;
use moviedb_core::constants::DEFAULT_SITE_TITLE;

use crate::error::SiteError;
use crate::render::render_website_html;
use crate::template::{DEFAULT_STYLESHEET, load_template};

/// Where and how to generate the page.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub title: String,
    pub template_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_SITE_TITLE.to_owned(),
            template_path: None,
            output_path: PathBuf::from("index.html"),
        }
    }
}

/// Write `html` to `path`, creating parent directories as needed.
///
/// A default `style.css` is written beside the page unless one already exists.
///
/// # Errors
/// Returns an error if any file or directory cannot be written.
pub fn write_site(path: &Path, html: &str) -> Result<(), SiteError> {
    let write_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source| SiteError::Write { path, source }
    };

    let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = parent {
        std::fs::create_dir_all(dir).map_err(write_err(dir))?;
    }
    std::fs::write(path, html).map_err(write_err(path))?;

    let stylesheet = parent.map_or_else(|| PathBuf::from("style.css"), |dir| dir.join("style.css"));
    if !stylesheet.exists() {
        std::fs::write(&stylesheet, DEFAULT_STYLESHEET).map_err(write_err(&stylesheet))?;
    }
    Ok(())
}

/// Load the template, render `catalog` and write the page. Returns the output path.
///
/// # Errors
/// Returns an error if the template cannot be loaded or the page cannot be written.
pub fn generate_website(catalog: &Catalog, options: &SiteOptions) -> Result<PathBuf, SiteError> {
    let template = load_template(options.template_path.as_deref())?;
    let html = render_website_html(&options.title, &template, catalog);
    write_site(&options.output_path, &html)?;
    tracing::info!(
        path = %options.output_path.display(),
        movies = catalog.len(),
        "website generated"
    );
    Ok(options.output_path.clone())
}
