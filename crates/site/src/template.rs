use std::path::Path;

use crate::error::SiteError;

pub const TITLE_PLACEHOLDER: &str = "__TEMPLATE_TITLE__";
pub const GRID_PLACEHOLDER: &str = "__TEMPLATE_MOVIE_GRID__";

/// Built-in page used when no template file is given.
pub const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8"/>
    <title>My Movie App</title>
    <link rel="stylesheet" href="style.css"/>
</head>
<body>
<div class="list-movies-title">
    <h1>__TEMPLATE_TITLE__</h1>
</div>
<div>
    <ol class="movie-grid">
        __TEMPLATE_MOVIE_GRID__
    </ol>
</div>
</body>
</html>
"#;

/// Stylesheet written next to the page when none exists yet.
pub const DEFAULT_STYLESHEET: &str = "body {
    background: #f5f5f0;
    color: #1a1a1a;
    font-family: 'Helvetica Neue', Arial, sans-serif;
    margin: 0;
}

.list-movies-title {
    background: #009b50;
    color: #fff;
    padding: 10px 0;
    text-align: center;
}

.movie-grid {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    list-style: none;
    padding: 0;
}

.movie {
    margin: 20px;
    width: 128px;
}

.movie-poster {
    box-shadow: 0 1px 4px rgba(0, 0, 0, 0.3);
    height: 193px;
    width: 128px;
}

.movie-title {
    font-size: 0.85em;
    font-weight: bold;
    margin-top: 6px;
}

.movie-year {
    color: #888;
    font-size: 0.8em;
}
";

/// Read a template from disk, or return [`DEFAULT_TEMPLATE`] when `path` is `None`.
///
/// # Errors
/// Returns an error if the file cannot be read or lacks the grid placeholder.
pub fn load_template(path: Option<&Path>) -> Result<String, SiteError> {
    let Some(path) = path else {
        return Ok(DEFAULT_TEMPLATE.to_owned());
    };
    let template = std::fs::read_to_string(path)
        .map_err(|source| SiteError::TemplateRead { path: path.to_path_buf(), source })?;
    if !template.contains(GRID_PLACEHOLDER) {
        return Err(SiteError::TemplateMissingPlaceholder {
            path: path.to_path_buf(),
            placeholder: GRID_PLACEHOLDER,
        });
    }
    tracing::debug!(path = %path.display(), "loaded custom template");
    Ok(template)
}
