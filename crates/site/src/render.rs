use moviedb_core::constants::{FALLBACK_YEAR, POSTER_UNAVAILABLE};
use moviedb_core::{Catalog, Movie};

use crate::template::{GRID_PLACEHOLDER, TITLE_PLACEHOLDER};

/// Image shown for movies without a poster: an inline grey SVG, so it can never 404.
pub const POSTER_PLACEHOLDER_SRC: &str = "data:image/svg+xml;charset=utf-8,%3Csvg%20xmlns=%22http://www.w3.org/2000/svg%22%20width=%22128%22%20height=%22193%22%3E%3Crect%20width=%22100%25%22%20height=%22100%25%22%20fill=%22%23cccccc%22/%3E%3C/svg%3E";

/// Escape text for use in HTML content and single- or double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

fn poster_src(poster: &str) -> &str {
    let poster = poster.trim();
    if poster.is_empty() || poster == POSTER_UNAVAILABLE {
        POSTER_PLACEHOLDER_SRC
    } else {
        poster
    }
}

fn movie_li(movie: &Movie) -> String {
    let year = if movie.year == FALLBACK_YEAR { String::new() } else { movie.year.to_string() };
    format!(
        "<li><div class='movie'><img class='movie-poster' src='{}' alt='Poster image not available.'/>\
         <div class='movie-title'>{}</div><div class='movie-year'>{}</div></div></li>",
        escape_html(poster_src(&movie.poster)),
        escape_html(&movie.title),
        escape_html(&year),
    )
}

/// Fill `template` with the page title and one `<li>` per movie, in catalog order.
#[must_use]
pub fn render_website_html(title: &str, template: &str, catalog: &Catalog) -> String {
    let grid: String = catalog.iter().map(movie_li).collect();
    template.replace(TITLE_PLACEHOLDER, &escape_html(title)).replace(GRID_PLACEHOLDER, &grid)
}
