//! Wire format of the OMDb `?t=` endpoint and its mapping to [`MovieMetadata`].

use moviedb_core::MovieMetadata;
use moviedb_core::constants::POSTER_UNAVAILABLE;
use serde::Deserialize;

/// Raw OMDb response. Every field is a string on the wire, `"N/A"` when unknown.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct OmdbResponse {
    pub(crate) response: String,
    pub(crate) error: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) year: Option<String>,
    #[serde(rename = "imdbRating")]
    pub(crate) imdb_rating: Option<String>,
    pub(crate) poster: Option<String>,
}

impl OmdbResponse {
    pub(crate) fn is_found(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Map to metadata, falling back to `query` when the title is missing.
    pub(crate) fn into_metadata(self, query: &str) -> MovieMetadata {
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| query.trim().to_owned());
        MovieMetadata {
            title,
            year: self.year.as_deref().and_then(parse_year),
            rating: self.imdb_rating.as_deref().and_then(parse_rating),
            poster: self.poster.as_deref().and_then(parse_poster),
        }
    }
}

/// Leading four-digit year. Series ranges like `"2008–2013"` keep the start year.
pub(crate) fn parse_year(raw: &str) -> Option<i32> {
    let digits: String = raw.trim().chars().take_while(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return None;
    }
    digits.parse().ok()
}

pub(crate) fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

pub(crate) fn parse_poster(raw: &str) -> Option<String> {
    let poster = raw.trim();
    (!poster.is_empty() && poster != POSTER_UNAVAILABLE).then(|| poster.to_owned())
}
