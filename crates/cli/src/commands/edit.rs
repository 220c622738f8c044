use std::io::Write;

use anyhow::Result;
use moviedb_core::WriteOutcome;
use moviedb_service::{AddReport, CatalogService};

use crate::render::format_rating;

pub(crate) async fn add_movie<W: Write>(service: &CatalogService, title: &str, out: &mut W) -> Result<bool> {
    let added = match service.add_by_title(title).await? {
        AddReport::Added(movie) => {
            writeln!(
                out,
                "Added '{}' with rating {}, year {}",
                movie.title,
                format_rating(movie.rating),
                movie.year
            )?;
            true
        },
        AddReport::AlreadyExists(existing) => {
            writeln!(out, "Movie already exists as '{}'.", existing.title)?;
            false
        },
        AddReport::NotFound { query } => {
            writeln!(out, "Movie '{query}' not found.")?;
            false
        },
        AddReport::Rejected(outcome) => {
            writeln!(out, "Movie not added: {outcome}")?;
            false
        },
    };
    Ok(added)
}

pub(crate) async fn delete_movie<W: Write>(service: &CatalogService, title: &str, out: &mut W) -> Result<bool> {
    let outcome = service.delete(title).await?;
    if outcome == WriteOutcome::Applied {
        writeln!(out, "Movie '{}' deleted.", title.trim())?;
    } else {
        writeln!(out, "Movie not deleted: {outcome}")?;
    }
    Ok(outcome.is_success())
}

pub(crate) async fn update_movie<W: Write>(
    service: &CatalogService,
    title: &str,
    rating: f64,
    out: &mut W,
) -> Result<bool> {
    let outcome = service.update_rating(title, rating).await?;
    if outcome == WriteOutcome::Applied {
        writeln!(out, "Updated '{}' with rating {}", title.trim(), format_rating(rating))?;
    } else {
        writeln!(out, "Movie not updated: {outcome}")?;
    }
    Ok(outcome.is_success())
}
