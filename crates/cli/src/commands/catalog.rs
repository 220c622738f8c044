use std::io::Write;

use anyhow::Result;
use moviedb_service::CatalogService;

use crate::render::{NO_MOVIES, format_rating, movie_line, stats_line};

pub(crate) async fn list_movies<W: Write>(service: &CatalogService, json: bool, out: &mut W) -> Result<()> {
    let catalog = service.list().await?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&catalog)?)?;
        return Ok(());
    }
    if catalog.is_empty() {
        writeln!(out, "{NO_MOVIES}")?;
        return Ok(());
    }
    writeln!(out, "{} movies in total:", catalog.len())?;
    for movie in &catalog {
        writeln!(out, "{}", movie_line(movie))?;
    }
    Ok(())
}

pub(crate) async fn show_stats<W: Write>(service: &CatalogService, json: bool, out: &mut W) -> Result<()> {
    let stats = service.stats().await?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&stats)?)?;
        return Ok(());
    }
    match stats {
        Some(stats) => writeln!(out, "{}", stats_line(&stats))?,
        None => writeln!(out, "{NO_MOVIES}")?,
    }
    Ok(())
}

pub(crate) async fn random_movie<W: Write>(service: &CatalogService, out: &mut W) -> Result<()> {
    match service.random_pick().await? {
        Some(movie) => writeln!(
            out,
            "Tonight's movie: {} (Rating: {}, Year {})",
            movie.title,
            format_rating(movie.rating),
            movie.year
        )?,
        None => writeln!(out, "{NO_MOVIES}")?,
    }
    Ok(())
}

pub(crate) async fn search_movies<W: Write>(service: &CatalogService, query: &str, out: &mut W) -> Result<()> {
    if service.count().await? == 0 {
        writeln!(out, "{NO_MOVIES}")?;
        return Ok(());
    }
    let matches = service.search(query).await?;
    if matches.is_empty() {
        writeln!(out, "No matching movies found for '{}'.", query.trim())?;
    }
    for movie in &matches {
        writeln!(out, "{}", movie_line(movie))?;
    }
    Ok(())
}

pub(crate) async fn ranked_movies<W: Write>(service: &CatalogService, out: &mut W) -> Result<()> {
    let ranked = service.ranked().await?;
    if ranked.is_empty() {
        writeln!(out, "{NO_MOVIES}")?;
        return Ok(());
    }
    writeln!(out, "Movies sorted by rating:")?;
    for movie in &ranked {
        writeln!(out, "{}", movie_line(movie))?;
    }
    Ok(())
}
