//! Interactive numbered menu.
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so the loop runs the same against a terminal or an in-memory buffer.
//! End of input ends the session like choosing Exit.

use std::io::{BufRead, Write};

use anyhow::Result;
use moviedb_service::{CatalogService, ServiceError, validate_rating};
use moviedb_site::SiteOptions;

use crate::commands::{catalog, edit, site};
use crate::render::NO_MOVIES;

pub(crate) const MENU_OPTIONS: [&str; 10] = [
    "Exit",
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Generate website",
];

const MAX_CHOICE: usize = MENU_OPTIONS.len() - 1;

enum Flow {
    Continue,
    Exit,
}

/// Write `text`, then read one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn write_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n********** WELCOME TO MY MOVIE DATABASE **********\n")?;
    writeln!(out, "MENU:")?;
    for (idx, label) in MENU_OPTIONS.iter().enumerate() {
        writeln!(out, "{idx}. {label}")?;
    }
    writeln!(out)?;
    Ok(())
}

/// Extra line shown after an error the user can simply retry.
fn retry_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<ServiceError>()
        .filter(|e| e.is_transient())
        .map(|_| "The database is busy. Please try again.")
}

/// Ask until the answer parses as a rating in range.
fn read_rating<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(input, out, "Enter new rating (0-10): ")? else {
            return Ok(None);
        };
        match raw.parse::<f64>().ok().and_then(|r| validate_rating(r).ok()) {
            Some(rating) => return Ok(Some(rating)),
            None => writeln!(out, "Invalid input. Please enter a number between 0 and 10.")?,
        }
    }
}

async fn dispatch<R: BufRead, W: Write>(
    choice: usize,
    service: &CatalogService,
    site_options: &SiteOptions,
    input: &mut R,
    out: &mut W,
) -> Result<Flow> {
    match choice {
        0 => {
            writeln!(out, "Bye!\n********** END OF PROGRAM **********")?;
            return Ok(Flow::Exit);
        },
        1 => catalog::list_movies(service, false, out).await?,
        2 => {
            let Some(title) = prompt(input, out, "Enter movie title: ")? else {
                return Ok(Flow::Exit);
            };
            edit::add_movie(service, &title, out).await?;
        },
        3 => {
            let Some(title) = prompt(input, out, "Enter movie name to delete: ")? else {
                return Ok(Flow::Exit);
            };
            edit::delete_movie(service, &title, out).await?;
        },
        4 => {
            let Some(title) = prompt(input, out, "Enter movie name to update: ")? else {
                return Ok(Flow::Exit);
            };
            let Some(rating) = read_rating(input, out)? else {
                return Ok(Flow::Exit);
            };
            edit::update_movie(service, &title, rating, out).await?;
        },
        5 => catalog::show_stats(service, false, out).await?,
        6 => catalog::random_movie(service, out).await?,
        7 => {
            if service.count().await? == 0 {
                writeln!(out, "{NO_MOVIES}")?;
                return Ok(Flow::Continue);
            }
            let Some(query) = prompt(input, out, "Enter part of movie name to search: ")? else {
                return Ok(Flow::Exit);
            };
            catalog::search_movies(service, &query, out).await?;
        },
        8 => catalog::ranked_movies(service, out).await?,
        9 => site::generate_website(service, site_options, out).await?,
        _ => writeln!(out, "\nInvalid choice. Please enter a number between 0 and {MAX_CHOICE}.\n")?,
    }
    Ok(Flow::Continue)
}

/// Run the menu until Exit or end of input.
///
/// A failing command prints its error and returns to the menu.
pub(crate) async fn run_menu<R: BufRead, W: Write>(
    service: &CatalogService,
    site_options: &SiteOptions,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut first = true;
    loop {
        if !first && prompt(input, out, "\nPress [ENTER] to continue.\n")?.is_none() {
            break;
        }
        first = false;

        write_menu(out)?;
        let Some(raw) = prompt(input, out, &format!("ENTER CHOICE (0 - {MAX_CHOICE}): "))? else {
            break;
        };
        let Ok(choice) = raw.parse::<usize>() else {
            writeln!(out, "\nInvalid input. Please type a number.\n")?;
            continue;
        };

        match dispatch(choice, service, site_options, input, out).await {
            Ok(Flow::Continue) => {},
            Ok(Flow::Exit) => return Ok(()),
            Err(e) => {
                tracing::debug!(choice, error = %e, "menu command failed");
                writeln!(out, "Error: {e:#}")?;
                if let Some(hint) = retry_hint(&e) {
                    writeln!(out, "{hint}")?;
                }
            },
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedb_core::Movie;
    use moviedb_storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn seeded_service() -> (CatalogService, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(&dir.path().join("movies.db")).unwrap();
        for movie in [
            Movie::new("Inception", 2010, 8.8, "N/A"),
            Movie::new("The Room", 2003, 3.6, "N/A"),
        ] {
            assert!(storage.add(&movie).is_success());
        }
        (CatalogService::new(storage, None), dir)
    }

    async fn run_script(service: &CatalogService, site_options: &SiteOptions, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run_menu(service, site_options, &mut input, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_list_then_exit() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "1\n\n0\n").await;

        assert!(out.contains("MENU:"));
        assert!(out.contains("9. Generate website"));
        assert!(out.contains("2 movies in total:"));
        assert!(out.contains("Inception: Rating 8.8, Year 2010"));
        assert!(out.contains("Press [ENTER] to continue."));
        assert!(out.contains("Bye!"));
    }

    #[tokio::test]
    async fn test_first_iteration_does_not_ask_for_enter() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "0\n").await;
        assert!(!out.contains("Press [ENTER]"));
        assert!(out.contains("Bye!"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits_cleanly() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "").await;
        assert!(out.contains("ENTER CHOICE (0 - 9): "));
        assert!(!out.contains("Bye!"));
    }

    #[tokio::test]
    async fn test_invalid_choices_reprompt() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "abc\n\n12\n\n0\n").await;
        assert!(out.contains("Invalid input. Please type a number."));
        assert!(out.contains("Invalid choice. Please enter a number between 0 and 9."));
        assert!(out.contains("Bye!"));
    }

    #[tokio::test]
    async fn test_update_reprompts_on_bad_rating() {
        let (service, _dir) = seeded_service();
        let out =
            run_script(&service, &SiteOptions::default(), "4\ninception\nabc\n11\n9.5\n\n0\n").await;

        assert_eq!(out.matches("Invalid input. Please enter a number between 0 and 10.").count(), 2);
        assert!(out.contains("Updated 'inception' with rating 9.5"));
        let stored = service.storage().find("Inception").unwrap().unwrap();
        assert!((stored.rating - 9.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_delete_and_missing_title() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "3\nThe Room\n\n3\nThe Room\n\n0\n").await;

        assert!(out.contains("Movie 'The Room' deleted."));
        assert!(out.contains("Movie not deleted: movie 'The Room' not found"));
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_search_stats_and_ranking() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "7\nROOM\n\n5\n\n8\n\n0\n").await;

        assert!(out.contains("The Room: Rating 3.6, Year 2003"));
        assert!(out.contains("Movies: 2 | Min rating: 3.60 | Max rating: 8.80 | Avg rating: 6.20"));
        let ranked = out.split("Movies sorted by rating:").nth(1).unwrap();
        let inception = ranked.find("Inception").unwrap();
        let room = ranked.find("The Room").unwrap();
        assert!(inception < room);
    }

    #[tokio::test]
    async fn test_add_without_lookup_reports_error_and_continues() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "2\nHeat\n\n0\n").await;
        assert!(out.contains("Error: not configured"));
        assert!(out.contains("Bye!"));
        assert_eq!(service.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_add_existing_title_skips_lookup() {
        let (service, _dir) = seeded_service();
        let out = run_script(&service, &SiteOptions::default(), "2\nINCEPTION\n\n0\n").await;
        assert!(out.contains("Movie already exists as 'Inception'."));
    }

    #[tokio::test]
    async fn test_generate_website() {
        let (service, dir) = seeded_service();
        let options = SiteOptions { output_path: dir.path().join("index.html"), ..SiteOptions::default() };
        let out = run_script(&service, &options, "9\n\n0\n").await;

        assert!(out.contains("Website was generated successfully"));
        let html = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(html.contains("Inception"));
    }

    #[tokio::test]
    async fn test_empty_store_messages() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(&dir.path().join("movies.db")).unwrap();
        let service = CatalogService::new(storage, None);
        let out = run_script(&service, &SiteOptions::default(), "1\n\n5\n\n6\n\n0\n").await;
        assert_eq!(out.matches("No movies in database.").count(), 3);
    }

    #[tokio::test]
    async fn test_search_on_empty_store_does_not_prompt() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(&dir.path().join("movies.db")).unwrap();
        let service = CatalogService::new(storage, None);
        let out = run_script(&service, &SiteOptions::default(), "7\n\n0\n").await;

        assert!(out.contains("No movies in database."));
        assert!(!out.contains("Enter part of movie name to search"));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn test_retry_hint_only_for_busy_database() {
        use moviedb_storage::StorageError;
        use rusqlite::ffi;

        let busy = StorageError::from(rusqlite::Error::SqliteFailure(
            ffi::Error::new(ffi::SQLITE_BUSY),
            None,
        ));
        let err = anyhow::Error::from(ServiceError::Storage(busy));
        assert_eq!(retry_hint(&err), Some("The database is busy. Please try again."));

        let err = anyhow::Error::from(ServiceError::InvalidInput("title cannot be empty".to_owned()));
        assert_eq!(retry_hint(&err), None);
        assert_eq!(retry_hint(&anyhow::anyhow!("broken pipe")), None);
    }
}
