//! Migration v1: movies table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    title_normalized TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    poster TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_movies_title_normalized ON movies(title_normalized);
";
