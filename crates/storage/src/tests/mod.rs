//! Test utilities and module declarations for storage tests.

use crate::Storage;
use moviedb_core::Movie;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("movies.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_movie(title: &str, year: i32, rating: f64) -> Movie {
    Movie::new(title, year, rating, format!("http://img.example/{}.jpg", year))
}


#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn reopening_existing_store_keeps_data() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("movies.db");

    let storage = Storage::new(&db_path).unwrap();
    assert!(storage.add(&create_test_movie("Heat", 1995, 8.3)).is_success());
    drop(storage);

    let reopened = Storage::new(&db_path).unwrap();
    let catalog = reopened.list_all().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("Heat").map(|m| m.year), Some(1995));
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn new_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("movies.db");

    let storage = Storage::new(&db_path).unwrap();

    assert!(db_path.exists());
    assert_eq!(storage.count().unwrap(), 0);
}
