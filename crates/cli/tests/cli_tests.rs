use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn moviedb(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moviedb").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("OMDB_API_KEY")
        .env_remove("KEY")
        .env_remove("MOVIEDB_DB_PATH")
        .arg("--db")
        .arg(dir.path().join("movies.db"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("moviedb").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal movie catalog backed by SQLite and OMDb"));
}

#[test]
fn test_cli_site_help() {
    let mut cmd = Command::cargo_bin("moviedb").unwrap();
    cmd.arg("site").arg("--help").assert().success().stdout(predicate::str::contains("--template"));
}

#[test]
fn test_stats_and_list_on_empty_store() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies in database."));
    moviedb(&dir).args(["list", "--json"]).assert().success().stdout(predicate::str::contains("{}"));
    assert!(dir.path().join("movies.db").exists());
}

#[test]
fn test_delete_missing_title_fails() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir)
        .args(["delete", "Heat"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("movie 'Heat' not found"));
}

#[test]
fn test_update_rejects_out_of_range_rating() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir)
        .args(["update", "Heat", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating must be between"));
}

#[test]
fn test_add_without_api_key_fails() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir)
        .args(["add", "Heat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OMDB_API_KEY"));
}

#[test]
fn test_site_writes_page() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("public").join("index.html");
    moviedb(&dir)
        .args(["site", "--title", "Empty Shelf", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Website was generated successfully"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Empty Shelf"));
    assert!(dir.path().join("public").join("style.css").exists());
}

#[test]
fn test_menu_is_default_and_exits_on_zero() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir)
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MENU:").and(predicate::str::contains("Bye!")));
}

#[test]
fn test_menu_exits_on_end_of_input() {
    let dir = TempDir::new().unwrap();
    moviedb(&dir).arg("menu").write_stdin("").assert().success();
}
