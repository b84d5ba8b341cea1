use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paddock_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("paddock"))
}

/// Run in an empty directory so no stray `.paddock.toml` is picked up.
fn paddock_in(dir: &TempDir) -> Command {
    let mut cmd = paddock_cmd();
    cmd.current_dir(dir.path());
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    paddock_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    paddock_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paddock"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("addRace"));
}

// =============================================================================
// Query and mutate
// =============================================================================

#[test]
fn test_query_seeded_drivers() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["query", "{ drivers { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fernando Alonso"))
        .stdout(predicate::str::contains("Charles Leclerc"));
}

#[test]
fn test_query_race_wins() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["query", "{ driver(id: 3) { raceWins { location } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Texas"))
        .stdout(predicate::str::contains("Austria"))
        .stdout(predicate::str::contains("Brazil").not());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args([
            "query",
            "query($id: Int) { race(id: $id) { location } }",
            "--variables",
            r#"{"id": 7}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zandvoort"));
}

#[test]
fn test_query_without_seed() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["query", "{ drivers { id } }", "--no-seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""drivers": []"#));
}

#[test]
fn test_mutate_add_driver() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["mutate", r#"addDriver(name: "Oscar Piastri") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 4"#))
        .stdout(predicate::str::contains("Oscar Piastri"));
}

#[test]
fn test_mutate_remove_missing_driver_fails() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["mutate", "removeDriver(id: 99) { id }"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Driver not found"))
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_invalid_variables() {
    let temp_dir = TempDir::new().unwrap();
    paddock_in(&temp_dir)
        .args(["query", "{ drivers { id } }", "--variables", "not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_discovered_config_disables_seed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".paddock.toml"),
        "[store]\nseed = false\n",
    )
    .unwrap();

    paddock_in(&temp_dir)
        .args(["query", "{ races { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""races": []"#));
}

#[test]
fn test_explicit_config_strict_winner() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("strict.toml");
    std::fs::write(&config_path, "[store]\nstrict_winner = true\n").unwrap();

    paddock_in(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["mutate", r#"addRace(location: "Imola", winnerId: 42) { id }"#])
        .assert()
        .failure()
        .stdout(predicate::str::contains("BAD_USER_INPUT"));
}

#[test]
fn test_invalid_config_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".paddock.toml"), "[server\nport = ").unwrap();

    paddock_in(&temp_dir)
        .arg("schema")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}
