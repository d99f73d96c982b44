//! Tests for loading the TOML settings file.

use std::fs;
use std::path::PathBuf;
use strictly_grid::Controller;
use strictly_grid_cli::{DEFAULT_LOG_FILE, Settings};
use tempfile::TempDir;

#[test]
fn test_load_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("strictly_grid.toml");
    fs::write(
        &path,
        r#"board_size = 6
mode = 3
players = ["human", "computer", "human"]
log_file = "moves.log"
seed = 99
"#,
    )
    .expect("Write failed");

    let settings = Settings::from_file(&path).expect("Load failed");
    assert_eq!(*settings.board_size(), Some(6));
    assert_eq!(*settings.mode(), Some(3));
    assert_eq!(
        settings.players().as_deref(),
        Some([Controller::Human, Controller::Computer, Controller::Human].as_slice())
    );
    assert_eq!(settings.log_file(), &PathBuf::from("moves.log"));
    assert_eq!(*settings.seed(), Some(99));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.log_file(), &PathBuf::from(DEFAULT_LOG_FILE));
}

#[test]
fn test_invalid_toml_reports_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "board_size = \"large\"").expect("Write failed");

    let err = Settings::load_or_default(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse settings"));
}

#[test]
fn test_unknown_controller_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "players = [\"robot\", \"human\"]").expect("Write failed");

    assert!(Settings::from_file(&path).is_err());
}
