//! Tests for portal configuration resolution.

use puzzle_portal::{Difficulty, PortalConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes a config file, returning the handle that keeps it alive.
fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_defaults_without_file() {
    let config = PortalConfig::resolve(None, None, false).expect("Resolve failed");
    assert!(config.is_offline(), "No base URL means offline");
    assert!(config.cookie().is_none());
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);
    assert_eq!(*config.history_page_size(), 10);
}

#[test]
fn test_file_values_loaded() {
    let file = write_config(
        r#"
base_url = "http://localhost:4000/api"
cookie = "session=abc123"
default_difficulty = "hard"
history_page_size = 25
"#,
    );
    let config = PortalConfig::resolve(Some(file.path()), None, false).expect("Resolve failed");
    assert_eq!(config.base_url().as_deref(), Some("http://localhost:4000/api"));
    assert_eq!(config.cookie().as_deref(), Some("session=abc123"));
    assert_eq!(*config.default_difficulty(), Difficulty::Hard);
    assert_eq!(*config.history_page_size(), 25);
    assert!(!config.is_offline());
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config(r#"base_url = "http://localhost:4000/api""#);
    let config = PortalConfig::resolve(Some(file.path()), None, false).expect("Resolve failed");
    assert_eq!(*config.default_difficulty(), Difficulty::Easy);
    assert_eq!(*config.history_page_size(), 10);
    assert!(config.cookie().is_none());
}

#[test]
fn test_cli_flag_overrides_file() {
    let file = write_config(r#"base_url = "http://localhost:4000/api""#);
    let config = PortalConfig::resolve(
        Some(file.path()),
        Some("http://staging:5000/api".to_string()),
        false,
    )
    .expect("Resolve failed");
    assert_eq!(config.base_url().as_deref(), Some("http://staging:5000/api"));
}

#[test]
fn test_offline_flag_beats_everything() {
    let file = write_config(r#"base_url = "http://localhost:4000/api""#);
    let config = PortalConfig::resolve(
        Some(file.path()),
        Some("http://staging:5000/api".to_string()),
        true,
    )
    .expect("Resolve failed");
    assert!(config.is_offline());
    assert!(config.base_url().is_none());
}

#[test]
fn test_malformed_file_rejected() {
    let file = write_config("base_url = [not toml");
    let result = PortalConfig::resolve(Some(file.path()), None, false);
    let err = result.expect_err("Malformed TOML must fail");
    assert!(
        err.to_string().contains("Failed to parse config"),
        "Unexpected error: {}",
        err
    );
}

#[test]
fn test_missing_file_rejected() {
    let path = std::path::Path::new("/nonexistent/portal.toml");
    let result = PortalConfig::resolve(Some(path), None, false);
    let err = result.expect_err("Missing file must fail");
    assert!(
        err.to_string().contains("Failed to read config file"),
        "Unexpected error: {}",
        err
    );
}
