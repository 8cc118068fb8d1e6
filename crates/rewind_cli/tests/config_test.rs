//! Tests for loading front-end configuration from disk.

use rewind_cli::{DEFAULT_CONFIG_FILE, RewindConfig};
use rewind_tictactoe::SortOrder;
use std::io::Write;

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "initial_sort = \"descending\"").unwrap();

    let config = RewindConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = RewindConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "initial_sort = [").unwrap();

    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_default_file_in_dir_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        "initial_sort = \"descending\"\nlog_filter = \"debug\"\n",
    )
    .unwrap();

    let config = RewindConfig::load_in(dir.path(), None).unwrap();
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_explicit_path_beats_default_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "log_filter = \"debug\"\n").unwrap();
    let explicit = dir.path().join("other.toml");
    std::fs::write(&explicit, "initial_sort = \"descending\"\n").unwrap();

    let config = RewindConfig::load_in(dir.path(), Some(explicit.as_path())).unwrap();
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_no_default_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = RewindConfig::load_in(dir.path(), None).unwrap();
    assert_eq!(config, RewindConfig::default());
}
