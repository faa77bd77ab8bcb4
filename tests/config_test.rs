//! Tests for game configuration loading.

use lights_out::{DEFAULT_BOARD_SIZE, GameConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_default_config() {
    let config = GameConfig::default();
    assert_eq!(*config.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_load_full_config() {
    let file = config_file("size = 7\nseed = 42\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.size(), 7);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = config_file("");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_out_of_range_size_rejected() {
    let file = config_file("size = 11\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("between 1 & 10"));
}

#[test]
fn test_unparseable_config_rejected() {
    let file = config_file("size = \"big\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));

    let file = config_file("colour = \"red\"\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_rejected() {
    let err = GameConfig::from_file("/nonexistent/lights_out.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides() {
    let config = GameConfig::new(4, Some(1)).unwrap();

    let config = config.with_size(Some(9)).unwrap().with_seed(None);
    assert_eq!(*config.size(), 9);
    assert_eq!(*config.seed(), Some(1));

    let config = config.with_size(None).unwrap().with_seed(Some(8));
    assert_eq!(*config.size(), 9);
    assert_eq!(*config.seed(), Some(8));

    assert!(config.with_size(Some(0)).is_err());
}
