//! Integration tests for ConfigManager YAML round-tripping

use camino::Utf8PathBuf;
use jokebox::{ConfigManager, UserConfig};
use std::fs;
use tempfile::TempDir;

fn create_test_config_manager() -> (ConfigManager, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    let manager = ConfigManager::new(&config_path).unwrap();
    (manager, temp_dir)
}

#[test]
fn test_missing_config_file_loads_defaults() {
    let (manager, _temp_dir) = create_test_config_manager();

    let config = manager.load_user_config().unwrap();
    assert_eq!(config.settings.provider_url, "https://v2.jokeapi.dev");
    assert_eq!(config.settings.default_language, "en");
    assert_eq!(config.settings.default_category, "any");
    assert!(!config.settings.debug_mode);
}

#[test]
fn test_config_round_trip() {
    let (manager, _temp_dir) = create_test_config_manager();

    let mut config = UserConfig::default();
    config.settings.provider_url = "http://localhost:8080".to_string();
    config.settings.default_language = "de".to_string();
    config.settings.default_category = "custom".to_string();
    config.settings.debug_mode = true;

    manager.save_user_config(&config).unwrap();
    let loaded = manager.load_user_config().unwrap();

    assert_eq!(loaded.settings.provider_url, "http://localhost:8080");
    assert_eq!(loaded.settings.default_language, "de");
    assert_eq!(loaded.settings.default_category, "custom");
    assert!(loaded.settings.debug_mode);
}

#[test]
fn test_hand_edited_partial_config_fills_defaults() {
    let (manager, temp_dir) = create_test_config_manager();

    let config_path = temp_dir.path().join("Jokebox Config.yaml");
    fs::write(&config_path, "Jokebox_Settings:\n  Default Category: programming\n").unwrap();

    let loaded = manager.load_user_config().unwrap();
    assert_eq!(loaded.settings.default_category, "programming");
    assert_eq!(loaded.settings.default_language, "en");
    assert_eq!(loaded.settings.provider_url, "https://v2.jokeapi.dev");
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let (manager, temp_dir) = create_test_config_manager();

    let config_path = temp_dir.path().join("Jokebox Config.yaml");
    fs::write(&config_path, ": not valid yaml {{{").unwrap();

    // Unlike the joke collections, a broken config file is reported, not
    // silently defaulted
    assert!(manager.load_user_config().is_err());
}
