//! Tests for configuration parsing, validation and file providers

use lfg_dungeon_queue::config::{ConfigProvider, FileConfigProvider, LfgConfig};
use lfg_dungeon_queue::core::LfgError;
use std::io::Write;

#[test]
fn test_config_from_json() {
    let json = r#"{
        "max_instances": 4,
        "num_tanks": 6,
        "num_healers": 5,
        "num_dps": 18,
        "min_clear_time": 2,
        "max_clear_time": 9
    }"#;

    let config = LfgConfig::from_json_str(json).unwrap();
    assert_eq!(config.max_instances, 4);
    assert_eq!(config.num_dps, 18);
    assert_eq!(config.max_clear_time, 9);
}

#[test]
fn test_config_from_json_partial_uses_defaults() {
    let config = LfgConfig::from_json_str(r#"{ "max_instances": 7 }"#).unwrap();
    assert_eq!(config.max_instances, 7);
    assert_eq!(config.num_tanks, LfgConfig::default().num_tanks);
}

#[test]
fn test_config_from_json_rejects_out_of_range() {
    let result = LfgConfig::from_json_str(r#"{ "max_clear_time": 30 }"#);
    assert!(matches!(result, Err(LfgError::InvalidConfig(_))));
}

#[test]
fn test_config_from_json_malformed() {
    let result = LfgConfig::from_json_str("{ not json");
    assert!(matches!(result, Err(LfgError::ConfigParse(_))));
}

#[test]
fn test_file_provider_text_format() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "n 2").unwrap();
    writeln!(file, "t 3").unwrap();
    writeln!(file, "h 3").unwrap();
    writeln!(file, "d 9").unwrap();
    writeln!(file, "t1 1").unwrap();
    writeln!(file, "t2 20").unwrap();

    let provider = FileConfigProvider::new(file.path());
    let config = provider.load().unwrap();
    assert_eq!(config.max_instances, 2);
    assert_eq!(config.num_dps, 9);
    assert_eq!(config.min_clear_time, 1);
    assert_eq!(config.max_clear_time, 15);
}

#[test]
fn test_file_provider_json_format() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{ "max_instances": 5, "num_tanks": 1 }}"#).unwrap();

    let provider = FileConfigProvider::new(file.path());
    let config = provider.load().unwrap();
    assert_eq!(config.max_instances, 5);
    assert_eq!(config.num_tanks, 1);
}

#[test]
fn test_file_provider_rejects_zero_instances() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "n 0").unwrap();

    let provider = FileConfigProvider::new(file.path());
    assert!(matches!(provider.load(), Err(LfgError::InvalidConfig(_))));
}

#[test]
fn test_file_provider_unreadable_contents_use_defaults() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all(b"n 2\n\xff\xfe t 3\n").unwrap();

    let provider = FileConfigProvider::new(file.path());
    assert_eq!(provider.load().unwrap(), LfgConfig::default());
}

#[test]
fn test_file_provider_directory_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let provider = FileConfigProvider::new(dir.path());
    assert_eq!(provider.load().unwrap(), LfgConfig::default());
}
