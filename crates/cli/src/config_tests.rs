// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let config = Config::new(12, None).unwrap();
    let work_dir = init_work_dir(temp.path(), &config).unwrap();

    let loaded = Config::load(&work_dir).unwrap();
    assert_eq!(loaded.capacity, 12);
    assert_eq!(loaded.date_format, "%Y-%m-%d");
    assert_eq!(loaded.store, None);
}

#[test]
fn test_defaults_fill_missing_keys() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "").unwrap();

    let config = Config::load(temp.path()).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.capacity, 100);
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(
        Config::new(0, None),
        Err(Error::InvalidCapacity(0))
    ));
}

#[test]
fn test_zero_capacity_in_file_rejected() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "capacity = 0\n").unwrap();
    assert!(Config::load(temp.path()).is_err());
}

#[test]
fn test_bad_date_format_rejected() {
    let config = Config {
        date_format: "%Q".to_string(),
        ..Config::default()
    };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
}

#[test]
fn test_unparsable_config_is_config_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.toml"), "capacity = [").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn test_store_dir_default() {
    let work_dir = PathBuf::from("/home/.mend");
    let config = Config::default();
    assert_eq!(get_store_dir(&work_dir, &config), PathBuf::from("/home/.mend"));
}

#[test]
fn test_store_dir_relative() {
    let work_dir = PathBuf::from("/home/.mend");
    let config = Config::new(100, Some("shared/problems".to_string())).unwrap();
    assert_eq!(
        get_store_dir(&work_dir, &config),
        PathBuf::from("/home/shared/problems")
    );
}

#[test]
fn test_store_dir_absolute() {
    let work_dir = PathBuf::from("/home/.mend");
    let config = Config::new(100, Some("/var/lib/mend".to_string())).unwrap();
    assert_eq!(
        get_store_dir(&work_dir, &config),
        PathBuf::from("/var/lib/mend")
    );
}

#[test]
fn test_already_initialized() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path(), &Config::default()).unwrap();

    let result = init_work_dir(temp.path(), &Config::default());
    assert!(result.is_err());

    if let Err(e) = result {
        assert!(e.to_string().contains("already initialized"));
    }
}

#[test]
fn test_gitignore_lists_runtime_files() {
    let temp = TempDir::new().unwrap();
    write_gitignore(temp.path()).unwrap();

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert!(content.contains("store.lock"));
    assert!(content.contains("mend.log"));
    assert!(content.contains("*.corrupt"));
}

#[test]
fn test_runtime_paths() {
    let dir = PathBuf::from("/data");
    assert_eq!(get_lock_path(&dir), PathBuf::from("/data/store.lock"));
    assert_eq!(get_log_path(&dir), PathBuf::from("/data/mend.log"));
}
