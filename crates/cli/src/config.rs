// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.mend/config.toml` and includes:
//! - `capacity`: Number of problem slots (IDs `0..capacity`)
//! - `date_format`: strftime format for dates shown in listings
//! - `store`: Optional directory for the problem records

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".mend";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOCK_FILE_NAME: &str = "store.lock";
const LOG_FILE_NAME: &str = "mend.log";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.mend/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of problem slots. At least 1.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Format for solve dates in listings (chrono strftime syntax).
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Optional directory for the records (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

fn default_capacity() -> usize {
    mend_core::DEFAULT_CAPACITY
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: default_capacity(),
            date_format: default_date_format(),
            store: None,
        }
    }
}

impl Config {
    /// Creates a config with the given capacity and store location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if capacity is zero.
    pub fn new(capacity: usize, store: Option<String>) -> Result<Self> {
        let config = Config {
            capacity,
            store,
            ..Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Config(format!(
                "invalid date_format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Loads configuration from the given `.mend/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the given `.mend/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .mend directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the directory holding the problem records
pub fn get_store_dir(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.store {
        Some(store) => {
            let store_path = Path::new(store);
            if store_path.is_absolute() {
                store_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(store)
            }
        }
        None => work_dir.to_path_buf(),
    }
}

/// Path of the single-writer lock file for a store directory.
pub fn get_lock_path(store_dir: &Path) -> PathBuf {
    store_dir.join(LOCK_FILE_NAME)
}

/// Path of the chat session log for a store directory.
pub fn get_log_path(store_dir: &Path) -> PathBuf {
    store_dir.join(LOG_FILE_NAME)
}

/// Initialize a new .mend directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    config.validate()?;
    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// Ignores runtime files: the lock, the chat log, temporary and
/// quarantined records.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = format!(
        "# Runtime state\n{LOCK_FILE_NAME}\n{LOG_FILE_NAME}\n.*.tmp\n\n# Unreadable records moved aside\n*.corrupt\n"
    );
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
