// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod chat;
pub mod init;
pub mod problems;
pub mod report;
pub mod solve;
pub mod solved;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use mend_core::{DateSource, FixedDate, LocalDate, ProblemStore};

use crate::config::{find_work_dir, get_store_dir, Config};
use crate::env;
use crate::error::Result;
use crate::lock::StoreLock;

/// The store as opened by the CLI: dated by `MEND_TODAY` or the system clock.
pub type CliStore = ProblemStore<Box<dyn DateSource>>;

/// Where the current project keeps its configuration and records.
pub struct Project {
    pub work_dir: PathBuf,
    pub config: Config,
    pub store_dir: PathBuf,
}

impl Project {
    /// Find the project from the current directory.
    pub fn locate() -> Result<Self> {
        let work_dir = find_work_dir()?;
        let config = Config::load(&work_dir)?;
        let store_dir = get_store_dir(&work_dir, &config);
        Ok(Project {
            work_dir,
            config,
            store_dir,
        })
    }

    /// Lock the store directory and load the records.
    ///
    /// The lock must outlive every write made through the store.
    pub fn open(&self) -> Result<(CliStore, StoreLock)> {
        let lock = StoreLock::acquire(&self.store_dir)?;
        let store = ProblemStore::with_dates(&self.store_dir, self.config.capacity, date_source()?)?;
        Ok((store, lock))
    }
}

/// Helper to open the store from the current context.
pub fn open_store() -> Result<(CliStore, Config, StoreLock)> {
    let project = Project::locate()?;
    let (store, lock) = project.open()?;
    Ok((store, project.config, lock))
}

fn date_source() -> Result<Box<dyn DateSource>> {
    Ok(match env::today_override()? {
        Some(date) => {
            tracing::debug!("today pinned to {}", date);
            Box::new(FixedDate::new(date))
        }
        None => Box::new(LocalDate),
    })
}
