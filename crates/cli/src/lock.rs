// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-writer lock on a store directory.
//!
//! The store rewrites whole records, so two processes writing the same
//! directory would lose updates. Every command that opens the store holds
//! this lock until it exits.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::config::get_lock_path;
use crate::error::{Error, Result};

/// An exclusive lock on `store.lock`, released when dropped.
#[derive(Debug)]
pub struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    /// Takes the lock for `store_dir` without blocking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreLocked`] if another process holds it.
    pub fn acquire(store_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(store_dir)?;
        let path = get_lock_path(store_dir);
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;

        file.try_lock_exclusive()
            .map_err(|_| Error::StoreLocked(path.display().to_string()))?;

        tracing::debug!("acquired {}", path.display());
        Ok(StoreLock { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::debug!("could not release {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
