// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable JSON records.
//!
//! Each record is one JSON document rewritten in full on every save. Saves
//! go through a temporary file that is fsynced and renamed over the target,
//! so a reader only ever sees the previous or the new content. The directory
//! is synced after the rename so the new entry survives a power loss.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Suffix given to records moved aside because they could not be read.
pub const QUARANTINE_SUFFIX: &str = "corrupt";

/// Reads a record.
///
/// Missing files, unparsable content and other I/O failures map to
/// distinct errors so callers can report why a load fell back.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::RecordMissing(path.to_path_buf()))
        }
        Err(e) => return Err(Error::Io(e)),
    };

    serde_json::from_str(&content).map_err(|e| Error::CorruptedData {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Writes a record, replacing existing content atomically.
pub fn save<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;

    let tmp_path = sibling(path, "tmp", true);
    let mut file = File::create(&tmp_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Io(e));
    }
    sync_parent(path)
}

/// Flushes the directory entry written by a rename.
#[cfg(unix)]
fn sync_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => File::open(dir)?.sync_all()?,
        _ => File::open(".")?.sync_all()?,
    }
    Ok(())
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) -> Result<()> {
    Ok(())
}

/// Moves an unreadable record aside so a fresh one can take its place.
///
/// Returns the path the record now lives at. A previous quarantined copy
/// is overwritten.
pub fn quarantine(path: &Path) -> Result<PathBuf> {
    let target = sibling(path, QUARANTINE_SUFFIX, false);
    fs::rename(path, &target)?;
    Ok(target)
}

/// Builds `<dir>/<name>.<suffix>`, or `<dir>/.<name>.<suffix>` when hidden.
fn sibling(path: &Path, suffix: &str, hidden: bool) -> PathBuf {
    let mut name = OsString::new();
    if hidden {
        name.push(".");
    }
    name.push(path.file_name().unwrap_or_default());
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod tests;
