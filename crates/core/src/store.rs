// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The problem store.
//!
//! Owns the open-slot table and the solved archive, and keeps each of them
//! in its own JSON record:
//!
//! - `open.json`: one entry per slot, `null` when free
//! - `solved.json`: archived problems keyed by the id they held
//!
//! Every mutation is written to disk before it is acknowledged. When a write
//! fails the in-memory change is undone, so memory never runs ahead of disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::archive::Archive;
use crate::date::{DateSource, LocalDate};
use crate::error::{Error, Result};
use crate::persist;
use crate::problem::{Problem, ProblemId};
use crate::slots::SlotTable;

/// Number of slots when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;
/// File name of the open-table record.
pub const OPEN_RECORD: &str = "open.json";
/// File name of the archive record.
pub const SOLVED_RECORD: &str = "solved.json";

/// Lifecycle store for reported problems.
#[derive(Debug)]
pub struct ProblemStore<D: DateSource = LocalDate> {
    open: SlotTable,
    archive: Archive,
    open_path: PathBuf,
    archive_path: PathBuf,
    dates: D,
    next_serial: u64,
}

impl ProblemStore<LocalDate> {
    /// Opens the store in `dir` using the system calendar.
    pub fn open(dir: &Path, capacity: usize) -> Result<Self> {
        Self::with_dates(dir, capacity, LocalDate)
    }
}

impl<D: DateSource> ProblemStore<D> {
    /// Opens the store in `dir` with a custom date source.
    ///
    /// Creates `dir` if needed. A record that is missing, unreadable or
    /// incompatible with `capacity` is replaced by an empty one; the cause is
    /// logged and unparsable files are moved aside rather than overwritten.
    pub fn with_dates(dir: &Path, capacity: usize, dates: D) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let open_path = dir.join(OPEN_RECORD);
        let archive_path = dir.join(SOLVED_RECORD);

        let open = load_or_default(
            &open_path,
            |table: SlotTable| table.fit(capacity),
            || SlotTable::new(capacity),
        );
        let archive = load_or_default(&archive_path, Ok, Archive::new);
        let next_serial = open
            .iter()
            .chain(archive.iter())
            .map(|problem| problem.serial)
            .max()
            .unwrap_or(0)
            + 1;

        let mut store = ProblemStore {
            open,
            archive,
            open_path,
            archive_path,
            dates,
            next_serial,
        };
        store.finish_interrupted_solves();

        tracing::debug!(
            "store opened at {}: {} open, {} solved, capacity {}",
            dir.display(),
            store.open.len(),
            store.archive.len(),
            capacity
        );
        Ok(store)
    }

    /// Reports a new problem and returns its id.
    ///
    /// Takes the lowest free slot. The description is stored as given.
    pub fn create_problem(&mut self, description: &str) -> Result<ProblemId> {
        let Some(id) = self.open.free_slot() else {
            return Err(Error::CapacityExceeded { capacity: self.open.capacity() });
        };

        let problem = Problem::new(id, description.to_string(), self.dates.today())
            .with_serial(self.next_serial);
        self.open.put(problem);

        if let Err(e) = persist::save(&self.open_path, &self.open) {
            self.open.take(id);
            tracing::warn!("create of problem {} rolled back: {}", id, e);
            return Err(e);
        }
        self.next_serial += 1;

        tracing::info!("created problem {}", id);
        Ok(id)
    }

    /// Marks problem `id` solved and archives it.
    ///
    /// Returns `Ok(false)` without changing anything when no open problem
    /// holds `id`.
    pub fn solve_problem(&mut self, id: ProblemId) -> Result<bool> {
        let Some(original) = self.open.take(id) else {
            return Ok(false);
        };

        let mut solved = original.clone();
        solved.solve(self.dates.today());
        self.archive.record(solved);

        // Archive first: a crash between the two writes leaves a duplicate
        // that the next load cleans up, never a lost problem.
        if let Err(e) = persist::save(&self.archive_path, &self.archive) {
            self.archive.undo_last(id);
            self.open.put(original);
            tracing::warn!("solve of problem {} rolled back: {}", id, e);
            return Err(e);
        }

        if let Err(e) = persist::save(&self.open_path, &self.open) {
            self.archive.undo_last(id);
            self.open.put(original);
            tracing::warn!("solve of problem {} rolled back: {}", id, e);
            if let Err(undo) = persist::save(&self.archive_path, &self.archive) {
                tracing::warn!(
                    "could not rewrite archive after failed solve of {}: {}",
                    id,
                    undo
                );
            }
            return Err(e);
        }

        tracing::info!("solved problem {}", id);
        Ok(true)
    }

    /// Removes open problem `id` without archiving it.
    ///
    /// Returns `Ok(false)` when no open problem holds `id`.
    pub fn delete_problem(&mut self, id: ProblemId) -> Result<bool> {
        let Some(original) = self.open.take(id) else {
            return Ok(false);
        };

        if let Err(e) = persist::save(&self.open_path, &self.open) {
            self.open.put(original);
            tracing::warn!("delete of problem {} rolled back: {}", id, e);
            return Err(e);
        }

        tracing::info!("deleted problem {}", id);
        Ok(true)
    }

    /// Open problems in id order.
    pub fn list_open_problems(&self) -> Vec<&Problem> {
        self.open.iter().collect()
    }

    /// Solved problems in id order, then in the order they were solved.
    pub fn list_solved_problems(&self) -> Vec<&Problem> {
        self.archive.iter().collect()
    }

    pub fn get_problem(&self, id: ProblemId) -> Option<&Problem> {
        self.open.get(id)
    }

    /// Days `problem` has been open, as of the store's today.
    pub fn days_open(&self, problem: &Problem) -> i64 {
        problem.days_open(self.dates.today())
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.dates.today()
    }

    pub fn capacity(&self) -> usize {
        self.open.capacity()
    }

    /// Returns true when every id is taken.
    pub fn is_full(&self) -> bool {
        self.open.is_full()
    }

    /// Drops open problems that were already archived by a solve whose
    /// second write never landed.
    fn finish_interrupted_solves(&mut self) {
        let stale: Vec<ProblemId> = self
            .open
            .iter()
            .filter(|open| {
                // Records without a serial cannot be told apart from a
                // same-day re-report, so they are left alone.
                open.serial != 0
                    && self.archive.latest(open.id).is_some_and(|archived| {
                        archived.is_solved() && archived.serial == open.serial
                    })
            })
            .map(|open| open.id)
            .collect();

        if stale.is_empty() {
            return;
        }

        for id in &stale {
            self.open.take(*id);
            tracing::warn!("problem {} was already archived, removing from open list", id);
        }
        if let Err(e) = persist::save(&self.open_path, &self.open) {
            tracing::warn!("could not rewrite open list: {}", e);
        }
    }
}

/// Loads a record, falling back to `default` on any failure.
///
/// A missing record is routine. Unparsable or incompatible records are
/// quarantined first so the fallback does not destroy them.
fn load_or_default<T>(
    path: &Path,
    check: impl FnOnce(T) -> Result<T>,
    default: impl FnOnce() -> T,
) -> T
where
    T: serde::de::DeserializeOwned,
{
    match persist::load(path).and_then(check) {
        Ok(record) => {
            tracing::debug!("loaded {}", path.display());
            record
        }
        Err(Error::RecordMissing(_)) => {
            tracing::debug!("no record at {}, starting empty", path.display());
            default()
        }
        Err(e @ (Error::CorruptedData { .. } | Error::Incompatible(_))) => {
            tracing::warn!("unusable record {}: {}", path.display(), e);
            match persist::quarantine(path) {
                Ok(moved) => tracing::warn!("moved unusable record to {}", moved.display()),
                Err(qe) => tracing::warn!("could not move {} aside: {}", path.display(), qe),
            }
            default()
        }
        Err(e) => {
            tracing::warn!("could not read {}, starting empty: {}", path.display(), e);
            default()
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
