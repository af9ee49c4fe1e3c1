// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded table of open problems indexed by slot identifier.
//!
//! The table has a fixed number of slots. New problems take the lowest free
//! slot, found by a linear scan, so identifiers stay small and are reused
//! as soon as a problem leaves the table.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::problem::{Problem, ProblemId};

/// Fixed-capacity sparse array of open problems.
///
/// Serialized as a JSON array with one entry per slot, `null` for empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotTable {
    slots: Vec<Option<Problem>>,
}

impl SlotTable {
    /// Creates a table with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        SlotTable { slots: vec![None; capacity] }
    }

    /// Total number of slots, free or occupied.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns true when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.free_slot().is_none()
    }

    /// Lowest empty slot, or `None` when every slot is taken.
    pub fn free_slot(&self) -> Option<ProblemId> {
        self.slots.iter().position(Option::is_none)
    }

    /// Returns the problem in slot `id`. Out-of-range ids read as empty.
    pub fn get(&self, id: ProblemId) -> Option<&Problem> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Clears slot `id` and returns its occupant.
    pub fn take(&mut self, id: ProblemId) -> Option<Problem> {
        self.slots.get_mut(id).and_then(Option::take)
    }

    /// Stores `problem` in the slot named by its id, replacing any occupant.
    ///
    /// Out-of-range ids are ignored; callers pick ids from [`free_slot`] or
    /// from a problem that was just taken out.
    ///
    /// [`free_slot`]: SlotTable::free_slot
    pub fn put(&mut self, problem: Problem) {
        if let Some(slot) = self.slots.get_mut(problem.id) {
            *slot = Some(problem);
        }
    }

    /// Occupied slots in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.slots.iter().flatten()
    }

    /// Checks a loaded table and resizes it to `capacity`.
    ///
    /// Every occupant must be an open problem sitting in the slot matching
    /// its id. A table longer than `capacity` is truncated only when the
    /// extra slots are empty.
    pub fn fit(mut self, capacity: usize) -> Result<Self> {
        for (index, problem) in self.slots.iter().enumerate() {
            let Some(problem) = problem else { continue };
            if problem.id != index {
                return Err(Error::Incompatible(format!(
                    "slot {index} holds problem with id {}",
                    problem.id
                )));
            }
            if !problem.is_open() {
                return Err(Error::Incompatible(format!(
                    "slot {index} holds a problem that is no longer open"
                )));
            }
        }

        if let Some(extra) = self.slots.get(capacity..) {
            if extra.iter().any(Option::is_some) {
                return Err(Error::Incompatible(format!(
                    "{} open problems sit beyond the configured capacity of {capacity}",
                    extra.iter().flatten().count()
                )));
            }
        }

        self.slots.resize(capacity, None);
        Ok(self)
    }
}

#[cfg(test)]
#[path = "slots_tests.rs"]
mod tests;
