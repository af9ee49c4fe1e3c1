// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only archive of solved problems.
//!
//! Identifiers are reused once a slot frees up, so one identifier can name
//! several solved problems over time. Each identifier keeps its own list in
//! the order the problems were solved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::problem::{Problem, ProblemId};

/// Solved problems grouped by the identifier they held when solved.
///
/// Serialized as a JSON object keyed by the decimal identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Archive {
    entries: BTreeMap<ProblemId, Vec<Problem>>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solved problem under its identifier.
    pub fn record(&mut self, problem: Problem) {
        self.entries.entry(problem.id).or_default().push(problem);
    }

    /// Most recently archived problem for `id`.
    pub fn latest(&self, id: ProblemId) -> Option<&Problem> {
        self.entries.get(&id).and_then(|list| list.last())
    }

    /// Removes the most recent entry for `id`.
    ///
    /// Only used to back out a solve whose write failed; archived problems
    /// are otherwise never removed.
    pub(crate) fn undo_last(&mut self, id: ProblemId) -> Option<Problem> {
        let list = self.entries.get_mut(&id)?;
        let problem = list.pop();
        if list.is_empty() {
            self.entries.remove(&id);
        }
        problem
    }

    /// All archived problems: identifier order, then solve order.
    pub fn iter(&self) -> impl Iterator<Item = &Problem> {
        self.entries.values().flatten()
    }

    /// Total number of archived problems.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "archive_tests.rs"]
mod tests;
