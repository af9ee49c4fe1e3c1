// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The problem entity and its lifecycle.
//!
//! A problem is open from the moment it is reported until it is solved.
//! Solving is terminal: the solve date is written once and never cleared.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot identifier of a problem. Unique among open problems only.
pub type ProblemId = usize;

/// Derived lifecycle state of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemState {
    /// Reported and not yet solved.
    Open,
    /// Fixed. Held only in the archive.
    Solved,
    /// Closed without being solved. Reserved: no operation produces it yet.
    Closed,
}

impl ProblemState {
    /// Returns the string representation used in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemState::Open => "open",
            ProblemState::Solved => "solved",
            ProblemState::Closed => "closed",
        }
    }
}

impl fmt::Display for ProblemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single reported household problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Slot the problem occupies (or occupied, once archived).
    pub id: ProblemId,
    /// Store-wide report number. Unlike `id` it is never handed out twice;
    /// zero for records written before serials were assigned.
    #[serde(default)]
    pub serial: u64,
    /// Free-form text given when reporting.
    pub description: String,
    /// True until solved.
    pub active: bool,
    /// Day the problem was reported.
    pub date_opened: NaiveDate,
    /// Day the problem was solved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_solved: Option<NaiveDate>,
    /// Day the problem was closed without a fix. Kept for format compatibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_closed: Option<NaiveDate>,
}

impl Problem {
    /// Creates an open problem reported on `today`.
    pub fn new(id: ProblemId, description: String, today: NaiveDate) -> Self {
        Problem {
            id,
            serial: 0,
            description,
            active: true,
            date_opened: today,
            date_solved: None,
            date_closed: None,
        }
    }

    /// Sets the report number.
    pub fn with_serial(mut self, serial: u64) -> Self {
        self.serial = serial;
        self
    }

    /// Marks the problem solved on `today`.
    ///
    /// Has no effect on a problem that is already solved.
    pub fn solve(&mut self, today: NaiveDate) {
        if self.date_solved.is_some() {
            return;
        }
        self.date_solved = Some(today);
        self.active = false;
    }

    /// Returns true while the problem awaits a fix.
    pub fn is_open(&self) -> bool {
        self.active && self.date_solved.is_none()
    }

    /// Returns true once the problem has a solve date.
    pub fn is_solved(&self) -> bool {
        self.date_solved.is_some()
    }

    /// Lifecycle state derived from the recorded dates.
    pub fn state(&self) -> ProblemState {
        if self.date_closed.is_some() {
            ProblemState::Closed
        } else if self.date_solved.is_some() {
            ProblemState::Solved
        } else {
            ProblemState::Open
        }
    }

    /// Number of whole days the problem was (or has been) open.
    ///
    /// Counts up to the close date, else the solve date, else `today`.
    /// Never negative, even if `today` is earlier than the opening date.
    pub fn days_open(&self, today: NaiveDate) -> i64 {
        let end = self.date_closed.or(self.date_solved).unwrap_or(today);
        (end - self.date_opened).num_days().max(0)
    }

    /// Returns true if the problem was reported on `today`.
    pub fn opened_today(&self, today: NaiveDate) -> bool {
        self.date_opened == today
    }

    /// Returns true if the problem was solved on `day`.
    pub fn solved_on(&self, day: NaiveDate) -> bool {
        self.date_solved == Some(day)
    }
}

#[cfg(test)]
#[path = "problem_tests.rs"]
mod tests;
