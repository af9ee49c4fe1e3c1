// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of problems for chat replies and CLI output.

use chrono::NaiveDate;
use mend_core::{DateSource, Problem, ProblemId, ProblemState, ProblemStore};
use serde::Serialize;

pub const NO_PROBLEMS: &str = "No problems.";
pub const NO_SOLVED_PROBLEMS: &str = "No solved problems to show";

/// Format an open problem: `ID 3: sink leaking [2d open]`.
pub fn format_open_line(problem: &Problem, days_open: i64) -> String {
    if days_open > 0 {
        format!("ID {}: {} [{}d open]", problem.id, problem.description, days_open)
    } else {
        format!("ID {}: {} [opened today]", problem.id, problem.description)
    }
}

/// Format a solved problem: `ID 3: sink leaking [closed on 2026-03-14]`.
///
/// `date_format` must be a valid chrono strftime string.
pub fn format_solved_line(problem: &Problem, today: NaiveDate, date_format: &str) -> String {
    match problem.date_solved {
        Some(day) if day == today => {
            format!("ID {}: {} [closed today]", problem.id, problem.description)
        }
        Some(day) => format!(
            "ID {}: {} [closed on {}]",
            problem.id,
            problem.description,
            day.format(date_format)
        ),
        None => format!("ID {}: {}", problem.id, problem.description),
    }
}

/// All open problems, one line each, or [`NO_PROBLEMS`].
pub fn open_listing<D: DateSource>(store: &ProblemStore<D>) -> String {
    let problems = store.list_open_problems();
    if problems.is_empty() {
        return NO_PROBLEMS.to_string();
    }
    problems
        .into_iter()
        .map(|p| format_open_line(p, store.days_open(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// All solved problems, one line each, or [`NO_SOLVED_PROBLEMS`].
pub fn solved_listing<D: DateSource>(store: &ProblemStore<D>, date_format: &str) -> String {
    let problems = store.list_solved_problems();
    if problems.is_empty() {
        return NO_SOLVED_PROBLEMS.to_string();
    }
    let today = store.today();
    problems
        .into_iter()
        .map(|p| format_solved_line(p, today, date_format))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON view of a problem for `-o json` output.
#[derive(Debug, Serialize)]
pub struct ProblemJson<'a> {
    pub id: ProblemId,
    pub description: &'a str,
    pub state: ProblemState,
    pub date_opened: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_solved: Option<NaiveDate>,
    pub days_open: i64,
}

impl<'a> ProblemJson<'a> {
    pub fn new(problem: &'a Problem, today: NaiveDate) -> Self {
        ProblemJson {
            id: problem.id,
            description: &problem.description,
            state: problem.state(),
            date_opened: problem.date_opened,
            date_solved: problem.date_solved,
            days_open: problem.days_open(today),
        }
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
