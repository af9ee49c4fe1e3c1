// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mend_core::{DateSource, ProblemId, ProblemStore};

use crate::error::{Error, Result};

use super::open_store;

pub fn run(id: &str) -> Result<()> {
    let (mut store, _config, _lock) = open_store()?;
    run_impl(&mut store, id, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl<D: DateSource>(
    store: &mut ProblemStore<D>,
    id: &str,
    out: &mut impl Write,
) -> Result<()> {
    let id = parse_id(id)?;
    let Some(description) = store.get_problem(id).map(|p| p.description.clone()) else {
        return Err(Error::ProblemNotFound(id.to_string()));
    };

    store.solve_problem(id)?;
    writeln!(out, "Solved problem {id}: {description}")?;
    Ok(())
}

/// Parse a problem ID: decimal digits only.
///
/// A number too large for any slot is reported as not found.
pub(crate) fn parse_id(input: &str) -> Result<ProblemId> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidProblemId(input.to_string()));
    }
    digits
        .parse()
        .map_err(|_| Error::ProblemNotFound(digits.to_string()))
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;
