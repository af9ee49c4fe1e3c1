// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mend_core::{DateSource, ProblemStore};

use crate::cli::OutputFormat;
use crate::display::{solved_listing, ProblemJson};
use crate::error::Result;

use super::open_store;

pub fn run(output: OutputFormat) -> Result<()> {
    let (store, config, _lock) = open_store()?;
    run_impl(&store, &config.date_format, output, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl<D: DateSource>(
    store: &ProblemStore<D>,
    date_format: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => writeln!(out, "{}", solved_listing(store, date_format))?,
        OutputFormat::Json => {
            let today = store.today();
            let problems: Vec<ProblemJson<'_>> = store
                .list_solved_problems()
                .into_iter()
                .map(|p| ProblemJson::new(p, today))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&problems)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "solved_tests.rs"]
mod tests;
