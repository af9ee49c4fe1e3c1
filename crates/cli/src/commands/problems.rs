// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mend_core::{DateSource, ProblemStore};

use crate::cli::OutputFormat;
use crate::display::{open_listing, ProblemJson};
use crate::error::Result;

use super::open_store;

pub fn run(output: OutputFormat) -> Result<()> {
    let (store, _config, _lock) = open_store()?;
    run_impl(&store, output, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl<D: DateSource>(
    store: &ProblemStore<D>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => writeln!(out, "{}", open_listing(store))?,
        OutputFormat::Json => {
            let today = store.today();
            let problems: Vec<ProblemJson<'_>> = store
                .list_open_problems()
                .into_iter()
                .map(|p| ProblemJson::new(p, today))
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&problems)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "problems_tests.rs"]
mod tests;
