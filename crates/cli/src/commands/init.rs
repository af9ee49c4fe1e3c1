// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{get_store_dir, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(path: Option<String>, capacity: usize, store: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    run_impl(&target_path, capacity, store, &mut std::io::stdout().lock())
}

pub(crate) fn run_impl(
    target_path: &Path,
    capacity: usize,
    store: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let config = Config::new(capacity, store)?;
    let work_dir = init_work_dir(target_path, &config)?;
    write_gitignore(&work_dir)?;

    let store_dir = get_store_dir(&work_dir, &config);
    std::fs::create_dir_all(&store_dir)?;
    tracing::info!("initialized {} (store {})", work_dir.display(), store_dir.display());

    writeln!(out, "Initialized problem tracker at {}", work_dir.display())?;
    writeln!(out, "Capacity: {}", config.capacity)?;
    if config.store.is_some() {
        writeln!(out, "Store: {}", store_dir.display())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
