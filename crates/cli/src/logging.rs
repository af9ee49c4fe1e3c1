// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.
//!
//! `RUST_LOG` overrides the default filter in both modes.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::env::vars;

/// Default filter for one-shot commands.
pub const STDERR_DEFAULT: &str = "warn";
/// Default filter for the chat loop's log file.
pub const FILE_DEFAULT: &str = "info";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(vars::RUST_LOG).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to stderr. Used by one-shot commands.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(STDERR_DEFAULT))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Append logs to `log_path`, falling back to stderr if it cannot be opened.
pub fn init_file(log_path: &Path) {
    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(FILE_DEFAULT))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            init_stderr();
            tracing::warn!("could not open {}: {}", log_path.display(), e);
        }
    }
}
