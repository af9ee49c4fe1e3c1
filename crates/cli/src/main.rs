// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use mendrs::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    // The chat session logs to a file once it knows where the store is
    if !matches!(cli.command, Command::Chat) {
        mendrs::logging::init_stderr();
    }

    if let Some(dir) = &cli.directory {
        if let Err(e) = std::env::set_current_dir(dir) {
            eprintln!("error: cannot change to directory '{}': {}", dir, e);
            std::process::exit(1);
        }
    }

    if let Err(e) = mendrs::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
