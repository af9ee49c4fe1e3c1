// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mendrs - library behind the `mend` household problem tracker.
//!
//! The problem store itself lives in [`mend_core`]. This crate adds:
//!
//! - [`Router`] - turns chat messages (`/report`, `/solve 3`, ...) into replies
//! - [`Config`] - project configuration in `.mend/config.toml`
//! - [`Cli`] / [`Command`] - the command line surface
//! - [`Error`] - user-facing error messages
//!
//! # Routing messages
//!
//! ```rust,ignore
//! use mendrs::Router;
//! use mend_core::ProblemStore;
//!
//! let store = ProblemStore::open(Path::new(".mend"), 100)?;
//! let mut router = Router::new(store, "%Y-%m-%d");
//! if let Some(reply) = router.handle("/report sink leaking")? {
//!     println!("{reply}");
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod lock;
pub mod logging;

pub mod config;
pub mod error;
pub mod router;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_store_dir, init_work_dir, Config};
pub use error::{Error, Result};
pub use router::Router;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            path,
            capacity,
            store,
        } => commands::init::run(path, capacity, store),
        Command::Report { description } => commands::report::run(&description),
        Command::Problems { output } => commands::problems::run(output),
        Command::Solve { id } => commands::solve::run(&id),
        Command::Solved { output } => commands::solved::run(output),
        Command::Chat => commands::chat::run(),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "mend", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
