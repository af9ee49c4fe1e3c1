// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented chat session.
//!
//! Each input line is one message. Replies are written as they are
//! produced, each followed by a blank line, so a front end can pipe
//! messages in and read replies back.

use std::io::{BufRead, Write};

use mend_core::DateSource;

use crate::config::get_log_path;
use crate::error::Result;
use crate::logging;
use crate::router::Router;

use super::Project;

/// Reply sent when a command fails to persist.
pub const FAILURE_REPLY: &str = "Sorry, something went wrong. Please try again.";

pub fn run() -> Result<()> {
    let project = Project::locate()?;
    logging::init_file(&get_log_path(&project.store_dir));
    tracing::debug!("project at {}", project.work_dir.display());

    let (store, _lock) = project.open()?;
    let mut router = Router::new(store, project.config.date_format.clone());

    let stdin = std::io::stdin();
    chat_impl(&mut router, stdin.lock(), &mut std::io::stdout().lock())
}

/// Route every line of `input` and write the replies to `out`.
///
/// Store errors are logged and answered with [`FAILURE_REPLY`]; only I/O
/// errors on `input` or `out` end the session.
pub(crate) fn chat_impl<D: DateSource>(
    router: &mut Router<D>,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    tracing::info!("chat session started");
    let mut handled = 0usize;

    for line in input.lines() {
        let line = line?;
        let reply = match router.handle(&line) {
            Ok(Some(reply)) => reply,
            Ok(None) => continue,
            Err(e) => {
                tracing::error!("command '{}' failed: {}", line.trim(), e);
                FAILURE_REPLY.to_string()
            }
        };
        handled += 1;
        writeln!(out, "{reply}")?;
        writeln!(out)?;
        out.flush()?;
    }

    tracing::info!("chat session ended after {} commands", handled);
    Ok(())
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
