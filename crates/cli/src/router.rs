// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chat command router.
//!
//! Turns one inbound chat message into at most one reply. The router knows
//! nothing about the transport: `mend chat` feeds it stdin lines, and any
//! bot front end can feed it messages the same way.
//!
//! Commands:
//! - `/start`: greeting
//! - `/report <description>`: report a problem
//! - `/problems`: list open problems
//! - `/solve <id>`: mark a problem solved
//! - `/solved`: list solved problems
//!
//! Anything else starting with `/` gets one of the unsupported replies, in
//! rotation. Plain text gets no reply.

use mend_core::{DateSource, LocalDate, ProblemId, ProblemStore};

use crate::display::{open_listing, solved_listing};
use crate::error::Result;

pub use crate::display::{NO_PROBLEMS, NO_SOLVED_PROBLEMS};

pub const GREETING: &str =
    "Hi! I keep track of household problems.\nTry /report, /problems, /solve and /solved.";
pub const REPORT_USAGE: &str = "usage: /report [description]";
pub const SOLVE_USAGE: &str = "usage: /solve [ID]";
pub const SOLVED_USAGE: &str = "usage: /solved";

/// Replies to unsupported commands, used in turn.
pub const UNSUPPORTED_REPLIES: [&str; 3] = ["Command not supported.", "Enough.", "Come on, stop!"];

/// A parsed chat command.
#[derive(Debug, PartialEq, Eq)]
pub struct ChatCommand<'a> {
    /// Lowercased command word without the `/` or `@botname` suffix.
    pub name: String,
    pub args: Vec<&'a str>,
}

/// Parse `text` as a chat command, or `None` if it is not one.
pub fn parse_command(text: &str) -> Option<ChatCommand<'_>> {
    let mut words = text.split_whitespace();
    let head = words.next()?.strip_prefix('/')?;
    let name = match head.split_once('@') {
        Some((name, _bot)) => name,
        None => head,
    };
    if name.is_empty() {
        return None;
    }
    Some(ChatCommand {
        name: name.to_lowercase(),
        args: words.collect(),
    })
}

/// Join report words into a description, `None` if there are none.
pub fn description_from_words<S: AsRef<str>>(words: &[S]) -> Option<String> {
    let description = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if description.is_empty() {
        None
    } else {
        Some(description)
    }
}

/// Cycles through [`UNSUPPORTED_REPLIES`]; never grows past their count.
#[derive(Debug, Default)]
struct ReplyRotator {
    next: usize,
}

impl ReplyRotator {
    fn next_reply(&mut self) -> &'static str {
        let reply = UNSUPPORTED_REPLIES[self.next];
        self.next = (self.next + 1) % UNSUPPORTED_REPLIES.len();
        reply
    }
}

/// Routes chat commands to a [`ProblemStore`].
#[derive(Debug)]
pub struct Router<D: DateSource = LocalDate> {
    store: ProblemStore<D>,
    date_format: String,
    unknown: ReplyRotator,
}

impl<D: DateSource> Router<D> {
    /// `date_format` is the strftime format for solve dates and must be valid.
    pub fn new(store: ProblemStore<D>, date_format: impl Into<String>) -> Self {
        Router {
            store,
            date_format: date_format.into(),
            unknown: ReplyRotator::default(),
        }
    }

    pub fn store(&self) -> &ProblemStore<D> {
        &self.store
    }

    /// Handle one message. Returns the reply, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist a change. Invalid input
    /// and a full problem list are answered with a reply instead.
    pub fn handle(&mut self, text: &str) -> Result<Option<String>> {
        let Some(command) = parse_command(text) else {
            return Ok(None);
        };
        tracing::debug!("command /{} with {} args", command.name, command.args.len());

        let reply = match command.name.as_str() {
            "start" => GREETING.to_string(),
            "report" => self.report(command.args.as_slice())?,
            "problems" => self.problems(),
            "solve" => self.solve(command.args.as_slice())?,
            "solved" => self.solved(command.args.as_slice()),
            _ => self.unknown.next_reply().to_string(),
        };
        Ok(Some(reply))
    }

    /// Reply to `/report`.
    pub fn report<S: AsRef<str>>(&mut self, words: &[S]) -> Result<String> {
        let Some(description) = description_from_words(words) else {
            return Ok(format!(
                "Nothing to report. Please describe the problem\n{REPORT_USAGE}"
            ));
        };
        match self.store.create_problem(&description) {
            Ok(id) => Ok(format!("Awesome, reported - {description}. Task ID is: {id}")),
            Err(mend_core::Error::CapacityExceeded { capacity }) => Ok(format!(
                "Sorry, the problem list is full ({capacity} open problems).\nSolve one before reporting a new one."
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Reply to `/problems`.
    pub fn problems(&self) -> String {
        open_listing(&self.store)
    }

    /// Reply to `/solve`.
    pub fn solve(&mut self, args: &[&str]) -> Result<String> {
        let arg = match args {
            [arg] => *arg,
            [] => return Ok(format!("Nothing to solve. Please add the problem ID\n{SOLVE_USAGE}")),
            _ => return Ok(format!("Too many parameters to command\n{SOLVE_USAGE}")),
        };
        if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(format!("Invalid problem ID supplied.\n{SOLVE_USAGE}"));
        }

        // All digits, so parsing only fails on overflow: no such slot exists.
        let solved = match arg.parse::<ProblemId>() {
            Ok(id) => self.store.solve_problem(id)?,
            Err(_) => false,
        };
        let shown = arg.trim_start_matches('0');
        let shown = if shown.is_empty() { "0" } else { shown };

        if solved {
            Ok(format!("Awesome\nproblem with ID {shown} solved!"))
        } else {
            Ok(format!("Sorry, problem with ID: {shown} doesn't exist"))
        }
    }

    /// Reply to `/solved`.
    pub fn solved(&self, args: &[&str]) -> String {
        if !args.is_empty() {
            return format!("Please don't add anything to the command\n{SOLVED_USAGE}");
        }
        solved_listing(&self.store, &self.date_format)
    }
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
