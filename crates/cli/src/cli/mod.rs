// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Output format for listing commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "mend")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A small household problem tracker")]
#[command(
    long_about = "A small household problem tracker.\n\n\
    Report problems, see how long they have been open, and mark them solved. \
    The same commands are available as chat messages through 'mend chat'."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if mend was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report a new problem
    #[command(after_help = colors::examples("\
Examples:
  mend report sink leaking          Report a problem
  mend report \"door squeaks\"        Quotes are optional"))]
    Report {
        /// Problem description (words are joined with single spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// List open problems
    Problems {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Mark a problem as solved
    #[command(arg_required_else_help = true)]
    Solve {
        /// Problem ID, as shown by 'mend problems'
        id: String,
    },

    /// List solved problems
    Solved {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Answer chat commands read from stdin
    #[command(after_help = colors::examples("\
Examples:
  echo /problems | mend chat        Answer one message
  mend chat                         Read messages until end of input

Commands:
  /start  /report <description>  /problems  /solve <id>  /solved"))]
    Chat,

    /// Initialize the problem tracker
    #[command(after_help = colors::examples("\
Examples:
  mend init                         Initialize in current directory
  mend init --capacity 20           Allow at most 20 open problems
  mend init --store shared/mend     Keep records outside .mend/"))]
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,

        /// Number of problem IDs available
        #[arg(long, default_value_t = mend_core::DEFAULT_CAPACITY)]
        capacity: usize,

        /// Directory for the problem records (relative to the project root)
        #[arg(long)]
        store: Option<String>,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  mend completion bash > ~/.local/share/bash-completion/completions/mend
  mend completion zsh > ~/.zfunc/_mend
  mend completion fish > ~/.config/fish/completions/mend.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
