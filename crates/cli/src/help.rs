// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let color = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let context = color(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(color(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_problems}
  {report}      Report a new problem
  {problems}    List open problems
  {solve}       Mark a problem as solved
  {solved}      List solved problems
  {chat}        Answer chat commands from stdin

{header_setup}
  {init}        Initialize the problem tracker
  {completion}  Generate shell completions
",
        header_problems = colors::header("Problems:"),
        header_setup = colors::header("Setup:"),
        report = colors::literal("report"),
        problems = colors::literal("problems"),
        solve = colors::literal("solve"),
        solved = colors::literal("solved"),
        chat = colors::literal("chat"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  mend init                      Initialize tracker
  mend report \"Sink leaking\"     Report a problem
  mend problems                  List open problems
  mend solve <id>                Mark a problem as solved",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
