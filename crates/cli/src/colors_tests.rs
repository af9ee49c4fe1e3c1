// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(250), "\x1b[38;5;250m");
}

#[test]
fn header_wraps_text_in_header_color() {
    assert_eq!(header("Commands:"), "\x1b[38;5;74mCommands:\x1b[0m");
}

#[test]
fn literal_and_context_use_distinct_codes() {
    assert!(literal("x").starts_with(&fg256(codes::LITERAL)));
    assert!(context("x").starts_with(&fg256(codes::CONTEXT)));
}

#[test]
fn find_description_start_at_double_space() {
    assert_eq!(find_description_start("mend solve <id>    Solve it"), Some(15));
}

#[test]
fn find_description_start_none_without_description() {
    assert_eq!(find_description_start("mend problems"), None);
    assert_eq!(find_description_start("mend problems   "), None);
}

#[test]
fn placeholders_are_context_colored() {
    let out = colorize_command("mend solve <id>");
    assert!(out.contains(&context("<id>")));
    assert!(out.contains(&literal("solve")));
    assert_eq!(strip_ansi(&out), "mend solve <id>");
}

#[test]
fn rendered_examples_keep_plain_text() {
    let text = "Examples:\n  mend report \"Sink leaking\"   Report a problem\n  plain line";
    let out = render_examples(text);
    assert_eq!(strip_ansi(&out), text);
    assert!(out.contains(&header("Examples:")));
}
