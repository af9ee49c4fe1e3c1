// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{capture, TestContext};

#[test]
fn text_with_nothing_solved() {
    let ctx = TestContext::new();
    let output = capture(|out| run_impl(&ctx.store, "%Y-%m-%d", OutputFormat::Text, out));
    assert_eq!(output, "No solved problems to show\n");
}

#[test]
fn text_marks_today_and_earlier_solves() {
    let mut ctx = TestContext::new();
    ctx.report("boiler");
    ctx.report("roof");
    ctx.solve(0);
    ctx.advance_days(2);
    ctx.solve(1);

    let output = capture(|out| run_impl(&ctx.store, "%Y-%m-%d", OutputFormat::Text, out));
    assert_eq!(
        output,
        "ID 0: boiler [closed on 2026-03-01]\nID 1: roof [closed today]\n"
    );
}

#[test]
fn reused_id_lists_both_problems() {
    let mut ctx = TestContext::new();
    ctx.report("boiler");
    ctx.solve(0);
    assert_eq!(ctx.report("roof"), 0);
    ctx.solve(0);

    let output = capture(|out| run_impl(&ctx.store, "%Y-%m-%d", OutputFormat::Text, out));
    assert_eq!(output, "ID 0: boiler [closed today]\nID 0: roof [closed today]\n");
}

#[test]
fn json_includes_solve_date_and_frozen_age() {
    let mut ctx = TestContext::new();
    ctx.report("boiler");
    ctx.advance_days(4);
    ctx.solve(0);
    ctx.advance_days(10);

    let output = capture(|out| run_impl(&ctx.store, "%Y-%m-%d", OutputFormat::Json, out));
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json[0]["state"], "solved");
    assert_eq!(json[0]["date_solved"], "2026-03-05");
    assert_eq!(json[0]["days_open"], 4);
}
