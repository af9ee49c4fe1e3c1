// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Date pinned for every command unless a test picks another.
pub const TODAY: &str = "2026-03-01";

/// `mend` with a pinned date and no colors or log filter from the caller.
pub fn mend() -> Command {
    mend_on(TODAY)
}

/// `mend` as if run on `date` (YYYY-MM-DD).
pub fn mend_on(date: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("mend");
    cmd.env("MEND_TODAY", date)
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    init_temp_with_capacity(100)
}

/// Helper to create an initialized temp directory with a custom capacity
pub fn init_temp_with_capacity(capacity: usize) -> TempDir {
    let temp = TempDir::new().unwrap();
    mend()
        .arg("init")
        .arg("--capacity")
        .arg(capacity.to_string())
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to report a problem and return its ID
pub fn report(temp: &TempDir, description: &str) -> usize {
    let output = mend()
        .arg("report")
        .arg(description)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "report failed: {:?}", output);

    String::from_utf8_lossy(&output.stdout)
        .trim()
        .rsplit(' ')
        .next()
        .unwrap()
        .parse()
        .unwrap()
}

/// Run `mend problems` and return stdout.
pub fn problems(temp: &TempDir) -> String {
    stdout_of(mend().arg("problems").current_dir(temp.path()))
}

/// Run `mend solved` and return stdout.
pub fn solved(temp: &TempDir) -> String {
    stdout_of(mend().arg("solved").current_dir(temp.path()))
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).to_string()
}
