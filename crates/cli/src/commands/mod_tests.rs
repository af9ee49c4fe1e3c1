// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without project setup.
//!
//! This module provides a `TestContext` that wraps a store in a temporary
//! directory with a pinned date and a default config, so commands can be
//! tested without a `.mend/` directory or a lock.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.report("sink leaking");
//!
//!     // Test command logic using ctx.store and ctx.config
//! }
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use mend_core::{FixedDate, ProblemId, ProblemStore};
use tempfile::TempDir;

use crate::config::Config;
use crate::router::Router;

/// Date every test context starts on.
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

/// Test context providing a temporary store, a movable date and default config.
pub struct TestContext {
    pub store: ProblemStore<Arc<FixedDate>>,
    pub dates: Arc<FixedDate>,
    pub config: Config,
    temp_dir: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a context with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(mend_core::DEFAULT_CAPACITY)
    }

    /// Create a context with a custom capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dates = Arc::new(FixedDate::new(start_date()));
        let config = Config::new(capacity, None).expect("Failed to create config");
        let store = ProblemStore::with_dates(temp_dir.path(), capacity, Arc::clone(&dates))
            .expect("Failed to open store");
        TestContext {
            store,
            dates,
            config,
            temp_dir,
        }
    }

    /// Report a problem and return its ID.
    pub fn report(&mut self, description: &str) -> ProblemId {
        self.store
            .create_problem(description)
            .expect("Failed to create problem")
    }

    /// Solve a problem that is known to be open.
    pub fn solve(&mut self, id: ProblemId) -> &mut Self {
        assert!(self.store.solve_problem(id).expect("Failed to solve problem"));
        self
    }

    /// Move the calendar forward.
    pub fn advance_days(&mut self, days: i32) -> &mut Self {
        self.dates.advance_days(days);
        self
    }

    /// Directory holding the records.
    pub fn store_dir(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    /// Reopen the records from disk, as a later command would.
    pub fn reopen(&mut self) -> &mut Self {
        self.store = ProblemStore::with_dates(
            self.temp_dir.path(),
            self.config.capacity,
            Arc::clone(&self.dates),
        )
        .expect("Failed to reopen store");
        self
    }

    /// Hand the store to a router, as `mend chat` does.
    pub fn into_router(self) -> (Router<Arc<FixedDate>>, Arc<FixedDate>, TempDir) {
        let router = Router::new(self.store, self.config.date_format);
        (router, self.dates, self.temp_dir)
    }
}

/// Run `f` with an output buffer and return what it wrote.
pub fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> crate::error::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).expect("command failed");
    String::from_utf8(out).expect("output is utf-8")
}
