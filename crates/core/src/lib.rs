// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! mend-core: problem lifecycle store for the mend tracker
//!
//! This crate owns the problem model, the bounded table of open problems,
//! the solved archive and their persistence. The `mend` CLI and chat router
//! are thin callers on top of [`ProblemStore`].

pub mod archive;
pub mod date;
pub mod error;
pub mod persist;
pub mod problem;
pub mod slots;
pub mod store;

pub use archive::Archive;
pub use date::{DateSource, FixedDate, LocalDate};
pub use error::{Error, Result};
pub use problem::{Problem, ProblemId, ProblemState};
pub use slots::SlotTable;
pub use store::{ProblemStore, DEFAULT_CAPACITY};
