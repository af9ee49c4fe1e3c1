// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for mend-core operations.

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in mend-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("problem list is full ({capacity} open problems)\n  hint: solve a problem to free an ID")]
    CapacityExceeded { capacity: usize },

    #[error("record not found: {}", .0.display())]
    RecordMissing(PathBuf),

    #[error("corrupted data in {}: {reason}", path.display())]
    CorruptedData { path: PathBuf, reason: String },

    #[error("incompatible record: {0}")]
    Incompatible(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for mend-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
