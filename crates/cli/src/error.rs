// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the mendrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'mend init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("problem not found: {0}")]
    ProblemNotFound(String),

    #[error("invalid problem ID: '{0}'\n  hint: IDs are the numbers shown by 'mend problems'")]
    InvalidProblemId(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("invalid capacity: {0}\n  hint: capacity must be at least 1")]
    InvalidCapacity(usize),

    #[error("invalid date in {var}: '{value}'\n  hint: use YYYY-MM-DD")]
    InvalidDate { var: &'static str, value: String },

    #[error("problem list is full ({capacity} open problems)\n  hint: solve a problem to free an ID")]
    CapacityExceeded { capacity: usize },

    #[error("store is locked by another process: {0}")]
    StoreLocked(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for mendrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<mend_core::Error> for Error {
    fn from(e: mend_core::Error) -> Self {
        match e {
            mend_core::Error::CapacityExceeded { capacity } => Error::CapacityExceeded { capacity },
            mend_core::Error::Io(e) => Error::Io(e),
            mend_core::Error::Json(e) => Error::Json(e),
            other @ (mend_core::Error::RecordMissing(_)
            | mend_core::Error::CorruptedData { .. }
            | mend_core::Error::Incompatible(_)) => Error::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
