// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Date format accepted by `MEND_TODAY`.
pub const TODAY_FORMAT: &str = "%Y-%m-%d";

/// Returns the date pinned by `MEND_TODAY`, if set.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the value is not a `YYYY-MM-DD` date.
pub fn today_override() -> Result<Option<NaiveDate>> {
    match std::env::var(vars::MEND_TODAY) {
        Ok(value) => parse_today(&value).map(Some),
        Err(_) => Ok(None),
    }
}

pub(crate) fn parse_today(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), TODAY_FORMAT).map_err(|_| Error::InvalidDate {
        var: vars::MEND_TODAY,
        value: value.to_string(),
    })
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
