// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use mend_core::DateSource;

use crate::error::{Error, Result};
use crate::router::{description_from_words, Router};

use super::open_store;

pub fn run(words: &[String]) -> Result<()> {
    let (store, config, _lock) = open_store()?;
    let mut router = Router::new(store, config.date_format);
    run_impl(&mut router, words, &mut std::io::stdout().lock())
}

/// Report through the router so the CLI prints the same reply as chat.
///
/// Unlike chat, an empty description or a full list is an error here.
pub(crate) fn run_impl<D: DateSource>(
    router: &mut Router<D>,
    words: &[String],
    out: &mut impl Write,
) -> Result<()> {
    let Some(description) = description_from_words(words) else {
        return Err(Error::FieldEmpty {
            field: "Description",
        });
    };
    if router.store().is_full() {
        return Err(Error::CapacityExceeded {
            capacity: router.store().capacity(),
        });
    }

    let reply = router.report(&[description])?;
    writeln!(out, "{reply}")?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
