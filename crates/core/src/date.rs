// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar date sources.
//!
//! Problem ages are counted in whole calendar days, so the store only ever
//! asks for "today". The source is injectable so tests (and the `MEND_TODAY`
//! override) can move the calendar without touching the system clock.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};

/// Trait for getting the current calendar date.
pub trait DateSource: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Local calendar date from the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalDate;

impl DateSource for LocalDate {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

impl<D: DateSource + ?Sized> DateSource for &D {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<D: DateSource + ?Sized> DateSource for Box<D> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<D: DateSource + ?Sized> DateSource for Arc<D> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// A date source pinned to a settable date.
///
/// Stored as days since the common era so it can be advanced through a
/// shared reference.
#[derive(Debug)]
pub struct FixedDate {
    days_from_ce: AtomicI32,
}

impl FixedDate {
    /// Creates a source that reports `date` until changed.
    pub fn new(date: NaiveDate) -> Self {
        FixedDate { days_from_ce: AtomicI32::new(date.num_days_from_ce()) }
    }

    /// Pins the source to a new date.
    pub fn set(&self, date: NaiveDate) {
        self.days_from_ce.store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    /// Moves the source forward by `days` (backwards if negative).
    pub fn advance_days(&self, days: i32) {
        self.days_from_ce.fetch_add(days, Ordering::SeqCst);
    }
}

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        let days = self.days_from_ce.load(Ordering::SeqCst);
        NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
