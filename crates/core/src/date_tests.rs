// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn fixed_date_reports_pinned_date() {
    let dates = FixedDate::new(ymd(2026, 3, 14));
    assert_eq!(dates.today(), ymd(2026, 3, 14));
}

#[test]
fn fixed_date_advance_crosses_month_boundary() {
    let dates = FixedDate::new(ymd(2026, 1, 30));
    dates.advance_days(3);
    assert_eq!(dates.today(), ymd(2026, 2, 2));

    dates.advance_days(-3);
    assert_eq!(dates.today(), ymd(2026, 1, 30));
}

#[test]
fn fixed_date_set_replaces_date() {
    let dates = FixedDate::new(ymd(2026, 1, 1));
    dates.set(ymd(2027, 6, 1));
    assert_eq!(dates.today(), ymd(2027, 6, 1));
}

#[test]
fn reference_delegates_to_source() {
    let dates = FixedDate::new(ymd(2026, 5, 5));
    let by_ref = &dates;
    dates.advance_days(1);
    assert_eq!(by_ref.today(), ymd(2026, 5, 6));
}

#[test]
fn local_date_is_close_to_utc_date() {
    let local = LocalDate.today();
    let utc = chrono::Utc::now().date_naive();
    assert!((local - utc).num_days().abs() <= 1);
}

#[test]
fn boxed_source_delegates() {
    let boxed: Box<dyn DateSource> = Box::new(FixedDate::new(ymd(2026, 8, 9)));
    assert_eq!(boxed.today(), ymd(2026, 8, 9));
}

#[test]
fn shared_source_sees_advances() {
    let dates = std::sync::Arc::new(FixedDate::new(ymd(2026, 8, 9)));
    let shared = std::sync::Arc::clone(&dates);
    dates.advance_days(2);
    assert_eq!(shared.today(), ymd(2026, 8, 11));
}
