// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for the linear free-slot scan.

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mend_core::{Problem, SlotTable, DEFAULT_CAPACITY};

fn table_filled_to(filled: usize) -> SlotTable {
    let opened = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default();
    let mut table = SlotTable::new(DEFAULT_CAPACITY);
    for id in 0..filled {
        table.put(Problem::new(id, format!("problem {id}"), opened));
    }
    table
}

fn free_slot_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_slot");

    for filled in [0, DEFAULT_CAPACITY / 2, DEFAULT_CAPACITY - 1, DEFAULT_CAPACITY] {
        let table = table_filled_to(filled);
        group.bench_with_input(BenchmarkId::new("filled", filled), &table, |b, t| {
            b.iter(|| t.free_slot())
        });
    }
    group.finish();
}

criterion_group!(benches, free_slot_scan);
criterion_main!(benches);
