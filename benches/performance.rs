// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for SCREENSETS
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Lookup by own set number (linear scan)
//! - Ordinal index lookup
//! - Swap and play-screen switching
//! - Visitor throughput over sets and slots

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use screensets::{Pattern, SetManager};

fn populated(count: i32) -> SetManager {
    let mut manager = SetManager::new();
    for setno in 0..count {
        if let Some(set) = manager.add_set(setno) {
            let _ = set.add_pattern((setno % 32) as usize, Pattern::new("bench"));
        }
    }
    manager
}

/// Benchmark lookup by value and ordinal index
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [32, 256, 2047].iter() {
        let manager = populated(*size);
        let target = size - 1;

        group.bench_with_input(BenchmarkId::new("find_by_value", size), &target, |b, &t| {
            b.iter(|| black_box(manager.find_by_value(black_box(t)).is_some()))
        });

        group.bench_with_input(BenchmarkId::new("screenset_index", size), &target, |b, &t| {
            b.iter(|| black_box(manager.screenset_index(black_box(t))))
        });
    }

    group.finish();
}

/// Benchmark swaps and play-screen changes
fn bench_swap_and_play(c: &mut Criterion) {
    let mut manager = populated(256);

    c.bench_function("swap_sets", |b| {
        b.iter(|| black_box(manager.swap_sets(black_box(3), black_box(200))))
    });

    let mut setno = 0;
    c.bench_function("set_playscreen", |b| {
        b.iter(|| {
            setno = (setno + 1) % 32;
            black_box(manager.set_playscreen(setno))
        })
    });
}

/// Benchmark the visitor entry points
fn bench_visitors(c: &mut Criterion) {
    let mut group = c.benchmark_group("visitors");

    for size in [32, 256].iter() {
        let mut manager = populated(*size);

        group.bench_function(BenchmarkId::new("set_function", size), |b| {
            b.iter(|| manager.set_function(|set, index| black_box(set.set_number() + index) >= 0))
        });

        group.bench_function(BenchmarkId::new("slot_function", size), |b| {
            b.iter(|| manager.slot_function(|slot| slot.toggle_armed() || !slot.is_active()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lookup, bench_swap_and_play, bench_visitors);
criterion_main!(benches);
