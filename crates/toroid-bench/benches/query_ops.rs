//! Criterion micro-benchmarks for neighbor queries.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use toroid_bench::reference_profile;
use toroid_space::OffsetList;

/// Benchmark: find_first with a never-matching predicate over a radius-8
/// disk, i.e. a full scan of ~200 cells.
fn bench_find_first_miss(c: &mut Criterion) {
    let profile = reference_profile(42);
    let disk = OffsetList::disk(8);

    c.bench_function("find_first_miss_r8", |b| {
        b.iter(|| black_box(profile.index.find_first(&disk, 128, 128, |_, _, _| false)));
    });
}

/// Benchmark: collect_bounded(limit=32) around 100 origins.
fn bench_collect_bounded(c: &mut Criterion) {
    let profile = reference_profile(42);
    let disk = OffsetList::disk(12);

    c.bench_function("collect_bounded_r12_l32_x100", |b| {
        b.iter(|| {
            for i in 0..100i32 {
                let view = profile.index.collect_bounded(&disk, i * 37, i * 11, 32);
                black_box(&view);
            }
        });
    });
}

/// Benchmark: iterate_until counting objects within a radius-16 square.
fn bench_iterate_until_count(c: &mut Criterion) {
    let profile = reference_profile(42);
    let square = OffsetList::square(16);

    c.bench_function("iterate_until_count_sq16", |b| {
        b.iter(|| {
            let mut n = 0usize;
            profile.index.iterate_until(&square, -5, 300, |_, _, _, _| {
                n += 1;
                false
            });
            black_box(n)
        });
    });
}

criterion_group!(
    benches,
    bench_find_first_miss,
    bench_collect_bounded,
    bench_iterate_until_count
);
criterion_main!(benches);
