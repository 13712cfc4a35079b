//! Criterion micro-benchmarks for append, insert, index and iteration.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use larray::DynamicArray;
use larray_bench::{append_profile, drain_front, front_insert_profile};

/// Benchmark: Build a 100K-element array by repeated append.
fn bench_append_100k(c: &mut Criterion) {
    c.bench_function("append_100k", |b| {
        b.iter(|| {
            let a = append_profile(100_000);
            black_box(a.len());
        });
    });
}

/// Benchmark: Build a 2K-element array by inserting at the front.
fn bench_front_insert_2k(c: &mut Criterion) {
    c.bench_function("front_insert_2k", |b| {
        b.iter(|| {
            let a = front_insert_profile(2_000);
            black_box(a.len());
        });
    });
}

/// Benchmark: Drain a 2K-element array through pop_at(0), shrinking as it goes.
fn bench_drain_front_2k(c: &mut Criterion) {
    c.bench_function("drain_front_2k", |b| {
        b.iter_batched(
            || append_profile(2_000),
            |mut a| black_box(drain_front(&mut a)),
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark: Indexed reads over 100K elements.
fn bench_get_100k(c: &mut Criterion) {
    let a = append_profile(100_000);
    c.bench_function("get_100k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..a.len() {
                if let Ok(v) = a.get(i) {
                    sum += v;
                }
            }
            black_box(sum);
        });
    });
}

/// Benchmark: Forward and reverse iteration over 100K elements.
fn bench_iterate_100k(c: &mut Criterion) {
    let a = append_profile(100_000);
    c.bench_function("iterate_fwd_rev_100k", |b| {
        b.iter(|| {
            let fwd: u64 = a.iter().sum();
            let rev: u64 = a.iter_rev().sum();
            black_box(fwd + rev);
        });
    });
}

/// Benchmark: Concatenate two 50K-element arrays.
fn bench_concat_50k(c: &mut Criterion) {
    let x = append_profile(50_000);
    let y = append_profile(50_000);
    c.bench_function("concat_50k", |b| {
        b.iter(|| {
            let z: DynamicArray<u64> = &x + &y;
            black_box(z.len());
        });
    });
}

criterion_group!(
    benches,
    bench_append_100k,
    bench_front_insert_2k,
    bench_drain_front_2k,
    bench_get_100k,
    bench_iterate_100k,
    bench_concat_50k
);
criterion_main!(benches);
