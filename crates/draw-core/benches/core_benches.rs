//! Criterion benchmarks for draw-core fixed-point operations.
//!
//! Covers: reserve scaling, wide multiply/divide, and decimal parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use draw_core::fixed::{UDecimal, UFraction};

fn bench_mul_amount(c: &mut Criterion) {
    let fraction: UFraction = "0.731058579".parse().unwrap();
    let reserve: u128 = 123_456_789_000_000_000_000_000;

    c.bench_function("fraction_mul_amount", |b| {
        b.iter(|| black_box(fraction).mul_amount(black_box(reserve)))
    });
}

fn bench_wide_mul_div(c: &mut Criterion) {
    let a: UDecimal = "0.625".parse().unwrap();
    let d: UDecimal = "0.375".parse().unwrap();

    c.bench_function("decimal_mul", |b| {
        b.iter(|| black_box(a).checked_mul(black_box(d)))
    });
    c.bench_function("decimal_div", |b| {
        b.iter(|| black_box(a).checked_div(black_box(d)))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("fraction_parse", |b| {
        b.iter(|| black_box("0.123456789012345678").parse::<UFraction>())
    });
}

criterion_group!(benches, bench_mul_amount, bench_wide_mul_div, bench_parse);
criterion_main!(benches);
