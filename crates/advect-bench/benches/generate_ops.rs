//! Criterion benchmarks for field generation from presets and expressions.

use std::hint::black_box;

use advect_bench::parse_all;
use advect_gen::{generate, Preset};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// Benchmark: sample every preset over the full mesh.
fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_preset");
    for preset in Preset::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(preset), &preset, |b, p| {
            b.iter(|| black_box(generate(p).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: tree-walking evaluation of parsed expressions.
fn bench_expressions(c: &mut Criterion) {
    let exprs = parse_all().unwrap();
    let mut group = c.benchmark_group("generate_expr");
    for (label, expr) in &exprs {
        group.bench_with_input(BenchmarkId::from_parameter(label), expr, |b, e| {
            b.iter(|| black_box(generate(e).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_presets, bench_expressions);
criterion_main!(benches);
