//! Criterion benchmarks for spiral generation and formatting.
//!
//! Run with `cargo bench`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use spiral_matrix::{FormatParams, SpiralWalk, format, generate};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for n in [3usize, 12, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| generate(black_box(n)))
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    c.bench_function("walk_n1000", |b| {
        b.iter(|| SpiralWalk::new(black_box(1_000)).map(Iterator::count))
    });
}

fn bench_format(c: &mut Criterion) {
    let params = FormatParams::default();
    let mut group = c.benchmark_group("format");
    for n in [12usize, 100] {
        let matrix = generate(n).expect("valid order");
        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| format(black_box(m), &params))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_walk, bench_format);
criterion_main!(benches);
