//! Benchmarks for sparse matrix arithmetic and serialization

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_matrix::SparseMatrix;

/// Banded test matrix with `2 * half_width + 1` non-zeros per row
fn create_banded_matrix(n: usize, half_width: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        for j in i.saturating_sub(half_width)..(i + half_width + 1).min(n) {
            matrix.set_value(i, j, ((i + 2 * j) % 9) as i64 + 1);
        }
    }
    matrix
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for &n in &[100usize, 1_000, 10_000] {
        let a = create_banded_matrix(n, 2);
        let b = create_banded_matrix(n, 3);

        group.bench_with_input(BenchmarkId::new("addition", n), &n, |bench, _| {
            bench.iter(|| black_box(a.addition(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("subtraction", n), &n, |bench, _| {
            bench.iter(|| black_box(a.subtraction(&b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("multiplication", n), &n, |bench, _| {
            bench.iter(|| black_box(a.multiplication(&b).unwrap()))
        });
    }

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let matrix = create_banded_matrix(10_000, 2);
    let mut text = Vec::new();
    matrix.write_to(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();

    c.bench_function("write_to", |bench| {
        bench.iter(|| {
            let mut out = Vec::with_capacity(text.len());
            matrix.write_to(&mut out).unwrap();
            black_box(out)
        })
    });
    c.bench_function("from_text", |bench| {
        bench.iter(|| black_box(SparseMatrix::<i64>::from_text(&text).unwrap()))
    });
}

criterion_group!(benches, bench_arithmetic, bench_serialization);
criterion_main!(benches);
