//! Criterion benchmarks comparing the two exponentiation algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use fibmat_core::{fibonacci, fibonacci2};

fn bench_algorithms(c: &mut Criterion) {
    let ns: Vec<u64> = vec![1_000, 10_000, 50_000, 200_000];

    let mut group = c.benchmark_group("TriadExponentiation");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci(n));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("PairedExponentiation");
    for &n in &ns {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| fibonacci2(n));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
