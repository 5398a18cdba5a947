//! Benchmarks for banded covariance matrix operations

use bandcov::{row_capacity, BandedCovMat};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_stream(dim: usize, band: isize, seed: u64) -> BandedCovMat {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = BandedCovMat::with_band(dim, band).unwrap();
    for i in 0..dim {
        for _ in 0..row_capacity(dim, band, i) {
            m.append_value(rng.gen_range(-1.0..1.0)).unwrap();
        }
    }
    m
}

/// Benchmark streaming construction
fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_stream");

    for &(dim, band) in &[(300usize, 2isize), (300, 299), (3000, 2)] {
        let values: Vec<f64> = (0..bandcov::band_element_count(dim, band))
            .map(|i| i as f64)
            .collect();
        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("band_{band}"), dim),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut m = BandedCovMat::with_band(dim, band).unwrap();
                    m.append_values(values.iter().copied()).unwrap();
                    black_box(m)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark random covariance reads
fn bench_get_cov(c: &mut Criterion) {
    let m = random_stream(1000, 5, 1);
    let mut rng = StdRng::seed_from_u64(2);
    let pairs: Vec<(usize, usize)> = (0..10_000)
        .map(|_| (rng.gen_range(0..1000), rng.gen_range(0..1000)))
        .collect();

    let mut group = c.benchmark_group("get_cov");
    group.throughput(Throughput::Elements(pairs.len() as u64));
    group.bench_function("random_pairs", |bencher| {
        bencher.iter(|| {
            let mut sum = 0.0;
            for &(i, j) in &pairs {
                sum += m.get_cov(black_box(i), black_box(j)).unwrap().unwrap_or(0.0);
            }
            sum
        });
    });
    group.finish();
}

/// Benchmark whole-matrix arithmetic
fn bench_add_and_scale(c: &mut Criterion) {
    let a = random_stream(2000, 50, 3);
    let b = random_stream(2000, 50, 4);

    c.bench_function("add_2000_band_50", |bencher| {
        bencher.iter(|| black_box(&a).add(black_box(&b)).unwrap());
    });

    c.bench_function("scale_2000_band_50", |bencher| {
        bencher.iter(|| {
            let mut m = a.clone();
            m.scale(black_box(1e-3));
            m
        });
    });
}

/// Benchmark dense conversion
fn bench_to_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_dense");

    for &dim in &[100usize, 500] {
        let m = random_stream(dim, dim as isize - 1, 5);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &m, |bencher, m| {
            bencher.iter(|| m.to_dense());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_get_cov,
    bench_add_and_scale,
    bench_to_dense
);
criterion_main!(benches);
