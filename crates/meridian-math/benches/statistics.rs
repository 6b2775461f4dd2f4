//! Batch versus streaming statistics.
//!
//! Run with: cargo bench -p meridian-math

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use meridian_math::statistics::{self, OrderStatistics, RunningStatistics};

fn sample(n: usize) -> Vec<f64> {
    // Deterministic pseudo-returns in roughly [-0.05, 0.05]
    (0..n)
        .map(|i| ((i as f64 * 0.618_033_988_75).fract() - 0.5) / 10.0)
        .collect()
}

fn bench_variance(c: &mut Criterion) {
    let mut group = c.benchmark_group("variance");

    for size in [250usize, 2_500, 25_000] {
        let data = sample(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch", size), &data, |b, data| {
            b.iter(|| statistics::variance(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("streaming", size), &data, |b, data| {
            b.iter(|| {
                let running: RunningStatistics = black_box(data).iter().copied().collect();
                running.variance()
            })
        });
    }

    group.finish();
}

fn bench_percentile(c: &mut Criterion) {
    let data = sample(2_500);
    c.bench_function("percentile_5", |b| {
        b.iter(|| OrderStatistics::new(black_box(&data)).percentile(5.0))
    });
}

criterion_group!(benches, bench_variance, bench_percentile);
criterion_main!(benches);
