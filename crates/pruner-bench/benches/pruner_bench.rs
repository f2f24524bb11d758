//! Benchmarks for the pruner crates.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pruner_catalog::{common_viewports, priority_viewports, secondary_viewports, DEFAULT_MIN_TILE_SIZE, DEFAULT_SOURCE_DIMS};
use pruner_core::TileSize;
use pruner_opt::{candidate_tiles, divisors, optimal_tile_size};
use pruner_waste::tiled_waste_stats;

/// Benchmark divisor enumeration across typical catalog dimensions.
fn bench_divisors(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisors");

    for n in [360u32, 1080, 1366, 1920].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| divisors(black_box(n)))
        });
    }

    group.finish();
}

/// Benchmark catalog-wide waste aggregation for one candidate.
fn bench_waste(c: &mut Criterion) {
    let mut group = c.benchmark_group("waste");
    let viewports = common_viewports();

    group.throughput(Throughput::Elements(viewports.len() as u64));
    group.bench_function("tiled_stats", |b| {
        b.iter(|| tiled_waste_stats(black_box(&viewports), TileSize::new(131, 156)))
    });

    group.finish();
}

/// Benchmark candidate generation and the full search.
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let priority = priority_viewports();
    let secondary = secondary_viewports();
    let common = common_viewports();

    group.bench_function("candidates", |b| {
        b.iter(|| candidate_tiles(black_box(&common), DEFAULT_MIN_TILE_SIZE))
    });

    group.bench_function("optimal_tile_size", |b| {
        b.iter(|| {
            optimal_tile_size(
                DEFAULT_SOURCE_DIMS,
                black_box(&priority),
                black_box(&secondary),
                DEFAULT_MIN_TILE_SIZE,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_divisors, bench_waste, bench_search);
criterion_main!(benches);
