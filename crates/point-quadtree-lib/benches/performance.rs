//! Performance benchmarks for point-quadtree-lib
//!
//! Run with: cargo bench --package point-quadtree-lib

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use point_quadtree_lib::{Boundary, Config, Point, Quadtree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate `n` points uniformly spread over [0, 100] x [0, 100]
fn generate_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n as u32)
        .map(|id| Point::new(id, rng.random_range(0..=100), rng.random_range(0..=100)))
        .collect()
}

fn world() -> Boundary {
    Boundary::new(50.0, 50.0, 50.0, 50.0).unwrap()
}

fn build_tree(points: &[Point], config: Config) -> Quadtree {
    let mut tree = Quadtree::with_config(world(), config).unwrap();
    for point in points {
        tree.insert(*point).unwrap();
    }
    tree
}

// ============================================================================
// Core Benchmarks - Key performance indicators
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for n in [1_000, 10_000, 50_000] {
        let points = generate_points(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, points| {
            b.iter(|| build_tree(points, Config::default()));
        });
    }

    group.finish();
}

fn bench_range_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");

    let points = generate_points(50_000, 42);
    let tree = build_tree(&points, Config::default());

    // Same window as the timing harness in the binary
    let quarter = Boundary::new(50.0, 50.0, 25.0, 25.0).unwrap();
    group.bench_function("quarter_window_50k", |b| {
        let mut found = Vec::with_capacity(points.len());
        b.iter(|| {
            found.clear();
            tree.range_query(&quarter, &mut found);
            found.len()
        });
    });

    let small = Boundary::new(10.0, 10.0, 2.0, 2.0).unwrap();
    group.bench_function("small_window_50k", |b| {
        b.iter(|| tree.query(&small));
    });

    group.bench_function("linear_scan_quarter_50k", |b| {
        b.iter(|| {
            points
                .iter()
                .filter(|p| quarter.contains(p))
                .count()
        });
    });

    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("capacity");
    group.sample_size(20);

    let points = generate_points(20_000, 7);
    let window = Boundary::new(50.0, 50.0, 25.0, 25.0).unwrap();

    for capacity in [1, 4, 16, 64] {
        let tree = build_tree(&points, Config::with_capacity(capacity));
        group.bench_with_input(
            BenchmarkId::new("query_20k", capacity),
            &tree,
            |b, tree| {
                b.iter(|| tree.query(&window));
            },
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let points = generate_points(50_000, 42);
    let tree = build_tree(&points, Config::default());

    group.bench_function("hit_50k", |b| {
        let mut index = 0;
        b.iter(|| {
            let point = points[index % points.len()];
            index += 1;
            tree.search(point.x, point.y)
        });
    });

    group.bench_function("miss_outside_50k", |b| {
        b.iter(|| tree.search(500, 500));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_insert,
    bench_range_query,
    bench_capacity,
    bench_search,
);

criterion_main!(benches);
