//! Criterion benchmarks for u-tsp heuristics.
//!
//! Uses uniformly random Euclidean instances to measure construction
//! and improvement cost as the city count grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tsp::construct::{greedy_edge, nearest_neighbor, random_insertion};
use u_tsp::hill::{HillClimbConfig, HillClimbRunner};
use u_tsp::problem::{Instance, Point};
use u_tsp::random::create_rng;
use u_tsp::sa::{SaConfig, SaRunner};
use u_tsp::tabu::{TabuConfig, TabuRunner};
use u_tsp::tour::{delta_flip_cost, delta_swap_cost, Tour};

// ===========================================================================
// Instances
// ===========================================================================

fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = create_rng(seed);
    let points = (0..n)
        .map(|_| Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    Instance::euclidean(points).expect("random instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_move_deltas(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_deltas");
    let instance = random_instance(1000, 1);
    let tour = Tour::random(1000, &mut create_rng(2));

    group.bench_function("swap", |b| {
        b.iter(|| black_box(delta_swap_cost(&instance, &tour, black_box(17), black_box(640))))
    });
    group.bench_function("flip", |b| {
        b.iter(|| black_box(delta_flip_cost(&instance, &tour, black_box(17), black_box(640))))
    });
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.sample_size(10);

    for &n in &[100, 500] {
        let instance = random_instance(n, 3);
        group.bench_with_input(BenchmarkId::new("nearest_neighbor", n), &instance, |b, i| {
            b.iter(|| black_box(nearest_neighbor(black_box(i), 0)))
        });
        group.bench_with_input(BenchmarkId::new("greedy_edge", n), &instance, |b, i| {
            b.iter(|| black_box(greedy_edge(black_box(i))))
        });
        group.bench_with_input(BenchmarkId::new("random_insertion", n), &instance, |b, i| {
            let mut rng = create_rng(4);
            b.iter(|| black_box(random_insertion(black_box(i), &mut rng)))
        });
    }
    group.finish();
}

fn bench_hill_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb");
    group.sample_size(10);

    for &n in &[50, 200] {
        let instance = random_instance(n, 5);
        let start = Tour::random(n, &mut create_rng(6));
        let config = HillClimbConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, i| {
            b.iter(|| {
                let result = HillClimbRunner::run(black_box(i), start.clone(), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &n in &[50, 200] {
        let instance = random_instance(n, 7);
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.1)
            .with_epoch_length(n * 10)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, i| {
            b.iter(|| {
                let result = SaRunner::run(black_box(i), Tour::identity(n), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for &n in &[50, 100] {
        let instance = random_instance(n, 8);
        let config = TabuConfig::default()
            .with_max_iterations(100)
            .with_tabu_tenure(7);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, i| {
            b.iter(|| {
                let result = TabuRunner::run(black_box(i), Tour::identity(n), &config);
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_move_deltas,
    bench_construction,
    bench_hill_climb,
    bench_sa,
    bench_tabu
);
criterion_main!(benches);
