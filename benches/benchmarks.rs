//! Criterion benchmarks for ldirect: whole runs and the hull selector alone.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ldirect::{potentially_optimal, Direct, DirectOptions, Evaluator, HullPoint};

fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n + x.iter().map(|&xi| xi * xi - 10.0 * (2.0 * std::f64::consts::PI * xi).cos()).sum::<f64>()
}

fn run_rounds(func: fn(&[f64]) -> f64, dim: usize, rounds: usize) -> f64 {
    let bounds = vec![(-5.12, 5.12); dim];
    let eval = Evaluator::new(func, bounds.clone()).unwrap();
    let opts = DirectOptions {
        max_iter: rounds,
        ..Default::default()
    };
    let mut solver = Direct::new(&eval, &bounds, opts).unwrap();
    solver.minimize().unwrap().fun
}

fn bench_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for &dim in &[2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("sphere_50", dim), &dim, |b, &dim| {
            b.iter(|| run_rounds(sphere, black_box(dim), 50))
        });
        group.bench_with_input(BenchmarkId::new("rastrigin_50", dim), &dim, |b, &dim| {
            b.iter(|| run_rounds(rastrigin, black_box(dim), 50))
        });
    }
    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    // A pool-shaped cloud: few distinct radii, many values per radius.
    let points: Vec<HullPoint> = (0..20_000)
        .map(|i| {
            let level = (i % 12) as i32;
            let radius = 5.0 / 3.0_f64.powi(level);
            let value = ((i as f64) * 0.618_033_988_75).fract() * 10.0 + radius;
            HullPoint::new(radius, value)
        })
        .collect();
    c.bench_function("potentially_optimal_20k", |b| {
        b.iter(|| potentially_optimal(black_box(&points)))
    });
}

criterion_group!(benches, bench_runs, bench_hull);
criterion_main!(benches);
