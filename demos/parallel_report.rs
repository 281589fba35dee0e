//! Serial vs parallel timing on deliberately expensive objectives.
//!
//! Run with: cargo run --example parallel_report --release
//!
//! Limit workers: RAYON_NUM_THREADS=4 cargo run --example parallel_report --release

use std::time::{Duration, Instant};

use ldirect::DirectBuilder;

/// Rastrigin plus 10,000 sin/cos iterations per evaluation.
fn expensive_rastrigin(x: &[f64]) -> f64 {
    let mut extra_work = 0.0;
    for _ in 0..10_000 {
        for xi in x.iter() {
            extra_work += (xi.sin() * xi.cos()).abs();
        }
    }

    let n = x.len() as f64;
    let result = 10.0 * n
        + x.iter()
            .map(|&xi| xi * xi - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>();

    result + extra_work * 1e-20
}

fn timed(bounds: Vec<(f64, f64)>, rounds: usize, parallel: bool) -> (f64, usize, Duration) {
    let start = Instant::now();
    let result = DirectBuilder::new(expensive_rastrigin, bounds)
        .max_iter(rounds)
        .parallel(parallel)
        .minimize()
        .unwrap_or_else(|e| panic!("rastrigin: {e}"));
    (result.fun, result.nfev, start.elapsed())
}

fn main() {
    println!("=== ldirect parallel report ===\n");
    let num_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    println!("Available CPU threads: {num_cpus}\n");

    for &(dim, rounds) in &[(2usize, 30usize), (4, 30), (6, 20)] {
        println!("--- Rastrigin ({dim}D, {rounds} rounds) ---");
        let (f_s, n_s, t_s) = timed(vec![(-5.12, 5.12); dim], rounds, false);
        println!("  Serial   f={f_s:.6e}  nfev={n_s:<6}  time={:.3}s", t_s.as_secs_f64());
        let (f_p, n_p, t_p) = timed(vec![(-5.12, 5.12); dim], rounds, true);
        println!("  Parallel f={f_p:.6e}  nfev={n_p:<6}  time={:.3}s", t_p.as_secs_f64());
        assert_eq!(f_s.to_bits(), f_p.to_bits(), "parallel run diverged");
        println!("  Speedup: {:.2}x\n", t_s.as_secs_f64() / t_p.as_secs_f64());
    }
}
