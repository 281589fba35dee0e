//! 4-D Rastrigin on [-5.12, 5.12]^4 with 100 rounds, printing the best point.
//!
//! Run with: cargo run --example rastrigin --release

use ldirect::{Direct, DirectOptions, Evaluator};

fn rastrigin(x: &[f64]) -> f64 {
    let a = 10.0;
    let n = x.len() as f64;
    a * n
        + x.iter()
            .map(|&xi| xi * xi - a * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

fn main() -> ldirect::Result<()> {
    let bounds = vec![(-5.12, 5.12); 4];
    let eval = Evaluator::new(rastrigin, bounds.clone())?;
    let mut solver = Direct::new(&eval, &bounds, DirectOptions::default())?;
    let result = solver.minimize()?;

    println!("=== DIRECT on 4-D Rastrigin ===");
    println!("{result}");
    Ok(())
}
