//! Core type definitions: bounds, callbacks, options, and result structures.

use std::fmt;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────────────────────────────────────
// Type Aliases
// ──────────────────────────────────────────────────────────────────────────────

/// Bounds for each dimension: `Vec<(lower, upper)>`.
pub type Bounds = Vec<(f64, f64)>;

/// Progress callback, invoked after each completed round.
///
/// - `x`: current best point
/// - `fun`: current best function value
/// - `nfev`: total function evaluations so far
/// - `nit`: total rounds so far
///
/// The callback only observes; the round count is the sole termination control.
pub type CallbackFn = dyn Fn(&[f64], f64, usize, usize) + Send + Sync;

// ──────────────────────────────────────────────────────────────────────────────
// Options
// ──────────────────────────────────────────────────────────────────────────────

/// Default number of select/subdivide rounds.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Configuration options for the DIRECT optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectOptions {
    /// Number of select/subdivide rounds to run. 0 leaves the pool at its
    /// single initial rectangle.
    pub max_iter: usize,

    /// Evaluate the new centers of a round in parallel using rayon.
    /// Values are collected in order, so results are identical to the serial path.
    pub parallel: bool,

    /// Minimum number of new centers in a round required to use the parallel
    /// path. Below this the serial path is used even if `parallel` is `true`,
    /// avoiding thread-pool overhead for early rounds that only split one or
    /// two rectangles.
    ///
    /// Set to 1 to always parallelize when `parallel` is `true`.
    /// Default: 4.
    pub min_parallel_evals: usize,
}

impl Default for DirectOptions {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            parallel: false,
            min_parallel_evals: 4,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────────────────────────────────────

/// Result of a DIRECT optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectResult {
    /// Best point found: the center of the pool member with the lowest value.
    pub x: Vec<f64>,

    /// Best function value found.
    pub fun: f64,

    /// Total number of function evaluations.
    pub nfev: usize,

    /// Total number of rounds run.
    pub nit: usize,

    /// Number of hyperrectangles in the final pool.
    pub pool_size: usize,
}

impl fmt::Display for DirectResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DirectResult {{")?;
        writeln!(f, "  fun: {:.15e}", self.fun)?;
        write!(f, "  x: [")?;
        for (i, xi) in self.x.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.15e}", xi)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "  nfev: {}", self.nfev)?;
        writeln!(f, "  nit: {}", self.nit)?;
        writeln!(f, "  pool_size: {}", self.pool_size)?;
        write!(f, "}}")
    }
}
