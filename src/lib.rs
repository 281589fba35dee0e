//! # ldirect: DIRECT Global Optimization in Rust
//!
//! An implementation of the DIRECT (DIviding RECTangles) global optimization
//! algorithm: minimize a black-box, possibly non-convex function over a box by
//! repeatedly trisecting the hyperrectangles that look most promising.
//!
//! ## Overview
//!
//! Every round:
//!
//! 1. each pool member is reduced to a point `(radius, f(center))`;
//! 2. the members on the lower convex hull of those points are *potentially
//!    optimal* ([`hull::potentially_optimal`]);
//! 3. each of them is trisected along its longest side
//!    ([`Hyperrectangle::subdivide`]). The middle third replaces it in the
//!    pool and the outer thirds are appended.
//!
//! The pool only grows. The number of rounds is the sole termination control.
//!
//! ```
//! use ldirect::{run, Evaluator};
//!
//! let eval = Evaluator::new(|x: &[f64]| x[0] * x[0], vec![(-5.12, 5.12)]).unwrap();
//! let pool = run(&eval, &[(-5.12, 5.12)], 1).unwrap();
//! assert_eq!(pool.len(), 3);
//! ```
//!
//! ## Feature flags
//!
//! | Flag | What it enables |
//! |------|-----------------|
//! | `trace` | Tagged per-event lines written to a [`trace::TraceWriter`] |
//! | `tracing` | Structured log events via the `tracing` crate |
//!
//! ## References
//!
//! - Jones, D.R., Perttunen, C.D. & Stuckman, B.E. "Lipschitzian optimization
//!   without the Lipschitz constant." J Optim Theory Appl 79, 157–181 (1993).

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! log_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod direct;
pub mod error;
pub mod hull;
pub mod hyperrect;
pub mod objective;
pub mod trace;
pub mod types;

// Re-export main types
pub use direct::{run, Direct, DirectBuilder, DriverState};
pub use error::{DirectError, Result};
pub use hull::{potentially_optimal, select, HullPoint};
pub use hyperrect::Hyperrectangle;
pub use objective::{Evaluator, Objective};
pub use types::{Bounds, CallbackFn, DirectOptions, DirectResult, DEFAULT_MAX_ITER};
