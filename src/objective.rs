//! Objective evaluation.
//!
//! The optimizer only needs one capability from an objective: evaluate a point
//! or fail. [`Objective`] is that seam. [`Evaluator`] is the usual
//! implementation, wrapping a plain function together with the domain it is
//! defined on and rejecting points of the wrong length or outside the domain
//! before the function ever sees them.

use crate::error::{validate_bounds, DirectError, Result};
use crate::hyperrect::within;
use crate::types::Bounds;

/// Something that can be minimized.
///
/// `Sync` so that new centers can be evaluated in parallel.
pub trait Objective: Sync {
    /// Evaluate the objective at `point`.
    ///
    /// # Errors
    /// `DirectError::Dimension` or `DirectError::Domain` when `point` is not a
    /// valid input. Implementations must not mask these.
    fn evaluate(&self, point: &[f64]) -> Result<f64>;
}

impl<O: Objective + ?Sized> Objective for &O {
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        (**self).evaluate(point)
    }
}

/// A function `R^n -> R` bound to the domain it accepts.
pub struct Evaluator<F> {
    func: F,
    domain: Bounds,
}

impl<F> Evaluator<F>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    /// Wrap `func` over `domain`.
    ///
    /// # Errors
    /// `InvalidArgs` for an empty domain, `InvalidBounds` if some dimension has
    /// `low > high` or a non-finite end.
    pub fn new(func: F, domain: Bounds) -> Result<Self> {
        validate_bounds(&domain)?;
        Ok(Self { func, domain })
    }

    /// The domain bound every evaluation point is checked against.
    pub fn domain(&self) -> &[(f64, f64)] {
        &self.domain
    }

    /// Number of dimensions of the domain.
    pub fn dim(&self) -> usize {
        self.domain.len()
    }
}

impl<F> Objective for Evaluator<F>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        if point.len() != self.domain.len() {
            return Err(DirectError::Dimension {
                expected: self.domain.len(),
                actual: point.len(),
            });
        }
        if !within(&self.domain, point) {
            return Err(DirectError::Domain {
                point: point.to_vec(),
                bounds: self.domain.clone(),
            });
        }
        Ok((self.func)(point))
    }
}
