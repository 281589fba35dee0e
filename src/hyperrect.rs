//! Axis-aligned hyperrectangles and their trisection.
//!
//! A rectangle is stored as its per-dimension `(low, high)` bounds. Its size
//! measure (radius) and representative point (center) are derived on demand.
//!
//! Widths can exceed `f64::MAX` for finite bounds such as `(-1e308, 1e308)`.
//! Centers, half-widths and thirds fall back to halving or dividing each end
//! first when the direct form overflows, so every derived point stays finite
//! and inside the rectangle. Ordinary bounds take the direct form.

use serde::{Deserialize, Serialize};

use crate::error::{validate_bounds, DirectError, Result};
use crate::types::Bounds;

/// An axis-aligned box in n-dimensional space.
///
/// Equality is element-wise equality of the bound sequences. Deserialization
/// goes through [`Hyperrectangle::new`], so malformed bounds are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHyperrectangle")]
pub struct Hyperrectangle {
    bounds: Bounds,
}

/// Unchecked wire form of [`Hyperrectangle`].
#[derive(Deserialize)]
struct RawHyperrectangle {
    bounds: Bounds,
}

impl TryFrom<RawHyperrectangle> for Hyperrectangle {
    type Error = DirectError;

    fn try_from(raw: RawHyperrectangle) -> Result<Self> {
        Self::new(raw.bounds)
    }
}

impl TryFrom<Bounds> for Hyperrectangle {
    type Error = DirectError;

    fn try_from(bounds: Bounds) -> Result<Self> {
        Self::new(bounds)
    }
}

/// Whether `point` has one coordinate per bound and lies inside (inclusive).
///
/// NaN coordinates are never inside.
pub(crate) fn within(bounds: &[(f64, f64)], point: &[f64]) -> bool {
    point.len() == bounds.len()
        && point
            .iter()
            .zip(bounds)
            .all(|(&x, &(lo, hi))| lo <= x && x <= hi)
}

#[inline]
fn half_width(lo: f64, hi: f64) -> f64 {
    let w = hi - lo;
    if w.is_finite() {
        w * 0.5
    } else {
        hi * 0.5 - lo * 0.5
    }
}

#[inline]
fn midpoint(lo: f64, hi: f64) -> f64 {
    let s = lo + hi;
    if s.is_finite() {
        s * 0.5
    } else {
        lo * 0.5 + hi * 0.5
    }
}

#[inline]
fn third(lo: f64, hi: f64) -> f64 {
    let w = hi - lo;
    if w.is_finite() {
        w / 3.0
    } else {
        hi / 3.0 - lo / 3.0
    }
}

impl Hyperrectangle {
    /// Create a rectangle spanning `bounds`.
    ///
    /// # Errors
    /// `InvalidArgs` for an empty bound sequence, `InvalidBounds` for a
    /// dimension with `low > high` or a non-finite end.
    pub fn new(bounds: Bounds) -> Result<Self> {
        validate_bounds(&bounds)?;
        Ok(Self { bounds })
    }

    /// Number of dimensions.
    #[inline]
    pub fn dim(&self) -> usize {
        self.bounds.len()
    }

    /// The `(low, high)` pair of every dimension.
    #[inline]
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Width `high - low` along `axis`. Infinite when the width overflows.
    #[inline]
    pub fn extent(&self, axis: usize) -> f64 {
        let (lo, hi) = self.bounds[axis];
        hi - lo
    }

    /// Half of the width along `axis`; finite for any valid rectangle.
    #[inline]
    pub fn half_extent(&self, axis: usize) -> f64 {
        let (lo, hi) = self.bounds[axis];
        half_width(lo, hi)
    }

    /// Euclidean distance from the centroid to any corner.
    pub fn radius(&self) -> f64 {
        let sum: f64 = (0..self.dim())
            .map(|d| {
                let half = self.half_extent(d);
                half * half
            })
            .sum();
        if sum.is_finite() {
            return sum.sqrt();
        }
        // Squares overflowed: scale by the largest half-width.
        let scale = (0..self.dim()).map(|d| self.half_extent(d)).fold(0.0, f64::max);
        let scaled: f64 = (0..self.dim())
            .map(|d| {
                let t = self.half_extent(d) / scale;
                t * t
            })
            .sum();
        scale * scaled.sqrt()
    }

    /// Per-dimension midpoint; the point at which the objective is evaluated.
    pub fn center(&self) -> Vec<f64> {
        self.bounds.iter().map(|&(lo, hi)| midpoint(lo, hi)).collect()
    }

    /// Whether `point` lies inside the rectangle (inclusive on both ends).
    pub fn contains(&self, point: &[f64]) -> bool {
        within(&self.bounds, point)
    }

    /// Axis of maximum extent. Ties go to the lowest index.
    pub fn split_axis(&self) -> usize {
        let mut imax = 0;
        let mut wmax = self.half_extent(0);
        for i in 1..self.dim() {
            let w = self.half_extent(i);
            if w > wmax {
                wmax = w;
                imax = i;
            }
        }
        imax
    }

    /// Trisect along [`split_axis`](Self::split_axis).
    ///
    /// Returns `(left, center, right)`. The center piece keeps the middle third,
    /// so its center matches this rectangle's center up to rounding. Shared boundaries
    /// are the same floats on both sides, so the pieces tile the original extent
    /// exactly. Bounds on every other axis are copied unchanged.
    pub fn subdivide(&self) -> (Hyperrectangle, Hyperrectangle, Hyperrectangle) {
        let axis = self.split_axis();
        let (lo, hi) = self.bounds[axis];
        let gap = third(lo, hi);
        let mid_lo = lo + gap;
        let mid_hi = hi - gap;

        let mut left = self.clone();
        let mut center = self.clone();
        let mut right = self.clone();
        left.bounds[axis] = (lo, mid_lo);
        center.bounds[axis] = (mid_lo, mid_hi);
        right.bounds[axis] = (mid_hi, hi);

        (left, center, right)
    }
}

impl From<Hyperrectangle> for Bounds {
    fn from(rect: Hyperrectangle) -> Self {
        rect.bounds
    }
}
