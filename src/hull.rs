//! Potentially-optimal rectangle selection.
//!
//! Each pool member maps to a point `(radius, value)`. The rectangles worth
//! dividing next are the ones on the lower convex hull of that point set: for
//! each of them some rate-of-change constant exists under which no other
//! rectangle promises a lower value.
//!
//! The hull is built with Andrew's monotone chain, lower half only:
//!
//! 1. order points by radius, breaking radius ties by value (stable two-pass sort);
//! 2. scan left to right, popping the stack top while the last two stack points
//!    and the candidate fail to make a strict left turn;
//! 3. drop a trailing vertical segment at the maximum radius;
//! 4. strip the leading stretch where the hull still descends.
//!
//! After steps 3 and 4 the hull values are non-decreasing in radius, so no
//! returned rectangle is beaten by a larger-or-equal rectangle with a lower value.

use crate::error::Result;
use crate::hyperrect::Hyperrectangle;
use crate::objective::Objective;

/// A pool member seen by the selector: its size and its objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullPoint {
    pub radius: f64,
    pub value: f64,
}

impl HullPoint {
    pub fn new(radius: f64, value: f64) -> Self {
        Self { radius, value }
    }
}

/// 2-D orientation of `a -> b -> c` with radius as x and value as y.
///
/// Positive for a counter-clockwise (left) turn, zero when collinear.
#[inline]
pub fn cross(a: &HullPoint, b: &HullPoint, c: &HullPoint) -> f64 {
    (b.radius - a.radius) * (c.value - a.value) - (b.value - a.value) * (c.radius - a.radius)
}

/// Indices of `points` on the lower convex hull, ordered by increasing radius.
///
/// Indices refer to positions in `points`; the slice is not reordered. Ties in
/// both radius and value resolve deterministically by position.
pub fn potentially_optimal(points: &[HullPoint]) -> Vec<usize> {
    // Value first, then a stable sort by radius keeps equal radii value-ordered.
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a].value.total_cmp(&points[b].value));
    order.sort_by(|&a, &b| points[a].radius.total_cmp(&points[b].radius));

    let mut stack: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while stack.len() >= 2 {
            let t2 = &points[stack[stack.len() - 2]];
            let t1 = &points[stack[stack.len() - 1]];
            if cross(t2, t1, &points[i]) > 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(i);
    }

    // Above the lowest point at the largest radius.
    while stack.len() > 1
        && points[stack[stack.len() - 1]].radius == points[stack[stack.len() - 2]].radius
    {
        stack.pop();
    }

    let mut start = 0;
    while stack.len() - start > 1 && points[stack[start]].value > points[stack[start + 1]].value {
        start += 1;
    }
    stack.drain(..start);

    stack
}

/// Evaluate every center in `pool` and return its potentially-optimal indices.
///
/// # Errors
/// The first evaluation failure, unchanged.
pub fn select<O: Objective + ?Sized>(objective: &O, pool: &[Hyperrectangle]) -> Result<Vec<usize>> {
    let points = pool
        .iter()
        .map(|r| Ok(HullPoint::new(r.radius(), objective.evaluate(&r.center())?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(potentially_optimal(&points))
}
