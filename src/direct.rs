//! The DIRECT refinement loop.
//!
//! [`Direct`] owns the subdivision pool and the objective value at every pool
//! member's center. Each round selects the potentially-optimal members, trisects
//! each of them, replaces the member by its middle third and appends the left
//! and right thirds. Nothing is ever removed from the pool.
//!
//! The middle third keeps its parent's center, so its cached value is reused
//! whenever the recomputed center is bitwise identical; only genuinely new
//! centers are evaluated. All evaluations of a round happen before any of the
//! round's splits are committed, so a failed evaluation leaves the pool as it
//! was before the round.

use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{DirectError, Result};
use crate::hull::{potentially_optimal, HullPoint};
use crate::hyperrect::Hyperrectangle;
use crate::objective::{Evaluator, Objective};
use crate::trace::TraceWriter;
use crate::trace_write;
use crate::types::{Bounds, CallbackFn, DirectOptions, DirectResult};

/// Driver lifecycle: rounds remain, or the round budget is spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Done,
}

/// One selected rectangle, trisected but not yet committed to the pool.
struct Split {
    idx: usize,
    axis: usize,
    left: Hyperrectangle,
    center: Hyperrectangle,
    right: Hyperrectangle,
    /// The middle third's center differs from the parent's by rounding.
    recenter: bool,
}

/// DIRECT optimizer state: objective, pool, cached values and counters.
pub struct Direct<O: Objective> {
    objective: O,
    pool: Vec<Hyperrectangle>,
    /// `values[i]` is the objective at `pool[i].center()`.
    values: Vec<f64>,
    options: DirectOptions,
    nfev: usize,
    nit: usize,
    callback: Option<Box<CallbackFn>>,
    tracer: Option<Arc<TraceWriter>>,
}

impl<O: Objective> Direct<O> {
    /// Start a run over `bounds`: the pool holds one rectangle spanning it,
    /// whose center is evaluated immediately.
    ///
    /// # Errors
    /// `InvalidArgs`/`InvalidBounds` for a malformed bound, or the evaluation
    /// error if the initial center is rejected by the objective.
    pub fn new(objective: O, bounds: &[(f64, f64)], options: DirectOptions) -> Result<Self> {
        let root = Hyperrectangle::new(bounds.to_vec())?;
        let f = objective.evaluate(&root.center())?;
        Ok(Self {
            objective,
            pool: vec![root],
            values: vec![f],
            options,
            nfev: 1,
            nit: 0,
            callback: None,
            tracer: None,
        })
    }

    /// Observe progress after every round.
    pub fn with_callback(
        mut self,
        callback: impl Fn(&[f64], f64, usize, usize) + Send + Sync + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Record algorithm events (requires the `trace` feature to produce output).
    pub fn with_tracer(mut self, tracer: Arc<TraceWriter>) -> Self {
        self.tracer = Some(tracer);
        self
    }

    pub fn state(&self) -> DriverState {
        if self.nit >= self.options.max_iter {
            DriverState::Done
        } else {
            DriverState::Running
        }
    }

    pub fn pool(&self) -> &[Hyperrectangle] {
        &self.pool
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn options(&self) -> &DirectOptions {
        &self.options
    }

    pub fn nfev(&self) -> usize {
        self.nfev
    }

    pub fn nit(&self) -> usize {
        self.nit
    }

    /// Release the pool.
    pub fn into_pool(self) -> Vec<Hyperrectangle> {
        self.pool
    }

    /// Pool index and value of the lowest center. The first one wins ties.
    pub fn best(&self) -> (usize, f64) {
        let mut pos = 0;
        for (i, v) in self.values.iter().enumerate().skip(1) {
            if v.total_cmp(&self.values[pos]).is_lt() {
                pos = i;
            }
        }
        (pos, self.values[pos])
    }

    /// Summary of the run so far.
    pub fn result(&self) -> DirectResult {
        let (pos, fun) = self.best();
        DirectResult {
            x: self.pool[pos].center(),
            fun,
            nfev: self.nfev,
            nit: self.nit,
            pool_size: self.pool.len(),
        }
    }

    /// The selector's view of the pool.
    pub fn hull_points(&self) -> Vec<HullPoint> {
        self.pool
            .iter()
            .zip(&self.values)
            .map(|(r, &v)| HullPoint::new(r.radius(), v))
            .collect()
    }

    /// Run one round and return the pool indices that were divided, in hull order.
    ///
    /// # Errors
    /// `InvalidArgs` once the round budget is spent; otherwise the first
    /// evaluation failure, in which case the pool is left unchanged.
    pub fn step(&mut self) -> Result<Vec<usize>> {
        if self.state() == DriverState::Done {
            return Err(DirectError::InvalidArgs(format!(
                "all {} rounds already run",
                self.options.max_iter
            )));
        }
        if self.nit == 0 {
            trace_write!(
                self.tracer,
                "TRACE INIT dim={} radius={:.17e} f={:.17e}",
                self.pool[0].dim(),
                self.pool[0].radius(),
                self.values[0]
            );
        }

        let selected = potentially_optimal(&self.hull_points());
        trace_write!(
            self.tracer,
            "TRACE ITER t={} pool={} selected={} minf={:.17e} nfev={}",
            self.nit,
            self.pool.len(),
            selected.len(),
            self.best().1,
            self.nfev
        );

        let mut splits = Vec::with_capacity(selected.len());
        let mut points = Vec::with_capacity(3 * selected.len());
        for (j, &idx) in selected.iter().enumerate() {
            let parent = &self.pool[idx];
            trace_write!(
                self.tracer,
                "TRACE SELECT j={} rect={} radius={:.17e} f={:.17e}",
                j,
                idx,
                parent.radius(),
                self.values[idx]
            );
            let axis = parent.split_axis();
            let (left, center, right) = parent.subdivide();
            let recentered = center.center();
            let recenter = recentered != parent.center();
            if recenter {
                points.push(recentered);
            }
            points.push(left.center());
            points.push(right.center());
            splits.push(Split {
                idx,
                axis,
                left,
                center,
                right,
                recenter,
            });
        }

        let fresh = self.evaluate_batch(&points)?;
        debug_assert_eq!(fresh.len(), points.len());
        self.nfev += fresh.len();

        // `fresh` follows `points`: an optional recentered value, then left, then right.
        let mut next = 0;
        for split in splits {
            if split.recenter {
                self.values[split.idx] = fresh[next];
                next += 1;
            }
            self.pool[split.idx] = split.center;
            trace_write!(
                self.tracer,
                "TRACE DIVIDE rect={} axis={} left={} right={}",
                split.idx,
                split.axis,
                self.pool.len(),
                self.pool.len() + 1
            );
            self.pool.push(split.left);
            self.pool.push(split.right);
            self.values.extend_from_slice(&fresh[next..next + 2]);
            next += 2;
        }
        self.nit += 1;

        let (minpos, minf) = self.best();
        trace_write!(
            self.tracer,
            "TRACE ENDITER t={} minf={:.17e} minpos={} nfev={}",
            self.nit - 1,
            minf,
            minpos,
            self.nfev
        );
        log_debug!(
            round = self.nit,
            selected = selected.len(),
            pool = self.pool.len(),
            minf,
            "round complete"
        );
        if let Some(ref cb) = self.callback {
            cb(&self.pool[minpos].center(), minf, self.nfev, self.nit);
        }

        Ok(selected)
    }

    /// Run the remaining rounds and summarize.
    pub fn minimize(&mut self) -> Result<DirectResult> {
        log_info!(
            dim = self.pool[0].dim(),
            rounds = self.options.max_iter,
            parallel = self.options.parallel,
            "starting DIRECT"
        );
        while self.state() == DriverState::Running {
            self.step()?;
        }
        let result = self.result();
        log_info!(
            fun = result.fun,
            nfev = result.nfev,
            pool = result.pool_size,
            "DIRECT finished"
        );
        Ok(result)
    }

    /// Evaluate `points` in order, in parallel when the options allow it.
    fn evaluate_batch(&self, points: &[Vec<f64>]) -> Result<Vec<f64>> {
        let objective = &self.objective;
        if self.options.parallel && points.len() >= self.options.min_parallel_evals.max(1) {
            points.par_iter().map(|x| objective.evaluate(x)).collect()
        } else {
            points.iter().map(|x| objective.evaluate(x)).collect()
        }
    }
}

/// Run `iterations` rounds of DIRECT over `initial_bound` and return the pool.
///
/// The best point is the center of the pool member with the lowest objective
/// value; callers derive it themselves (or use [`Direct::best`]).
///
/// # Errors
/// A malformed `initial_bound`, or any evaluation failure.
pub fn run<O: Objective + ?Sized>(
    objective: &O,
    initial_bound: &[(f64, f64)],
    iterations: usize,
) -> Result<Vec<Hyperrectangle>> {
    let options = DirectOptions {
        max_iter: iterations,
        ..Default::default()
    };
    let mut direct = Direct::new(objective, initial_bound, options)?;
    while direct.state() == DriverState::Running {
        direct.step()?;
    }
    Ok(direct.into_pool())
}

// ──────────────────────────────────────────────────────────────────────────────
// Builder
// ──────────────────────────────────────────────────────────────────────────────

/// Convenience front end: wrap a closure over its bounds and minimize it.
///
/// ```
/// use ldirect::DirectBuilder;
///
/// let result = DirectBuilder::new(|x: &[f64]| (x[0] - 1.0).powi(2), vec![(-5.0, 5.0)])
///     .max_iter(20)
///     .minimize()
///     .unwrap();
/// assert!((result.x[0] - 1.0).abs() < 1e-3);
/// ```
pub struct DirectBuilder<F> {
    func: F,
    bounds: Bounds,
    options: DirectOptions,
    callback: Option<Box<CallbackFn>>,
}

impl<F> DirectBuilder<F>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    pub fn new(func: F, bounds: Bounds) -> Self {
        Self {
            func,
            bounds,
            options: DirectOptions::default(),
            callback: None,
        }
    }

    /// Replace all options at once.
    pub fn options(mut self, options: DirectOptions) -> Self {
        self.options = options;
        self
    }

    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.options.max_iter = max_iter;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.options.parallel = parallel;
        self
    }

    pub fn min_parallel_evals(mut self, min_parallel_evals: usize) -> Self {
        self.options.min_parallel_evals = min_parallel_evals;
        self
    }

    pub fn callback(
        mut self,
        callback: impl Fn(&[f64], f64, usize, usize) + Send + Sync + 'static,
    ) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn minimize(self) -> Result<DirectResult> {
        let evaluator = Evaluator::new(self.func, self.bounds.clone())?;
        let mut direct = Direct::new(evaluator, &self.bounds, self.options)?;
        direct.callback = self.callback;
        direct.minimize()
    }
}
