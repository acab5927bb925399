//! Execution engine for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module applies the single-point fit (select neighbors, weight them,
//! fit a line, evaluate it) across every target of a smoothing call and
//! collects the estimates.
//!
//! ## Design notes
//!
//! * **Independence**: each estimate depends only on the input series and its
//!   own target, never on another estimate. Sequential and parallel passes
//!   therefore produce identical results.
//! * **Two conventions**: targets are either the series' own points (the line
//!   is fitted around and evaluated at each point) or an external list of
//!   abscissae (neighbors are chosen around each abscissa).
//! * **Degeneracy**: non-finite estimates are recorded and handled after the
//!   pass according to the configured [`DegeneracyPolicy`].
//!
//! ## Invariants
//!
//! * The output has one estimate per target, in target order.
//! * Structural errors abort the whole pass; no partial output is returned.
//!
//! ## Non-goals
//!
//! * This module does not validate builder configuration (handled by `api`).

// Feature-gated imports
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::neighbors::{select_neighbors, select_neighbors_around};
use crate::algorithms::regression::LinearFit;
use crate::engine::validator::Validator;
use crate::math::kernel::tricube_weights;
use crate::primitives::errors::TrendError;
use crate::primitives::point::{NeighborSet, Point, Series};

// ============================================================================
// Configuration
// ============================================================================

/// How many neighbors take part in each local fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bandwidth<T> {
    /// A fixed neighbor count.
    Neighbors(usize),

    /// A fraction of the series length, rounded to the nearest count.
    Fraction(T),
}

impl<T: Float> Bandwidth<T> {
    /// Resolve to a neighbor count for a series of `n` points.
    pub fn neighbor_count(&self, n: usize) -> usize {
        match *self {
            Bandwidth::Neighbors(count) => count,
            Bandwidth::Fraction(fraction) => T::from(n)
                .map(|len| (fraction * len).round())
                .and_then(|count| count.to_usize())
                .unwrap_or(0),
        }
    }
}

/// Handling of NaN/Inf estimates, from zero spread in `x` or non-finite inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneracyPolicy {
    /// Return non-finite estimates unchanged (default).
    #[default]
    Propagate,

    /// Return them unchanged and emit a warning for each.
    Warn,

    /// Fail the call at the first non-finite estimate.
    Strict,
}

/// Configuration for one smoothing pass.
#[derive(Debug, Clone, Copy)]
pub struct LoessConfig<T> {
    /// Neighbor count or fraction.
    pub bandwidth: Bandwidth<T>,

    /// Degenerate-estimate handling.
    pub degeneracy: DegeneracyPolicy,

    /// Evaluate targets in parallel when the `parallel` feature is enabled.
    pub parallel: bool,
}

/// Where the local lines are evaluated.
#[derive(Debug, Clone, Copy)]
pub enum Targets<'a, T> {
    /// At each point of the series itself.
    Series,

    /// At caller-supplied abscissae.
    Points(&'a [T]),
}

/// Output from a smoothing pass.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// Evaluation abscissae.
    pub x: Vec<T>,

    /// Smoothed estimates, one per abscissa.
    pub smoothed: Vec<T>,

    /// Neighbor count used for every fit.
    pub neighbor_count: usize,

    /// Indices of non-finite estimates.
    pub degenerate: Vec<usize>,
}

// ============================================================================
// Single-Point Fits
// ============================================================================

/// Local fit around the series point at `index`, evaluated at its `x`.
pub fn fit_point<T: Float>(series: &Series<T>, index: usize, count: usize) -> Result<T, TrendError> {
    let neighbors = select_neighbors(series, index, count)?;
    let fit = fit_neighbors(&neighbors)?;
    Ok(fit.predict(series[index].x))
}

/// Local fit around an arbitrary abscissa, evaluated there.
pub fn fit_at<T: Float>(series: &Series<T>, x: T, count: usize) -> Result<T, TrendError> {
    let neighbors = select_neighbors_around(series, x, count)?;
    let fit = fit_neighbors(&neighbors)?;
    Ok(fit.predict(x))
}

#[inline]
fn fit_neighbors<T: Float>(neighbors: &NeighborSet<T>) -> Result<LinearFit<T>, TrendError> {
    let weights = tricube_weights(neighbors);
    LinearFit::fit_wls(neighbors, &weights)
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for LOESS smoothing passes.
pub struct LoessExecutor;

impl LoessExecutor {
    /// Run a full pass over `targets`.
    pub fn run<T>(
        series: &Series<T>,
        targets: Targets<'_, T>,
        config: &LoessConfig<T>,
    ) -> Result<ExecutorOutput<T>, TrendError>
    where
        T: Float + Send + Sync,
    {
        let n = series.len();
        let count = config.bandwidth.neighbor_count(n);
        Validator::validate_capacity(count, n)?;

        let x = match targets {
            Targets::Series => series.xs(),
            Targets::Points(points) => points.to_vec(),
        };

        debug!(
            points = n,
            targets = x.len(),
            neighbor_count = count,
            parallel = config.parallel,
            "running loess pass"
        );

        let smoothed = match targets {
            Targets::Series => Self::pass(n, config.parallel, |i| fit_point(series, i, count))?,
            Targets::Points(points) => {
                Self::pass(points.len(), config.parallel, |i| fit_at(series, points[i], count))?
            }
        };

        let degenerate: Vec<usize> = smoothed
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| i)
            .collect();

        match config.degeneracy {
            DegeneracyPolicy::Propagate => {}
            DegeneracyPolicy::Warn => {
                for &index in &degenerate {
                    warn!(index, "non-finite local estimate");
                }
            }
            DegeneracyPolicy::Strict => {
                if let Some(&index) = degenerate.first() {
                    return Err(TrendError::Degenerate { index });
                }
            }
        }

        Ok(ExecutorOutput {
            x,
            smoothed,
            neighbor_count: count,
            degenerate,
        })
    }

    #[cfg(feature = "parallel")]
    fn pass<T, F>(len: usize, parallel: bool, fit: F) -> Result<Vec<T>, TrendError>
    where
        T: Float + Send,
        F: Fn(usize) -> Result<T, TrendError> + Sync + Send,
    {
        if parallel {
            (0..len).into_par_iter().map(&fit).collect()
        } else {
            (0..len).map(fit).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn pass<T, F>(len: usize, _parallel: bool, fit: F) -> Result<Vec<T>, TrendError>
    where
        T: Float,
        F: Fn(usize) -> Result<T, TrendError>,
    {
        (0..len).map(fit).collect()
    }
}

// ============================================================================
// Reference Convention
// ============================================================================

/// Smooth `series` with a fixed neighbor count.
///
/// Returns a series with the same length and `x` values as the input and `y`
/// replaced by the local linear estimate. Runs sequentially and propagates
/// NaN/Inf from degenerate neighborhoods unchanged.
///
/// # Errors
///
/// [`TrendError::Capacity`] when `neighbor_count` exceeds the series length.
pub fn smooth<T: Float>(series: &Series<T>, neighbor_count: usize) -> Result<Series<T>, TrendError> {
    Validator::validate_capacity(neighbor_count, series.len())?;

    (0..series.len())
        .map(|i| fit_point(series, i, neighbor_count).map(|y| Point::new(series[i].x, y)))
        .collect()
}
