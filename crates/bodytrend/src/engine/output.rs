//! Output types for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module defines [`SmoothResult`], the value returned by a configured
//! smoothing model: the smoothed `(x, y)` pairs, the neighbor count that was
//! used and the positions of any non-finite estimates.
//!
//! ## Invariants
//!
//! * `points` holds one entry per evaluation target, in target order.
//! * Every index in `degenerate` addresses a non-finite `y` in `points`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization logic.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::ExecutorOutput;
use crate::primitives::point::{Point, Series};

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed series plus metadata about the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothResult<T> {
    /// Evaluation abscissae paired with their smoothed estimates.
    pub points: Series<T>,

    /// Neighbor count used for every local fit.
    pub neighbor_count: usize,

    /// Indices whose estimate is NaN or infinite.
    pub degenerate: Vec<usize>,
}

impl<T: Float> SmoothResult<T> {
    /// Number of estimates.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no estimates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluation abscissae.
    pub fn x(&self) -> Vec<T> {
        self.points.xs()
    }

    /// Smoothed estimates.
    pub fn y(&self) -> Vec<T> {
        self.points.ys()
    }

    /// Whether any estimate is non-finite.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }

    /// Consume the result, keeping only the smoothed series.
    pub fn into_series(self) -> Series<T> {
        self.points
    }
}

impl<T: Float> From<ExecutorOutput<T>> for SmoothResult<T> {
    fn from(output: ExecutorOutput<T>) -> Self {
        let points = output
            .x
            .into_iter()
            .zip(output.smoothed)
            .map(|(x, y)| Point::new(x, y))
            .collect();

        Self {
            points,
            neighbor_count: output.neighbor_count,
            degenerate: output.degenerate,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for SmoothResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points:    {}", self.len())?;
        writeln!(f, "  Neighbor count: {}", self.neighbor_count)?;
        if self.is_degenerate() {
            writeln!(f, "  Degenerate:     {}", self.degenerate.len())?;
        }
        writeln!(f)?;

        writeln!(f, "Smoothed Data:")?;
        writeln!(f, "{:>12} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<width$}", "", width = 25)?;

        // Show first 10 and last 10 rows for long series
        let n = self.len();
        let rows: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        for (pos, &i) in rows.iter().enumerate() {
            if n > 20 && pos == 10 {
                writeln!(f, "{:>12}", "...")?;
            }
            let p = self.points[i];
            writeln!(f, "{:>12.2} {:>12.5}", p.x, p.y)?;
        }

        Ok(())
    }
}
