//! High-level API for LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! collects the bandwidth, degeneracy policy and execution hint, validates
//! them once, and yields a reusable [`LoessModel`].
//!
//! ## Key concepts
//!
//! * **Bandwidth**: a fixed neighbor count (`.neighbors(6)`) or a fraction of
//!   the series length (`.fraction(0.3)`), which resolves to
//!   `round(fraction * n)` neighbors for a series of `n` points.
//! * **Conventions**: [`LoessModel::smooth`] evaluates each local line at the
//!   point it was fitted around; [`LoessModel::smooth_at`] fits around and
//!   evaluates at caller-supplied abscissae.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LoessBuilder`] via `Loess::new()`.
//! 2. Chain configuration methods (`.neighbors()`, `.degeneracy()`, etc.).
//! 3. Call `.build()` to validate and obtain a [`LoessModel`].

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::executor::{LoessConfig, LoessExecutor, Targets};
use crate::engine::validator::Validator;
use crate::primitives::errors::TrendError;
use crate::primitives::point::Series;

// Publicly re-exported types
pub use crate::engine::executor::{Bandwidth, DegeneracyPolicy};
pub use crate::engine::output::SmoothResult;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a LOESS model.
#[derive(Debug, Clone)]
pub struct LoessBuilder<T> {
    /// Neighbor count or fraction.
    pub bandwidth: Option<Bandwidth<T>>,

    /// Handling of non-finite estimates (default: Propagate).
    pub degeneracy: Option<DegeneracyPolicy>,

    /// Parallel execution hint (default: false).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            degeneracy: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Use a fixed number of neighbors per local fit.
    pub fn neighbors(self, count: usize) -> Self {
        self.with_bandwidth(Bandwidth::Neighbors(count))
    }

    /// Use a fraction of the series length as the neighbor count.
    pub fn fraction(self, fraction: T) -> Self {
        self.with_bandwidth(Bandwidth::Fraction(fraction))
    }

    /// Set the bandwidth directly.
    pub fn with_bandwidth(mut self, bandwidth: Bandwidth<T>) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set how NaN/Inf estimates from zero-spread neighborhoods are handled.
    pub fn degeneracy(mut self, policy: DegeneracyPolicy) -> Self {
        if self.degeneracy.is_some() {
            self.duplicate_param = Some("degeneracy");
        }
        self.degeneracy = Some(policy);
        self
    }

    /// Evaluate points in parallel (requires the `parallel` feature).
    pub fn parallel(mut self, parallel: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build a model.
    ///
    /// # Errors
    ///
    /// * [`TrendError::DuplicateParameter`] if a parameter was set twice.
    /// * [`TrendError::MissingBandwidth`] if no bandwidth was set.
    /// * [`TrendError::InvalidFraction`] for a fraction outside (0, 1].
    pub fn build(self) -> Result<LoessModel<T>, TrendError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let bandwidth = self.bandwidth.ok_or(TrendError::MissingBandwidth)?;
        if let Bandwidth::Fraction(fraction) = bandwidth {
            Validator::validate_fraction(fraction)?;
        }

        Ok(LoessModel {
            config: LoessConfig {
                bandwidth,
                degeneracy: self.degeneracy.unwrap_or_default(),
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated LOESS configuration, reusable across series.
#[derive(Debug, Clone, Copy)]
pub struct LoessModel<T> {
    config: LoessConfig<T>,
}

impl<T: Float + Send + Sync> LoessModel<T> {
    /// The configured bandwidth.
    pub fn bandwidth(&self) -> Bandwidth<T> {
        self.config.bandwidth
    }

    /// The configured degeneracy policy.
    pub fn degeneracy(&self) -> DegeneracyPolicy {
        self.config.degeneracy
    }

    /// Smooth every point of `series`, evaluating each local line at the
    /// point it was fitted around.
    ///
    /// # Errors
    ///
    /// * [`TrendError::Capacity`] when the resolved neighbor count exceeds the series.
    /// * [`TrendError::Degenerate`] under [`DegeneracyPolicy::Strict`].
    pub fn smooth(&self, series: &Series<T>) -> Result<SmoothResult<T>, TrendError> {
        debug!(points = series.len(), "smoothing at series points");
        LoessExecutor::run(series, Targets::Series, &self.config).map(SmoothResult::from)
    }

    /// Fit around and evaluate at each abscissa of `eval_x`.
    ///
    /// # Errors
    ///
    /// * [`TrendError::EmptySeries`] when `series` is empty and `eval_x` is not.
    /// * [`TrendError::Capacity`] when the resolved neighbor count exceeds the series.
    /// * [`TrendError::Degenerate`] under [`DegeneracyPolicy::Strict`].
    pub fn smooth_at(&self, series: &Series<T>, eval_x: &[T]) -> Result<SmoothResult<T>, TrendError> {
        debug!(
            points = series.len(),
            targets = eval_x.len(),
            "smoothing at evaluation points"
        );
        LoessExecutor::run(series, Targets::Points(eval_x), &self.config).map(SmoothResult::from)
    }
}
