//! Regression Logic
//!
//! ## Purpose
//!
//! This module fits a straight line to a weighted neighbor set by weighted
//! least squares (WLS), in the centered two-pass form:
//!
//! ```text
//! x_bar     = sum(w_i * x_i) / sum(w_i)
//! y_bar     = sum(w_i * y_i) / sum(w_i)
//! slope     = sum(w_i * (x_i - x_bar) * (y_i - y_bar)) / sum(w_i * (x_i - x_bar)^2)
//! intercept = y_bar - slope * x_bar
//! ```
//!
//! A zero denominator (every neighbor at the same `x`) yields an infinite or
//! NaN slope. It is returned unchanged.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::TrendError;
use crate::primitives::point::NeighborSet;

// ============================================================================
// Weighted Mean
// ============================================================================

/// Weighted arithmetic mean `sum(v_i * w_i) / sum(w_i)`.
///
/// # Errors
///
/// [`TrendError::LengthMismatch`] when `values` and `weights` differ in length.
pub fn weighted_mean<T: Float>(values: &[T], weights: &[T]) -> Result<T, TrendError> {
    Validator::validate_lengths(values.len(), weights.len())?;

    let sum_weights = weights.iter().fold(T::zero(), |acc, &w| acc + w);
    let sum_weighted = values
        .iter()
        .zip(weights)
        .fold(T::zero(), |acc, (&v, &w)| acc + v * w);

    Ok(sum_weighted / sum_weights)
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Weighted mean of x-values
    pub x_mean: T,

    /// Weighted mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }

    /// Whether slope and intercept are both finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }

    /// Fit Weighted Least Squares (WLS) regression through a neighbor set.
    ///
    /// # Errors
    ///
    /// [`TrendError::LengthMismatch`] when `weights` does not have one entry
    /// per neighbor.
    pub fn fit_wls(neighbors: &NeighborSet<T>, weights: &[T]) -> Result<Self, TrendError> {
        Validator::validate_lengths(neighbors.len(), weights.len())?;

        let x = neighbors.xs();
        let y = neighbors.ys();

        let x_mean = weighted_mean(&x, weights)?;
        let y_mean = weighted_mean(&y, weights)?;

        let mut numerator = T::zero();
        let mut denominator = T::zero();
        for ((&xi, &yi), &w) in x.iter().zip(&y).zip(weights) {
            let dx = xi - x_mean;
            numerator = numerator + w * dx * (yi - y_mean);
            denominator = denominator + w * (dx * dx);
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
        })
    }
}
