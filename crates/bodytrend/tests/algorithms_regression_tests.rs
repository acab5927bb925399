//! Tests for weighted least-squares fitting.
//!
//! These tests verify the local line fit used by LOESS:
//! - Weighted means
//! - Exact recovery of linear data
//! - Length validation
//! - NaN/Inf propagation for zero spread in x
//!
//! ## Test Organization
//!
//! 1. **Weighted Mean** - Values, mismatch
//! 2. **Line Fits** - Exact lines, prediction
//! 3. **Degenerate Fits** - Zero denominator

use approx::assert_relative_eq;

use bodytrend::{select_neighbors, tricube_weights, weighted_mean, LinearFit, Series, TrendError};

// ============================================================================
// Weighted Mean Tests
// ============================================================================

/// Test a basic weighted mean.
#[test]
fn test_weighted_mean() {
    let mean = weighted_mean(&[1.0f64, 2.0, 3.0], &[1.0, 1.0, 2.0]).unwrap();

    assert_relative_eq!(mean, 2.25, epsilon = 1e-12);
}

/// Test that values and weights must have the same length.
#[test]
fn test_weighted_mean_length_mismatch() {
    assert_eq!(
        weighted_mean(&[1.0f64, 2.0], &[1.0]),
        Err(TrendError::LengthMismatch { left: 2, right: 1 })
    );
}

// ============================================================================
// Line Fit Tests
// ============================================================================

/// Test that points on a line are fitted exactly.
#[test]
fn test_fit_exact_line() {
    let x: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
    let y: Vec<f64> = x.iter().map(|&x| 2.0 * x + 1.0).collect();
    let series = Series::from_xy(&x, &y).unwrap();

    let neighbors = select_neighbors(&series, 3, 5).unwrap();
    let weights = tricube_weights(&neighbors);
    let fit = LinearFit::fit_wls(&neighbors, &weights).unwrap();

    assert!(fit.is_finite());
    assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-10);
    assert_relative_eq!(fit.predict(10.0), 21.0, epsilon = 1e-9);
}

/// Test that the fitted line passes through the weighted centroid.
#[test]
fn test_fit_through_weighted_means() {
    let series = Series::from_xy(&[0.0f64, 1.0, 2.0, 3.0, 4.0], &[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap();
    let neighbors = select_neighbors(&series, 2, 4).unwrap();
    let weights = tricube_weights(&neighbors);
    let fit = LinearFit::fit_wls(&neighbors, &weights).unwrap();

    assert_relative_eq!(fit.predict(fit.x_mean), fit.y_mean, epsilon = 1e-12);
}

/// Test that weights must match the neighbor count.
#[test]
fn test_fit_length_mismatch() {
    let series = Series::from_values(&[1.0f64, 2.0, 3.0]);
    let neighbors = select_neighbors(&series, 0, 2).unwrap();

    assert_eq!(
        LinearFit::fit_wls(&neighbors, &[1.0]),
        Err(TrendError::LengthMismatch { left: 3, right: 1 })
    );
}

// ============================================================================
// Degenerate Fit Tests
// ============================================================================

/// Test that identical x values yield a non-finite slope rather than an error.
#[test]
fn test_zero_spread_is_not_an_error() {
    let series = Series::from_xy(&[1.0f64, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();
    let neighbors = select_neighbors(&series, 0, 2).unwrap();
    let weights = tricube_weights(&neighbors);

    let fit = LinearFit::fit_wls(&neighbors, &weights).unwrap();

    assert!(fit.slope.is_nan());
    assert!(!fit.is_finite());
}

/// Test that a zero denominator with finite weights is also propagated.
///
/// Only the center has non-zero weight, so the weighted spread in x is zero.
#[test]
fn test_single_weighted_point() {
    let series = Series::from_values(&[4.0f64, 7.0]);
    let neighbors = select_neighbors(&series, 0, 1).unwrap();
    let weights = tricube_weights(&neighbors);

    assert_eq!(weights, vec![1.0, 0.0]);

    let fit = LinearFit::fit_wls(&neighbors, &weights).unwrap();
    assert!(!fit.slope.is_finite());
}
