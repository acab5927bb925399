//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module holds the structural checks shared by the selector, the
//! fitter, the metric calculators and the builder: index bounds, neighbor
//! capacity, index-for-index length agreement and window widths.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Structural only**: plausibility of the values themselves (weight
//!   ranges, finite inputs) is not checked.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::TrendError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for trend configuration and input data.
///
/// All methods return `Result<(), TrendError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that `index` addresses a point of a series of length `len`.
    #[inline]
    pub fn validate_center_index(index: usize, len: usize) -> Result<(), TrendError> {
        if index >= len {
            return Err(TrendError::Index { index, len });
        }
        Ok(())
    }

    /// Validate that `count` neighbors can be drawn from `available` points.
    #[inline]
    pub fn validate_capacity(count: usize, available: usize) -> Result<(), TrendError> {
        if count > available {
            return Err(TrendError::Capacity {
                requested: count,
                available,
            });
        }
        Ok(())
    }

    /// Validate that two index-aligned sequences have the same length.
    #[inline]
    pub fn validate_lengths(left: usize, right: usize) -> Result<(), TrendError> {
        if left != right {
            return Err(TrendError::LengthMismatch { left, right });
        }
        Ok(())
    }

    /// Validate a sliding-window width against the sequence length.
    #[inline]
    pub fn validate_window(width: usize, len: usize) -> Result<(), TrendError> {
        if width == 0 || width > len {
            return Err(TrendError::Range { width, len });
        }
        Ok(())
    }

    /// Validate the bandwidth fraction, which must lie in (0, 1].
    pub fn validate_fraction<T: Float>(fraction: T) -> Result<(), TrendError> {
        if !fraction.is_finite() || fraction <= T::zero() || fraction > T::one() {
            return Err(TrendError::InvalidFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that at least `min` points are present.
    #[inline]
    pub fn validate_min_points(got: usize, min: usize) -> Result<(), TrendError> {
        if got < min {
            return Err(TrendError::TooFewPoints { got, min });
        }
        Ok(())
    }

    /// Validate that no builder parameter was set twice.
    #[inline]
    pub fn validate_no_duplicates(duplicate: Option<&'static str>) -> Result<(), TrendError> {
        match duplicate {
            Some(parameter) => Err(TrendError::DuplicateParameter { parameter }),
            None => Ok(()),
        }
    }
}
