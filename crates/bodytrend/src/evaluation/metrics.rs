//! Derived rate-of-change metrics.
//!
//! ## Purpose
//!
//! Independent pure functions over numeric sequences, typically the output of
//! a smoothing pass:
//!
//! * [`sliding_average`]: trailing mean over a fixed window.
//! * [`simple_difference`]: change between consecutive values.
//! * [`lagged_difference`]: change relative to `lag` steps earlier, padded.
//! * [`energy_balance`]: daily expenditure estimate from intake and mass change.
//!
//! ## Invariants
//!
//! * `sliding_average` returns `len - width + 1` values.
//! * `simple_difference` returns `len - 1` values (none for fewer than two).
//! * `lagged_difference` returns `len` values, the first `lag` of them zero.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::TrendError;

/// Energy released per fat unit, in kcal.
pub const KCAL_PER_FAT_UNIT: f64 = 3500.0;

/// Body-mass equivalent of one fat unit, in kg.
pub const FAT_UNIT_KG: f64 = 0.45;

// ============================================================================
// Averages
// ============================================================================

/// Trailing mean over windows of `width` values.
///
/// Output element `j` is the mean of `values[j..j + width]`, i.e. the window
/// ending at index `j + width - 1`.
///
/// # Errors
///
/// [`TrendError::Range`] when `width` is zero or larger than `values`.
pub fn sliding_average<T: Float>(values: &[T], width: usize) -> Result<Vec<T>, TrendError> {
    Validator::validate_window(width, values.len())?;

    let divisor = T::from(width).ok_or(TrendError::Range {
        width,
        len: values.len(),
    })?;

    Ok(values
        .windows(width)
        .map(|window| window.iter().fold(T::zero(), |acc, &v| acc + v) / divisor)
        .collect())
}

// ============================================================================
// Differences
// ============================================================================

/// Consecutive differences `values[i + 1] - values[i]`.
pub fn simple_difference<T: Float>(values: &[T]) -> Vec<T> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Differences against the value `lag` steps earlier.
///
/// Positions without a predecessor that far back hold `0` so the output stays
/// aligned with the input.
pub fn lagged_difference<T: Float>(values: &[T], lag: usize) -> Vec<T> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i < lag {
                T::zero()
            } else {
                v - values[i - lag]
            }
        })
        .collect()
}

// ============================================================================
// Energy Balance
// ============================================================================

/// Daily energy expenditure estimate.
///
/// `avg_intake - avg_mass_delta_per_day * 3500 / 0.45`: average intake minus
/// the energy stored (or released) by the average daily mass change.
pub fn energy_balance<T: Float>(avg_intake: T, avg_mass_delta_per_day: T) -> T {
    let kcal = T::from(KCAL_PER_FAT_UNIT).unwrap_or_else(T::nan);
    let unit = T::from(FAT_UNIT_KG).unwrap_or_else(T::nan);
    avg_intake - (avg_mass_delta_per_day * kcal) / unit
}

/// [`energy_balance`] over two aligned sequences of averages.
///
/// # Errors
///
/// [`TrendError::LengthMismatch`] when the sequences differ in length.
pub fn energy_balance_series<T: Float>(
    avg_intake: &[T],
    avg_mass_delta_per_day: &[T],
) -> Result<Vec<T>, TrendError> {
    Validator::validate_lengths(avg_intake.len(), avg_mass_delta_per_day.len())?;

    Ok(avg_intake
        .iter()
        .zip(avg_mass_delta_per_day)
        .map(|(&intake, &delta)| energy_balance(intake, delta))
        .collect())
}

// ============================================================================
// Helpers
// ============================================================================

/// Element-wise quotient, e.g. intake per kilogram of body mass.
///
/// # Errors
///
/// [`TrendError::LengthMismatch`] when the sequences differ in length.
pub fn ratio<T: Float>(numerators: &[T], denominators: &[T]) -> Result<Vec<T>, TrendError> {
    Validator::validate_lengths(numerators.len(), denominators.len())?;

    Ok(numerators
        .iter()
        .zip(denominators)
        .map(|(&n, &d)| n / d)
        .collect())
}

/// Read a sequence that starts `start` positions late.
///
/// Returns `fill` for `i < start`, otherwise `values[i - start]`, or `None`
/// past the end of `values`.
pub fn offset_lookup<T: Float>(values: &[T], start: usize, fill: T, i: usize) -> Option<T> {
    if i < start {
        Some(fill)
    } else {
        values.get(i - start).copied()
    }
}

/// Round to a fixed number of decimal places (half away from zero).
pub fn round_places<T: Float>(value: T, places: i32) -> T {
    let scale = T::from(10.0).unwrap_or_else(T::one).powi(places);
    (value * scale).round() / scale
}
