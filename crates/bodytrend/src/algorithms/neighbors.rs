//! Nearest-neighbor selection.
//!
//! ## Purpose
//!
//! This module picks the points that take part in one local fit: the points
//! closest in `x` to a query center.
//!
//! ## Key concepts
//!
//! * **Inclusive of self**: a request for `count` neighbors returns the first
//!   `count + 1` entries of the distance ordering. When the center is a series
//!   point it comes first at distance zero, followed by `count` others.
//! * **Tie-break**: equal distances keep their original series order.
//! * **Saturation**: `count == len` is accepted; the set then holds every
//!   point of the series.
//!
//! ## Non-goals
//!
//! * This module does not require or check that the series is sorted.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::TrendError;
use crate::primitives::point::{NeighborSet, Series};
use crate::primitives::sorting::sort_by_distance;

/// Select the neighbors of the point at `center_index`.
///
/// # Errors
///
/// * [`TrendError::Index`] when `center_index` is outside the series.
/// * [`TrendError::Capacity`] when `count` exceeds the series length.
pub fn select_neighbors<T: Float>(
    series: &Series<T>,
    center_index: usize,
    count: usize,
) -> Result<NeighborSet<T>, TrendError> {
    Validator::validate_center_index(center_index, series.len())?;
    Validator::validate_capacity(count, series.len())?;

    Ok(take_nearest(series, series[center_index].x, count))
}

/// Select the neighbors of an arbitrary abscissa `center_x`.
///
/// Used when the local line is evaluated at points that need not belong to
/// the series.
///
/// # Errors
///
/// * [`TrendError::EmptySeries`] when the series has no points.
/// * [`TrendError::Capacity`] when `count` exceeds the series length.
pub fn select_neighbors_around<T: Float>(
    series: &Series<T>,
    center_x: T,
    count: usize,
) -> Result<NeighborSet<T>, TrendError> {
    if series.is_empty() {
        return Err(TrendError::EmptySeries);
    }
    Validator::validate_capacity(count, series.len())?;

    Ok(take_nearest(series, center_x, count))
}

fn take_nearest<T: Float>(series: &Series<T>, center_x: T, count: usize) -> NeighborSet<T> {
    let mut sorted = sort_by_distance(series.points(), center_x);
    sorted.truncate(count.saturating_add(1));
    NeighborSet::from_sorted(sorted)
}
