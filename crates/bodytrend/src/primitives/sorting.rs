//! Distance ordering for neighbor selection.
//!
//! ## Purpose
//!
//! This module orders `(point, distance)` records by ascending distance from
//! a query center, the step that decides which points enter a local fit.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort, so points at equal distance keep their
//!   original series order. Neighbor selection depends on this when several
//!   points share an `x` value or sit symmetrically around the center.
//! * **Comparator**: NaN distances compare as equal to everything and keep
//!   their relative position.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Output distances are non-decreasing (for non-NaN values).

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::point::{Neighbor, Point};

// ============================================================================
// Sorting Functions
// ============================================================================

/// Comparator on neighbor distance.
#[inline]
pub fn by_distance<T: Float>(a: &Neighbor<T>, b: &Neighbor<T>) -> Ordering {
    a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal)
}

/// Pair every point with its distance to `center` and sort ascending.
///
/// 1. Computes `|x_i - center|` for every point, in series order.
/// 2. Performs a stable sort on the distance.
#[inline]
pub fn sort_by_distance<T: Float>(points: &[Point<T>], center: T) -> Vec<Neighbor<T>> {
    let mut records: Vec<Neighbor<T>> = points
        .iter()
        .map(|&point| Neighbor {
            point,
            distance: point.distance_to(center),
        })
        .collect();

    records.sort_by(by_distance);
    records
}
