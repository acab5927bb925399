//! Points, series and neighbor sets.
//!
//! ## Purpose
//!
//! This module defines the in-memory shapes exchanged at the crate boundary:
//! an immutable `(x, y)` [`Point`], an ordered fixed-length [`Series`] of
//! points, and the ephemeral [`NeighborSet`] built for one local fit.
//!
//! ## Design notes
//!
//! * **Encoding of time**: `x` is whatever numeric time encoding the caller
//!   chooses (ordinal day index or Unix timestamp).
//! * **No validation**: series are neither sorted nor deduplicated here.
//! * **Immutability**: a series has no mutating methods; transformations build
//!   new series.
//!
//! ## Invariants
//!
//! * A series' length never changes after construction.
//! * Neighbor sets are ordered by ascending distance.

// External dependencies
use core::ops::Index;
use core::slice::Iter;
use num_traits::Float;

// Feature-gated imports
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::TrendError;

// ============================================================================
// Point
// ============================================================================

/// A single observation: `x` encodes time, `y` is the measured quantity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    /// Independent variable (time encoding).
    pub x: T,

    /// Dependent variable (measured or derived value).
    pub y: T,
}

impl<T: Float> Point<T> {
    /// Create a point.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Absolute distance in `x` to `center`.
    #[inline]
    pub fn distance_to(&self, center: T) -> T {
        (self.x - center).abs()
    }
}

// ============================================================================
// Series
// ============================================================================

/// An ordered, index-addressable sequence of points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Series<T> {
    points: Vec<Point<T>>,
}

impl<T: Float> Series<T> {
    /// Build a series from owned points.
    pub fn from_points(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    /// Pair up separate `x` and `y` slices.
    pub fn from_xy(x: &[T], y: &[T]) -> Result<Self, TrendError> {
        if x.len() != y.len() {
            return Err(TrendError::LengthMismatch {
                left: x.len(),
                right: y.len(),
            });
        }

        Ok(x.iter().zip(y).map(|(&x, &y)| Point::new(x, y)).collect())
    }

    /// Use the ordinal position `0, 1, 2, ...` as `x` for each value.
    pub fn from_values(values: &[T]) -> Self {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| Point::new(T::from(i).unwrap_or_else(T::nan), y))
            .collect()
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Point<T>> {
        self.points.get(index)
    }

    /// Borrow the points.
    #[inline]
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Iterate over the points in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Collect the `x` values.
    pub fn xs(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Collect the `y` values.
    pub fn ys(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Split into separate `x` and `y` vectors.
    pub fn unzip(&self) -> (Vec<T>, Vec<T>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }

    /// Consume the series, returning its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }
}

impl<T: Float> FromIterator<Point<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Series<T> {
    type Output = Point<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a, T> IntoIterator for &'a Series<T> {
    type Item = &'a Point<T>;
    type IntoIter = Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ============================================================================
// Neighbor Set
// ============================================================================

/// A point paired with its `x`-distance from a query center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<T> {
    /// The neighboring point.
    pub point: Point<T>,

    /// Absolute `x`-distance to the query center.
    pub distance: T,
}

/// Neighbors of one query center, ordered by ascending distance.
///
/// Built by the selector for a single local fit and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborSet<T> {
    entries: Vec<Neighbor<T>>,
}

impl<T: Float> NeighborSet<T> {
    /// Wrap entries that are already sorted by ascending distance.
    pub(crate) fn from_sorted(entries: Vec<Neighbor<T>>) -> Self {
        Self { entries }
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the entries.
    #[inline]
    pub fn entries(&self) -> &[Neighbor<T>] {
        &self.entries
    }

    /// Iterate over the entries, nearest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Neighbor<T>> {
        self.entries.iter()
    }

    /// Distance of the farthest (last) entry, or `None` for an empty set.
    #[inline]
    pub fn max_distance(&self) -> Option<T> {
        self.entries.last().map(|n| n.distance)
    }

    /// Collect the distances.
    pub fn distances(&self) -> Vec<T> {
        self.entries.iter().map(|n| n.distance).collect()
    }

    /// Collect the neighbors' `x` values.
    pub fn xs(&self) -> Vec<T> {
        self.entries.iter().map(|n| n.point.x).collect()
    }

    /// Collect the neighbors' `y` values.
    pub fn ys(&self) -> Vec<T> {
        self.entries.iter().map(|n| n.point.y).collect()
    }
}

impl<T> Index<usize> for NeighborSet<T> {
    type Output = Neighbor<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}
