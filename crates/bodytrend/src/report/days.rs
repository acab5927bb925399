//! Per-day smoothed view with a fractional bandwidth.
//!
//! Every record keeps its slot. Each quantity is smoothed over the days that
//! logged it, and the local lines are evaluated at every day's position, so
//! days with a missing measurement still receive a trend value.

// External dependencies
use chrono::NaiveDate;
use tracing::debug;

// Feature-gated imports
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use super::records::DailyRecord;
use crate::api::{LoessBuilder, LoessModel};
use crate::primitives::errors::TrendError;
use crate::primitives::point::{Point, Series};

/// One record together with its smoothed values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SmoothedDay {
    /// Day of the record.
    pub date: NaiveDate,

    /// Logged body mass, if any.
    pub mass: Option<f64>,

    /// Logged intake, if any.
    pub intake: Option<f64>,

    /// Mass trend at this day; `None` when no day logged a mass.
    pub smoothed_mass: Option<f64>,

    /// Intake trend at this day; `None` when no day logged an intake.
    pub smoothed_intake: Option<f64>,
}

/// Smooth mass and intake with a bandwidth of `fraction` of the logged days.
///
/// The `x` of a day is its position in `records`.
///
/// # Errors
///
/// * [`TrendError::InvalidFraction`] for a fraction outside (0, 1].
pub fn smoothed_days(records: &[DailyRecord], fraction: f64) -> Result<Vec<SmoothedDay>, TrendError> {
    let model = LoessBuilder::new().fraction(fraction).build()?;
    let positions: Vec<f64> = (0..records.len()).map(|i| i as f64).collect();

    let smoothed_mass = smooth_quantity(&model, records, &positions, |r| r.mass)?;
    let smoothed_intake = smooth_quantity(&model, records, &positions, |r| r.intake)?;

    debug!(
        days = records.len(),
        fraction,
        "smoothed per-day view"
    );

    Ok(records
        .iter()
        .enumerate()
        .map(|(i, record)| SmoothedDay {
            date: record.date,
            mass: record.mass,
            intake: record.intake,
            smoothed_mass: smoothed_mass.as_ref().map(|ys| ys[i]),
            smoothed_intake: smoothed_intake.as_ref().map(|ys| ys[i]),
        })
        .collect())
}

/// Smooth one quantity, or `None` when no record carries it.
fn smooth_quantity<F>(
    model: &LoessModel<f64>,
    records: &[DailyRecord],
    positions: &[f64],
    value: F,
) -> Result<Option<Vec<f64>>, TrendError>
where
    F: Fn(&DailyRecord) -> Option<f64>,
{
    let series: Series<f64> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| value(r).map(|v| Point::new(i as f64, v)))
        .collect();

    if series.is_empty() {
        return Ok(None);
    }

    Ok(Some(model.smooth_at(&series, positions)?.y()))
}
