//! Tabular trend report.
//!
//! Builds one row per complete day (mass and intake both logged) with the
//! smoothed trends, change columns and the energy-balance estimate.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

use chrono::NaiveDate;
use tracing::debug;

// Feature-gated imports
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use super::records::{DailyRecord, ReportConfig};
use crate::engine::executor::smooth;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::{
    energy_balance_series, lagged_difference, offset_lookup, ratio, round_places, sliding_average,
};
use crate::primitives::errors::TrendError;
use crate::primitives::point::Series;

// ============================================================================
// Rows
// ============================================================================

/// One day of the trend report. Values are rounded to the configured places.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ReportRow {
    /// Day of the row.
    pub date: NaiveDate,

    /// Logged intake (kcal).
    pub intake: f64,

    /// Logged body mass (kg).
    pub mass: f64,

    /// Smoothed body mass.
    pub trend_mass: f64,

    /// Smoothed intake.
    pub trend_intake: f64,

    /// Smoothed day-to-day mass change.
    pub daily_mass_change: f64,

    /// Change of the mass trend over the short lag (0 until available).
    pub short_mass_change: f64,

    /// Change of the mass trend over the long lag (0 until available).
    pub long_mass_change: f64,

    /// Change of the intake trend over the short lag (0 until available).
    pub short_intake_change: f64,

    /// Smoothed intake per kg of body mass.
    pub intake_per_mass: f64,

    /// Energy-balance estimate (0 until the first full averaging window).
    pub energy_balance: f64,
}

// ============================================================================
// Report
// ============================================================================

/// Trend report over the complete days of a record list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrendReport {
    /// Configuration the report was built with.
    pub config: ReportConfig,

    /// One row per complete day, in input order.
    pub rows: Vec<ReportRow>,
}

impl TrendReport {
    /// Build the report from date-ordered records.
    ///
    /// Days missing either measurement are skipped.
    ///
    /// # Errors
    ///
    /// * [`TrendError::TooFewPoints`] with fewer than two complete days.
    /// * [`TrendError::Range`] for a zero averaging window.
    pub fn build(records: &[DailyRecord], config: &ReportConfig) -> Result<Self, TrendError> {
        let complete: Vec<&DailyRecord> = records.iter().filter(|r| r.is_complete()).collect();
        let n = complete.len();
        Validator::validate_min_points(n, 2)?;

        debug!(
            records = records.len(),
            complete_days = n,
            "building trend report"
        );

        let mass: Vec<f64> = complete.iter().filter_map(|r| r.mass).collect();
        let intake: Vec<f64> = complete.iter().filter_map(|r| r.intake).collect();

        let trend_mass = smooth_values(&mass, config.mass_neighbors)?;
        let trend_intake = smooth_values(&intake, config.intake_neighbors)?;

        let daily_mass_change =
            smooth_values(&lagged_difference(&mass, 1), config.mass_delta_neighbors)?;
        let intake_per_mass = smooth_values(
            &ratio(&intake, &mass)?,
            config.intake_per_mass_neighbors,
        )?;

        let window = config.average_window;
        let balance = if window > n {
            Vec::new()
        } else {
            energy_balance_series(
                &sliding_average(&trend_intake, window)?,
                &sliding_average(&daily_mass_change, window)?,
            )?
        };

        let short_mass = lagged_difference(&trend_mass, config.short_lag);
        let long_mass = lagged_difference(&trend_mass, config.long_lag);
        let short_intake = lagged_difference(&trend_intake, config.short_lag);

        let places = config.decimals;
        let start = window.saturating_sub(1);
        let rows = complete
            .iter()
            .enumerate()
            .map(|(i, record)| ReportRow {
                date: record.date,
                intake: intake[i],
                mass: mass[i],
                trend_mass: round_places(trend_mass[i], places),
                trend_intake: round_places(trend_intake[i], places),
                daily_mass_change: round_places(daily_mass_change[i], places),
                short_mass_change: round_places(short_mass[i], places),
                long_mass_change: round_places(long_mass[i], places),
                short_intake_change: round_places(short_intake[i], places),
                intake_per_mass: round_places(intake_per_mass[i], places),
                energy_balance: round_places(
                    offset_lookup(&balance, start, 0.0, i).unwrap_or(0.0),
                    places,
                ),
            })
            .collect();

        Ok(Self {
            config: *config,
            rows,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent row.
    pub fn latest(&self) -> Option<&ReportRow> {
        self.rows.last()
    }
}

/// Smooth values indexed by position, clamping the neighbor count to the length.
fn smooth_values(values: &[f64], neighbors: usize) -> Result<Vec<f64>, TrendError> {
    let series = Series::from_values(values);
    Ok(smooth(&series, neighbors.min(series.len()))?.ys())
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TrendReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let short = format!("{}d", self.config.short_lag);
        let long = format!("{}d", self.config.long_lag);

        writeln!(
            f,
            "{:<10} {:>8} {:>7} {:>9} {:>9} {:>7} {:>7} {:>7} {:>9} {:>8} {:>8}",
            "Date",
            "Intake",
            "Mass",
            "Trend kg",
            "Trend kcal",
            "1d dM",
            format!("{short} dM"),
            format!("{long} dM"),
            format!("{short} dKcal"),
            "kcal/kg",
            "TDEE",
        )?;
        writeln!(f, "{:-<width$}", "", width = 100)?;

        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:>8.0} {:>7.1} {:>9.2} {:>9.2} {:>7.2} {:>7.2} {:>7.2} {:>9.2} {:>8.2} {:>8.2}",
                row.date.format("%d/%m/%Y"),
                row.intake,
                row.mass,
                row.trend_mass,
                row.trend_intake,
                row.daily_mass_change,
                row.short_mass_change,
                row.long_mass_change,
                row.short_intake_change,
                row.intake_per_mass,
                row.energy_balance,
            )?;
        }

        Ok(())
    }
}
