//! Daily records and report configuration.

// External dependencies
use chrono::NaiveDate;

// Feature-gated imports
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Daily Record
// ============================================================================

/// One logged day. Either measurement may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DailyRecord {
    /// Calendar day of the record.
    pub date: NaiveDate,

    /// Body mass in kg.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub mass: Option<f64>,

    /// Energy intake in kcal.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub intake: Option<f64>,
}

impl DailyRecord {
    /// A record with no measurements.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mass: None,
            intake: None,
        }
    }

    /// Set the body mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Set the energy intake.
    pub fn with_intake(mut self, intake: f64) -> Self {
        self.intake = Some(intake);
        self
    }

    /// Both mass and intake are present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.mass.is_some() && self.intake.is_some()
    }
}

// ============================================================================
// Report Configuration
// ============================================================================

/// Smoothing and window parameters for [`TrendReport`](super::TrendReport).
///
/// Neighbor counts above the number of available days are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ReportConfig {
    /// Neighbors for the body-mass trend.
    pub mass_neighbors: usize,

    /// Neighbors for the intake trend.
    pub intake_neighbors: usize,

    /// Neighbors for the day-to-day mass change trend.
    pub mass_delta_neighbors: usize,

    /// Neighbors for the intake-per-kg trend.
    pub intake_per_mass_neighbors: usize,

    /// Window of the averages feeding the energy-balance estimate.
    pub average_window: usize,

    /// Short look-back for mass and intake changes (days).
    pub short_lag: usize,

    /// Long look-back for mass change (days).
    pub long_lag: usize,

    /// Decimal places kept in report rows.
    pub decimals: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mass_neighbors: 28,
            intake_neighbors: 28,
            mass_delta_neighbors: 100,
            intake_per_mass_neighbors: 48,
            average_window: 14,
            short_lag: 7,
            long_lag: 28,
            decimals: 2,
        }
    }
}
