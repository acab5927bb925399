//! Tests for report assembly over daily records.
//!
//! These tests verify the two record-level views:
//! - The trend report over complete days
//! - The per-day smoothed listing with a fractional bandwidth
//!
//! ## Test Organization
//!
//! 1. **Trend Report** - Rows, change columns, energy balance placeholder
//! 2. **Trend Report Errors** - Too few days, zero window
//! 3. **Smoothed Days** - Gaps, missing quantities, invalid fractions
//! 4. **Serialization** - JSON shape (with the `serde` feature)

use approx::assert_abs_diff_eq;
use chrono::{Days, NaiveDate};

use bodytrend::prelude::*;
use bodytrend::report::smoothed_days;

// ============================================================================
// Helper Functions
// ============================================================================

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn day(offset: usize) -> NaiveDate {
    start_date()
        .checked_add_days(Days::new(offset as u64))
        .unwrap()
}

/// Mass falling 0.05 kg a day at a constant 2200 kcal intake.
fn steady_loss(n: usize) -> Vec<DailyRecord> {
    (0..n)
        .map(|i| {
            DailyRecord::new(day(i))
                .with_mass(80.0 - 0.05 * i as f64)
                .with_intake(2200.0)
        })
        .collect()
}

// ============================================================================
// Trend Report Tests
// ============================================================================

/// Test that every complete day gets a row in input order.
#[test]
fn test_report_rows() {
    let records = steady_loss(40);
    let report = TrendReport::build(&records, &ReportConfig::default()).unwrap();

    assert_eq!(report.len(), 40);
    assert!(!report.is_empty());
    assert_eq!(report.rows[0].date, start_date());
    assert_eq!(report.latest().map(|r| r.date), Some(day(39)));
}

/// Test that linear mass data is its own trend.
#[test]
fn test_report_trend_of_linear_mass() {
    let records = steady_loss(40);
    let report = TrendReport::build(&records, &ReportConfig::default()).unwrap();

    for (i, row) in report.rows.iter().enumerate() {
        assert_abs_diff_eq!(row.trend_mass, 80.0 - 0.05 * i as f64, epsilon = 1e-9);
        assert_abs_diff_eq!(row.trend_intake, 2200.0, epsilon = 1e-9);
    }
}

/// Test the short and long change columns with their leading zeros.
#[test]
fn test_report_change_columns() {
    let records = steady_loss(40);
    let config = ReportConfig::default();
    let report = TrendReport::build(&records, &config).unwrap();

    for (i, row) in report.rows.iter().enumerate() {
        if i < config.short_lag {
            assert_eq!(row.short_mass_change, 0.0);
        } else {
            assert_abs_diff_eq!(row.short_mass_change, -0.35, epsilon = 1e-9);
        }

        if i < config.long_lag {
            assert_eq!(row.long_mass_change, 0.0);
        } else {
            assert_abs_diff_eq!(row.long_mass_change, -1.4, epsilon = 1e-9);
        }

        assert_abs_diff_eq!(row.short_intake_change, 0.0, epsilon = 1e-9);
    }
}

/// Test that energy balance is zero until the first full averaging window.
#[test]
fn test_report_energy_balance_placeholder() {
    let records = steady_loss(40);
    let config = ReportConfig::default();
    let report = TrendReport::build(&records, &config).unwrap();

    for row in &report.rows[..config.average_window - 1] {
        assert_eq!(row.energy_balance, 0.0);
    }
    for row in &report.rows[config.average_window - 1..] {
        assert!(row.energy_balance.is_finite());
        assert_ne!(row.energy_balance, 0.0);
    }
}

/// Test the energy balance against trailing window means of the trends.
///
/// Row `i` of a full window holds the estimate over the smoothed intake and
/// smoothed daily mass change of days `i - window + 1 ..= i`.
#[test]
fn test_report_energy_balance_values() {
    let n = 30;
    let mass: Vec<f64> = (0..n)
        .map(|i| 80.0 - 0.05 * i as f64 + 0.3 * (i as f64 * 1.3).sin())
        .collect();
    let intake: Vec<f64> = (0..n)
        .map(|i| 2200.0 + 150.0 * (i as f64 * 0.7).cos())
        .collect();
    let records: Vec<DailyRecord> = (0..n)
        .map(|i| DailyRecord::new(day(i)).with_mass(mass[i]).with_intake(intake[i]))
        .collect();

    let config = ReportConfig {
        decimals: 9,
        ..ReportConfig::default()
    };
    let report = TrendReport::build(&records, &config).unwrap();

    let trend_intake = smooth(&Series::from_values(&intake), config.intake_neighbors)
        .unwrap()
        .ys();
    let daily_change = smooth(
        &Series::from_values(&lagged_difference(&mass, 1)),
        config.mass_delta_neighbors.min(n),
    )
    .unwrap()
    .ys();

    let window = config.average_window;
    let mean = |values: &[f64]| values.iter().sum::<f64>() / values.len() as f64;

    for (i, row) in report.rows.iter().enumerate() {
        if i + 1 < window {
            assert_eq!(row.energy_balance, 0.0);
            continue;
        }
        let span = i + 1 - window..=i;
        let expected = energy_balance(
            mean(&trend_intake[span.clone()]),
            mean(&daily_change[span]),
        );
        assert_abs_diff_eq!(row.energy_balance, expected, epsilon = 1e-6);
    }
}

/// Test that a window longer than the data leaves every balance at zero.
#[test]
fn test_report_window_longer_than_data() {
    let records = steady_loss(5);
    let report = TrendReport::build(&records, &ReportConfig::default()).unwrap();

    assert_eq!(report.len(), 5);
    assert!(report.rows.iter().all(|r| r.energy_balance == 0.0));
}

/// Test that incomplete days are skipped.
#[test]
fn test_report_skips_incomplete_days() {
    let mut records = steady_loss(20);
    records[3].intake = None;
    records[8].mass = None;
    records.push(DailyRecord::new(day(20)));

    let report = TrendReport::build(&records, &ReportConfig::default()).unwrap();

    assert_eq!(report.len(), 18);
    assert!(report.rows.iter().all(|r| r.date != day(3) && r.date != day(8)));
}

/// Test that values are rounded to the configured places.
#[test]
fn test_report_rounding() {
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| {
            DailyRecord::new(day(i))
                .with_mass(80.0 + (i % 3) as f64 * 0.123)
                .with_intake(2000.0 + (i % 4) as f64 * 37.7)
        })
        .collect();
    let config = ReportConfig {
        decimals: 1,
        ..ReportConfig::default()
    };
    let report = TrendReport::build(&records, &config).unwrap();

    for row in &report.rows {
        assert_abs_diff_eq!(row.trend_mass * 10.0, (row.trend_mass * 10.0).round(), epsilon = 1e-6);
        assert_abs_diff_eq!(
            row.intake_per_mass * 10.0,
            (row.intake_per_mass * 10.0).round(),
            epsilon = 1e-6
        );
    }
}

/// Test the rendered table.
#[test]
fn test_report_display() {
    let report = TrendReport::build(&steady_loss(15), &ReportConfig::default()).unwrap();
    let text = report.to_string();

    assert!(text.contains("Date"));
    assert!(text.contains("TDEE"));
    assert!(text.contains("7d dM"));
    assert!(text.contains("01/01/2024"));
    assert_eq!(text.lines().count(), 2 + 15);
}

// ============================================================================
// Trend Report Error Tests
// ============================================================================

/// Test that a single complete day is not enough.
#[test]
fn test_report_too_few_days() {
    let mut records = steady_loss(1);
    records.push(DailyRecord::new(day(1)).with_mass(79.0));

    assert_eq!(
        TrendReport::build(&records, &ReportConfig::default()),
        Err(TrendError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Test that a zero averaging window is rejected.
#[test]
fn test_report_zero_window() {
    let config = ReportConfig {
        average_window: 0,
        ..ReportConfig::default()
    };

    assert_eq!(
        TrendReport::build(&steady_loss(10), &config),
        Err(TrendError::Range { width: 0, len: 10 })
    );
}

// ============================================================================
// Smoothed Days Tests
// ============================================================================

/// Test that every record keeps its slot and gaps receive a trend value.
#[test]
fn test_smoothed_days_fill_gaps() {
    let records: Vec<DailyRecord> = (0..10)
        .map(|i| {
            let record = DailyRecord::new(day(i)).with_intake(2000.0);
            if i == 4 {
                record
            } else {
                record.with_mass(70.0 + 0.1 * i as f64)
            }
        })
        .collect();

    let days = smoothed_days(&records, 0.5).unwrap();

    assert_eq!(days.len(), records.len());
    assert_eq!(days[4].mass, None);
    assert_abs_diff_eq!(days[4].smoothed_mass.unwrap(), 70.4, epsilon = 1e-9);
    for (i, d) in days.iter().enumerate() {
        assert_eq!(d.date, day(i));
        assert_abs_diff_eq!(d.smoothed_mass.unwrap(), 70.0 + 0.1 * i as f64, epsilon = 1e-9);
        assert_abs_diff_eq!(d.smoothed_intake.unwrap(), 2000.0, epsilon = 1e-9);
    }
}

/// Test that a quantity nobody logged has no trend.
#[test]
fn test_smoothed_days_missing_quantity() {
    let records: Vec<DailyRecord> = (0..6)
        .map(|i| DailyRecord::new(day(i)).with_mass(70.0 + i as f64))
        .collect();

    let days = smoothed_days(&records, 0.8).unwrap();

    assert!(days.iter().all(|d| d.smoothed_intake.is_none()));
    assert!(days.iter().all(|d| d.smoothed_mass.is_some()));
}

/// Test that an empty record list gives an empty view.
#[test]
fn test_smoothed_days_empty() {
    assert!(smoothed_days(&[], 0.3).unwrap().is_empty());
}

/// Test that the fraction is validated.
#[test]
fn test_smoothed_days_invalid_fraction() {
    assert_eq!(
        smoothed_days(&steady_loss(5), 0.0),
        Err(TrendError::InvalidFraction(0.0))
    );
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[cfg(feature = "serde")]
mod serialization {
    use super::*;

    /// Test the JSON shape of a record.
    #[test]
    fn test_record_json() {
        let record = DailyRecord::new(start_date()).with_mass(80.5);
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"date":"2024-01-01","mass":80.5}"#);

        let back: DailyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    /// Test that missing config fields take their defaults.
    #[test]
    fn test_config_partial_json() {
        let config: ReportConfig = serde_json::from_str(r#"{"averageWindow":7}"#).unwrap();

        assert_eq!(config.average_window, 7);
        assert_eq!(config.mass_neighbors, ReportConfig::default().mass_neighbors);
    }

    /// Test that smoothed days serialize with camelCase keys.
    #[test]
    fn test_smoothed_day_json() {
        let days = smoothed_days(&steady_loss(5), 0.6).unwrap();
        let json = serde_json::to_string(&days[0]).unwrap();

        assert!(json.contains("\"smoothedMass\""));
        assert!(json.contains("\"smoothedIntake\""));
    }
}
