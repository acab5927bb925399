//! Trend report over two months of synthetic weigh-ins.
//!
//! Run with `RUST_LOG=bodytrend=debug` to see the smoothing passes.

use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand_distr::Normal;
use tracing_subscriber::EnvFilter;

use bodytrend::prelude::*;
use bodytrend::report::smoothed_days;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let mass_noise = Normal::new(0.0_f64, 0.35)?;
    let intake = Normal::new(2250.0_f64, 200.0)?;
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("invalid start date")?;

    let records: Vec<DailyRecord> = (0..60u64)
        .map(|i| {
            let date = start.checked_add_days(Days::new(i)).unwrap_or(start);
            let record = DailyRecord::new(date).with_intake(intake.sample(&mut rng).round());
            // Skip a weigh-in every ninth day.
            if i % 9 == 8 {
                record
            } else {
                record.with_mass(84.0 - 0.04 * i as f64 + mass_noise.sample(&mut rng))
            }
        })
        .collect();

    let report = TrendReport::build(&records, &ReportConfig::default())?;
    println!("{report}");

    if let Some(latest) = report.latest() {
        println!(
            "Latest: {:.2} kg trend, {:+.2} kg over 7 days, estimated TDEE {:.0} kcal",
            latest.trend_mass, latest.short_mass_change, latest.energy_balance
        );
    }

    let days = smoothed_days(&records, 0.3)?;
    let filled = days
        .iter()
        .filter(|d| d.mass.is_none() && d.smoothed_mass.is_some())
        .count();
    println!("Trend values filled in for {filled} days without a weigh-in");

    Ok(())
}
