//! Report assembly over daily records.
//!
//! ## Purpose
//!
//! This layer sits on top of the smoothing API and the metric calculators.
//! It turns a date-ordered list of daily records into the two views a
//! tracker serves: a tabular trend report and a per-day smoothed listing.
//!
//! ## Design notes
//!
//! * **Pure**: records arrive already loaded; nothing here touches storage,
//!   the network or the clock.
//! * **Caller policy**: neighbor counts and windows live in [`ReportConfig`],
//!   not in the core.
//! * **Time encoding**: `x` is the ordinal position of a day, not its date.

mod days;
mod records;
mod trend;

pub use days::{smoothed_days, SmoothedDay};
pub use records::{DailyRecord, ReportConfig};
pub use trend::{ReportRow, TrendReport};
