//! Location, calendar and sunrise/sunset calculations.
//!
//! ## Module Structure
//!
//! - [`location`]: The fixed observation point
//! - [`calendar`]: Civil dates in the location's zone and their midday-UTC references
//! - [`solar`]: Per-day sunrise/sunset through the [`SunTimesProvider`] seam
//! - [`scan`]: Search for the year's shortest day

pub mod calendar;
pub mod location;
pub mod scan;
pub mod solar;

pub use location::Location;
pub use scan::{ShortestDayResult, YearScan, scan_shortest_day, scan_year};
pub use solar::{DayTimes, SunTimesProvider, SunriseProvider};
