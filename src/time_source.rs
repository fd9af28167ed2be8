//! Clock abstraction.
//!
//! Rendering asks a [`TimeSource`] for "now" instead of reading the system
//! clock directly, so `--at` and tests can pin the instant.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::DATETIME_INPUT_FORMAT;

pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;

    /// Whether `now` is pinned rather than read from the system clock.
    fn is_fixed(&self) -> bool {
        false
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }

    fn is_fixed(&self) -> bool {
        true
    }
}

/// Parse "YYYY-MM-DD HH:MM:SS" as wall-clock time in `tz`.
///
/// Times that do not exist or are ambiguous in `tz` (daylight saving
/// transitions) are rejected.
pub fn parse_datetime_in_tz(s: &str, tz: Tz) -> Result<DateTime<Utc>, String> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), DATETIME_INPUT_FORMAT)
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))?;

    tz.from_local_datetime(&naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("Ambiguous or invalid time in timezone {tz}"))
}
