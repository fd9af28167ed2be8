//! Duration and localized date/time formatting.

use anyhow::{Result, anyhow};
use chrono::{DateTime, Locale, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::{DATE_FORMAT, MILLIS_PER_MINUTE, PLACEHOLDER, TIME_FORMAT};
use crate::geo::calendar::reference_for_date;

/// Round milliseconds to whole minutes, halves toward positive infinity.
///
/// `-90_000` (−1.5 min) gives `-1`, `90_000` gives `2`.
pub fn rounded_minutes(ms: i64) -> i64 {
    let minutes = ms.div_euclid(MILLIS_PER_MINUTE);
    let remainder = ms.rem_euclid(MILLIS_PER_MINUTE);
    if remainder * 2 >= MILLIS_PER_MINUTE {
        minutes + 1
    } else {
        minutes
    }
}

/// Format a signed duration as `H:MM h`, e.g. `8:17 h` or `-0:01 h`.
pub fn fmt_duration(ms: i64) -> String {
    let total_minutes = rounded_minutes(ms);
    let sign = if total_minutes < 0 { "-" } else { "" };
    let minutes = total_minutes.unsigned_abs();
    format!("{sign}{}:{:02} h", minutes / 60, minutes % 60)
}

/// Like [`fmt_duration`] but with an explicit `+` for non-negative values.
pub fn fmt_signed_duration(ms: i64) -> String {
    if ms >= 0 {
        format!("+{}", fmt_duration(ms))
    } else {
        fmt_duration(ms)
    }
}

/// Parse a locale name such as `de_DE` (or `de-DE`).
pub fn parse_locale(name: &str) -> Result<Locale> {
    let normalized = name.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| anyhow!("Unknown locale '{name}'"))
}

/// Formats instants in a fixed zone and locale, independent of the host's zone.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeFormatter {
    tz: Tz,
    locale: Locale,
}

impl DateTimeFormatter {
    pub fn new(tz: Tz, locale: Locale) -> Self {
        Self { tz, locale }
    }

    /// Long date, e.g. "Freitag, 16.10.2026".
    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.tz)
            .format_localized(DATE_FORMAT, self.locale)
            .to_string()
    }

    /// Long date of a civil date, without any zone conversion.
    pub fn format_civil_date(&self, date: NaiveDate) -> String {
        reference_for_date(date)
            .format_localized(DATE_FORMAT, self.locale)
            .to_string()
    }

    /// Time of day, e.g. "08:12:33".
    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.tz)
            .format_localized(TIME_FORMAT, self.locale)
            .to_string()
    }

    pub fn format_optional_time(&self, instant: Option<DateTime<Utc>>) -> String {
        instant
            .map(|instant| self.format_time(instant))
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}
