//! Civil date normalization.
//!
//! Date-only astronomical calculations need a day, not an instant. An
//! instant is first read as a civil date in the location's zone, and that
//! date is then pinned to 12:00 UTC. For zone offsets within ±12 hours midday
//! UTC falls on that same civil date, so daylight saving transitions never
//! shift the day being asked about.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::constants::REFERENCE_HOUR_UTC;

/// Civil date observed in `tz` at `instant`.
pub fn civil_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Calendar year observed in `tz` at `instant`.
pub fn year_in_zone(instant: DateTime<Utc>, tz: Tz) -> i32 {
    civil_date(instant, tz).year()
}

/// Reference instant (12:00:00 UTC) for a civil date.
pub fn reference_for_date(date: NaiveDate) -> DateTime<Utc> {
    // 12:00:00 is a valid time on every date
    let midday = date
        .and_hms_opt(REFERENCE_HOUR_UTC, 0, 0)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN));
    Utc.from_utc_datetime(&midday)
}

/// Reference instant for the civil date observed in `tz` at `instant`.
pub fn reference_instant(instant: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    reference_for_date(civil_date(instant, tz))
}

/// Every civil date of `year`, January 1 through December 31.
pub fn days_of_year(year: i32) -> impl Iterator<Item = NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, 1, 1);
    first
        .into_iter()
        .flat_map(|first| first.iter_days())
        .take_while(move |date| date.year() == year)
}
