//! Shortest-day search over a calendar year.
//!
//! The minimum of daylight duration can land a day or two away from the
//! nominal winter solstice depending on location and leap-year phase, so the
//! whole year is scanned instead of assuming a fixed date.

use chrono::{DateTime, NaiveDate, Utc};

use super::calendar::{days_of_year, reference_for_date};
use super::solar::{DayTimes, SunTimesProvider};
use super::Location;

/// The day of a year with the least daylight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestDayResult {
    /// Civil date of the shortest day
    pub date: NaiveDate,
    /// 12:00 UTC on `date`, the instant handed to the provider
    pub reference: DateTime<Utc>,
    /// Daylight duration in milliseconds
    pub daylight_ms: i64,
    pub times: DayTimes,
}

/// Outcome of scanning one year, including bookkeeping for debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearScan {
    pub year: i32,
    pub best: Option<ShortestDayResult>,
    /// Dates asked about (365 or 366)
    pub days_scanned: usize,
    /// Dates without sunrise or sunset
    pub days_skipped: usize,
}

/// Scan every date of `year` and keep the one with minimal daylight.
///
/// Ties keep the earliest date. Dates without a sunrise or sunset never
/// become the result; if every date lacks one, `best` is `None`.
pub fn scan_year(provider: &dyn SunTimesProvider, location: &Location, year: i32) -> YearScan {
    let mut best: Option<ShortestDayResult> = None;
    let mut days_scanned = 0;
    let mut days_skipped = 0;

    for date in days_of_year(year) {
        days_scanned += 1;
        let reference = reference_for_date(date);
        let times = provider.sun_times(reference, location);

        let Some(daylight_ms) = times.daylight_ms() else {
            days_skipped += 1;
            continue;
        };

        if best.is_none_or(|current| daylight_ms < current.daylight_ms) {
            best = Some(ShortestDayResult {
                date,
                reference,
                daylight_ms,
                times,
            });
        }
    }

    YearScan {
        year,
        best,
        days_scanned,
        days_skipped,
    }
}

/// Shortest day of `year`, or `None` if no date has both sunrise and sunset.
pub fn scan_shortest_day(
    provider: &dyn SunTimesProvider,
    location: &Location,
    year: i32,
) -> Option<ShortestDayResult> {
    scan_year(provider, location, year).best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::solar::{MockSunTimesProvider, SunriseProvider};
    use chrono::{Datelike, Duration};
    use chrono_tz::Tz;

    fn location() -> Location {
        Location::new("Wassenberg (DE)", 51.1013, 6.1555, Tz::Europe__Berlin)
    }

    /// A day with exactly `minutes` of daylight.
    fn times_for(reference: DateTime<Utc>, minutes: i64) -> DayTimes {
        let sunrise = reference - Duration::hours(4);
        DayTimes::new(sunrise, sunrise + Duration::minutes(minutes))
    }

    #[test]
    fn test_all_undefined_year_has_no_result() {
        let mut provider = MockSunTimesProvider::new();
        provider
            .expect_sun_times()
            .times(365)
            .returning(|_, _| DayTimes::undefined());

        let scan = scan_year(&provider, &location(), 2026);
        assert_eq!(scan.best, None);
        assert_eq!(scan.days_scanned, 365);
        assert_eq!(scan.days_skipped, 365);
    }

    #[test]
    fn test_leap_year_queries_366_days() {
        let mut provider = MockSunTimesProvider::new();
        provider
            .expect_sun_times()
            .times(366)
            .returning(|reference, _| times_for(reference, 600));

        let scan = scan_year(&provider, &location(), 2024);
        assert_eq!(scan.days_scanned, 366);
        assert_eq!(scan.days_skipped, 0);
    }

    #[test]
    fn test_references_are_midday_utc_of_each_date() {
        let mut provider = MockSunTimesProvider::new();
        provider
            .expect_sun_times()
            .withf(|reference, location| {
                reference.format("%H:%M:%S").to_string() == "12:00:00"
                    && reference.year() == 2026
                    && location.name == "Wassenberg (DE)"
            })
            .times(365)
            .returning(|reference, _| times_for(reference, 600));

        scan_year(&provider, &location(), 2026);
    }

    #[test]
    fn test_tie_keeps_earliest_date() {
        let mut provider = MockSunTimesProvider::new();
        provider.expect_sun_times().returning(|reference, _| {
            let minutes = match (reference.month(), reference.day()) {
                (3, 3) | (11, 20) => 400,
                _ => 500,
            };
            times_for(reference, minutes)
        });

        let best = scan_shortest_day(&provider, &location(), 2026).unwrap();
        assert_eq!(best.date, NaiveDate::from_ymd_opt(2026, 3, 3).unwrap());
        assert_eq!(best.daylight_ms, 400 * 60_000);
    }

    #[test]
    fn test_undefined_days_are_skipped() {
        // December is polar night; the shortest defined day is Nov 30
        let mut provider = MockSunTimesProvider::new();
        provider.expect_sun_times().returning(|reference, _| {
            if reference.month() == 12 {
                DayTimes::undefined()
            } else {
                times_for(reference, 1000 - reference.ordinal() as i64)
            }
        });

        let scan = scan_year(&provider, &location(), 2026);
        assert_eq!(scan.days_skipped, 31);
        let best = scan.best.unwrap();
        assert_eq!(best.date, NaiveDate::from_ymd_opt(2026, 11, 30).unwrap());
        assert_eq!(best.reference, reference_for_date(best.date));
    }

    #[test]
    fn test_real_provider_finds_december_solstice() {
        let best = scan_shortest_day(&SunriseProvider, &location(), 2026).unwrap();
        assert_eq!(best.date.year(), 2026);
        assert_eq!(best.date.month(), 12);
        assert!((19..=23).contains(&best.date.day()), "got {}", best.date);
        assert_eq!(best.times.daylight_ms(), Some(best.daylight_ms));
    }

    #[test]
    fn test_real_provider_southern_hemisphere_finds_june() {
        let sydney = Location::new("Sydney", -33.8688, 151.2093, Tz::Australia__Sydney);
        let best = scan_shortest_day(&SunriseProvider, &sydney, 2026).unwrap();
        assert_eq!(best.date.month(), 6);
    }
}
