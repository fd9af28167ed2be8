//! Sunrise and sunset times for a single day.
//!
//! The astronomy itself lives in the `sunrise` crate; this module only adapts
//! it to [`SunTimesProvider`] so the rest of the application can be driven by
//! deterministic fixtures in tests.

use chrono::{DateTime, Duration, Utc};
use sunrise::{Coordinates, SolarDay, SolarEvent};

use super::Location;
use crate::constants::EVENT_WINDOW_HOURS;

/// Sunrise and sunset of one civil date.
///
/// Either instant is absent when the sun does not cross the horizon that day
/// (polar day or polar night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayTimes {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

impl DayTimes {
    pub fn new(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self {
            sunrise: Some(sunrise),
            sunset: Some(sunset),
        }
    }

    /// A day without sunrise or sunset.
    pub fn undefined() -> Self {
        Self::default()
    }

    /// Daylight duration (sunset − sunrise) in milliseconds, if both exist.
    pub fn daylight_ms(&self) -> Option<i64> {
        match (self.sunrise, self.sunset) {
            (Some(sunrise), Some(sunset)) => Some((sunset - sunrise).num_milliseconds()),
            _ => None,
        }
    }
}

/// Source of sunrise/sunset times.
///
/// `reference` is the 12:00 UTC instant of the civil date being asked about
/// (see [`crate::geo::calendar::reference_for_date`]); implementations only
/// look at its date.
#[cfg_attr(test, mockall::automock)]
pub trait SunTimesProvider {
    fn sun_times(&self, reference: DateTime<Utc>, location: &Location) -> DayTimes;
}

/// Provider backed by the `sunrise` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunriseProvider;

impl SunriseProvider {
    /// Accept an event only if it lands within [`EVENT_WINDOW_HOURS`] of the
    /// reference.
    ///
    /// For polar day/night the crate's hour angle is not a number and the
    /// resulting timestamp collapses to the epoch, which this rejects.
    fn plausible(event: DateTime<Utc>, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let window = Duration::hours(EVENT_WINDOW_HOURS);
        (event > reference - window && event < reference + window).then_some(event)
    }
}

impl SunTimesProvider for SunriseProvider {
    fn sun_times(&self, reference: DateTime<Utc>, location: &Location) -> DayTimes {
        let Some(coordinates) = Coordinates::new(location.latitude, location.longitude) else {
            return DayTimes::undefined();
        };

        let solar_day = SolarDay::new(coordinates, reference.date_naive());
        let sunrise = Self::plausible(solar_day.event_time(SolarEvent::Sunrise), reference);
        let sunset = Self::plausible(solar_day.event_time(SolarEvent::Sunset), reference);

        match (sunrise, sunset) {
            (Some(rise), Some(set)) if set > rise => DayTimes::new(rise, set),
            _ => DayTimes::undefined(),
        }
    }
}
