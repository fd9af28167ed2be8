//! Render cycle: compute today's and the shortest day's daylight, format it,
//! and write every slot of the view.
//!
//! A render is self-contained. It reads the clock once, makes at most 367
//! provider calls (today plus every date of the year) and keeps no state
//! between runs, so [`Renderer::initialize`] and [`Renderer::refresh`] can be
//! called any number of times and produce the same output for the same
//! instant.

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::constants::PLACEHOLDER;
use crate::display::{DateTimeFormatter, DisplaySink, Slot, fmt_duration, fmt_signed_duration};
use crate::geo::calendar::{reference_instant, year_in_zone};
use crate::geo::{DayTimes, ShortestDayResult, SunTimesProvider, scan_year};
use crate::time_source::TimeSource;

/// Unformatted values of one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaylightReport {
    pub now: DateTime<Utc>,
    /// Current year in the location's zone
    pub year: i32,
    pub today: DayTimes,
    pub shortest: Option<ShortestDayResult>,
    pub days_scanned: usize,
    pub days_skipped: usize,
}

impl DaylightReport {
    pub fn today_ms(&self) -> Option<i64> {
        self.today.daylight_ms()
    }

    /// Today's daylight minus the shortest day's, when both are known.
    pub fn difference_ms(&self) -> Option<i64> {
        // A missing today is not read as zero daylight; the slot shows the placeholder
        Some(self.today_ms()? - self.shortest?.daylight_ms)
    }
}

pub struct Renderer<'a> {
    settings: &'a Settings,
    provider: &'a dyn SunTimesProvider,
    clock: &'a dyn TimeSource,
    formatter: DateTimeFormatter,
    debug_enabled: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(
        settings: &'a Settings,
        provider: &'a dyn SunTimesProvider,
        clock: &'a dyn TimeSource,
    ) -> Self {
        Self {
            settings,
            provider,
            clock,
            formatter: DateTimeFormatter::new(settings.location.timezone, settings.locale),
            debug_enabled: false,
        }
    }

    /// Log scan statistics on every render.
    pub fn with_debug(mut self, debug_enabled: bool) -> Self {
        self.debug_enabled = debug_enabled;
        self
    }

    /// First render after startup.
    pub fn initialize(&self, sink: &mut dyn DisplaySink) -> Result<()> {
        self.render(sink)
    }

    /// Render again on request.
    pub fn refresh(&self, sink: &mut dyn DisplaySink) -> Result<()> {
        self.render(sink)
    }

    /// Compute all values for the clock's current instant.
    pub fn compute(&self) -> DaylightReport {
        let location = &self.settings.location;
        let now = self.clock.now();
        let year = year_in_zone(now, location.timezone);

        let today = self
            .provider
            .sun_times(reference_instant(now, location.timezone), location);
        let scan = scan_year(self.provider, location, year);

        DaylightReport {
            now,
            year,
            today,
            shortest: scan.best,
            days_scanned: scan.days_scanned,
            days_skipped: scan.days_skipped,
        }
    }

    /// Formatted value of every slot for `report`.
    pub fn format(&self, report: &DaylightReport) -> Vec<(Slot, String)> {
        let placeholder = || PLACEHOLDER.to_string();
        let shortest = report.shortest.as_ref();

        vec![
            (Slot::Date, self.formatter.format_date(report.now)),
            (
                Slot::Sunrise,
                self.formatter.format_optional_time(report.today.sunrise),
            ),
            (
                Slot::Sunset,
                self.formatter.format_optional_time(report.today.sunset),
            ),
            (
                Slot::DayLength,
                report.today_ms().map(fmt_duration).unwrap_or_else(placeholder),
            ),
            (
                Slot::ShortestDate,
                shortest
                    .map(|day| self.formatter.format_civil_date(day.date))
                    .unwrap_or_else(placeholder),
            ),
            (
                Slot::ShortestLength,
                shortest
                    .map(|day| fmt_duration(day.daylight_ms))
                    .unwrap_or_else(placeholder),
            ),
            (
                Slot::Difference,
                report
                    .difference_ms()
                    .map(fmt_signed_duration)
                    .unwrap_or_else(placeholder),
            ),
            (Slot::Meta, self.meta_line()),
        ]
    }

    /// "Wassenberg (DE) · Lat 51.1013, Lon 6.1555 · Zeitzone Europe/Berlin"
    pub fn meta_line(&self) -> String {
        let location = &self.settings.location;
        format!(
            "{} · {} · {} {}",
            location.name,
            location.coordinates_label(),
            self.settings.timezone_label(),
            location.timezone
        )
    }

    /// Compute, format and write every slot, then flush the sink.
    pub fn render(&self, sink: &mut dyn DisplaySink) -> Result<()> {
        let report = self.compute();

        if self.debug_enabled {
            self.log_report(&report);
        }

        for (slot, value) in self.format(&report) {
            sink.set(slot, &value);
        }
        sink.flush()
    }

    fn log_report(&self, report: &DaylightReport) {
        log_pipe!();
        log_debug!("Render details:");
        log_indented!("Now (UTC): {}", report.now.format("%Y-%m-%d %H:%M:%S"));
        log_indented!("Year in {}: {}", self.settings.location.timezone, report.year);
        log_indented!(
            "Days scanned: {}, without sunrise/sunset: {}",
            report.days_scanned,
            report.days_skipped
        );
        match report.shortest {
            Some(day) => log_indented!(
                "Shortest day: {} ({} ms)",
                day.date.format("%Y-%m-%d"),
                day.daylight_ms
            ),
            None => log_indented!("Shortest day: none found"),
        }
    }
}
