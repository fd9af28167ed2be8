//! Shortest command: the day with the least daylight in a given year.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use super::CommandContext;
use crate::constants::PLACEHOLDER;
use crate::display::{DateTimeFormatter, fmt_duration};
use crate::geo::calendar::year_in_zone;
use crate::geo::{SunTimesProvider, SunriseProvider, YearScan, scan_year};

/// Formatted shortest day of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestDaySummary {
    pub year: i32,
    #[serde(rename = "minDay")]
    pub date: String,
    pub sunrise: String,
    pub sunset: String,
    #[serde(rename = "minLen")]
    pub day_length: String,
    /// Dates in the year without sunrise or sunset
    #[serde(rename = "skippedDays")]
    pub skipped_days: usize,
    /// False when no date of the year has both a sunrise and a sunset
    #[serde(skip)]
    pub found: bool,
}

impl ShortestDaySummary {
    /// Without a qualifying date every formatted field is the placeholder.
    pub fn from_scan(scan: &YearScan, formatter: &DateTimeFormatter) -> Self {
        match scan.best {
            Some(best) => Self {
                year: scan.year,
                date: formatter.format_civil_date(best.date),
                sunrise: formatter.format_optional_time(best.times.sunrise),
                sunset: formatter.format_optional_time(best.times.sunset),
                day_length: fmt_duration(best.daylight_ms),
                skipped_days: scan.days_skipped,
                found: true,
            },
            None => Self {
                year: scan.year,
                date: PLACEHOLDER.to_string(),
                sunrise: PLACEHOLDER.to_string(),
                sunset: PLACEHOLDER.to_string(),
                day_length: PLACEHOLDER.to_string(),
                skipped_days: scan.days_skipped,
                found: false,
            },
        }
    }
}

pub fn run_shortest_command(context: &CommandContext, year: Option<i32>) -> Result<()> {
    let summary = summarize(context, &SunriseProvider, year);

    if context.options.json {
        let mut stdout = io::stdout();
        serde_json::to_writer_pretty(&mut stdout, &summary)
            .context("Failed to write JSON output")?;
        writeln!(stdout).context("Failed to write JSON output")?;
        return Ok(());
    }

    if summary.found {
        log_block_start!("Shortest day of {}: {}", summary.year, summary.date);
        log_indented!("Sunrise:     {}", summary.sunrise);
        log_indented!("Sunset:      {}", summary.sunset);
        log_indented!("Day length:  {}", summary.day_length);
        if summary.skipped_days > 0 {
            log_indented!("Days without sunrise or sunset: {}", summary.skipped_days);
        }
    } else {
        log_pipe!();
        log_warning!(
            "No day in {} has both a sunrise and a sunset here",
            summary.year
        );
    }
    context.finish();
    Ok(())
}

/// Scan `year` (default: the current year in the location's zone).
pub(crate) fn summarize(
    context: &CommandContext,
    provider: &dyn SunTimesProvider,
    year: Option<i32>,
) -> ShortestDaySummary {
    let location = &context.settings.location;
    let year = year.unwrap_or_else(|| year_in_zone(context.clock.now(), location.timezone));

    let scan = scan_year(provider, location, year);
    if context.options.debug_enabled {
        log_pipe!();
        log_debug!(
            "Scanned {} days of {year}, {} without sunrise/sunset",
            scan.days_scanned,
            scan.days_skipped
        );
    }

    let formatter = DateTimeFormatter::new(location.timezone, context.settings.locale);
    ShortestDaySummary::from_scan(&scan, &formatter)
}

/// Display detailed help for the shortest command
pub fn display_help() {
    log_version!();
    log_block_start!("shortest - Find the day with the least daylight");
    log_block_start!("Usage: daylight [OPTIONS] shortest [YEAR]");
    log_block_start!("Arguments:");
    log_indented!("YEAR  Year to scan (1-9999)");
    log_indented!("      If omitted, the current year in the configured zone");
    log_block_start!("Description:");
    log_indented!("Computes sunrise and sunset for every date of the year and");
    log_indented!("reports the date with the shortest daylight. On ties the");
    log_indented!("earliest date wins. Dates without a sunrise or sunset (polar");
    log_indented!("night or day) are skipped.");
    log_block_start!("Examples:");
    log_indented!("daylight shortest");
    log_indented!("daylight shortest 2027 --json");
    log_end!();
}
