//! Command-line command handlers for daylight.
//!
//! Each command lives in its own submodule. [`CommandContext`] carries what
//! every rendering command needs: validated settings, the clock and the
//! parsed options.

pub mod help;
pub mod shortest;
pub mod show;
pub mod watch;

use anyhow::Result;
use std::io;

use crate::args::RunOptions;
use crate::config::{self, Config, Settings};
use crate::display::{DisplaySink, JsonSink, TerminalSink};
use crate::geo::SunTimesProvider;
use crate::logger::Log;
use crate::render::Renderer;
use crate::time_source::{FixedTimeSource, RealTimeSource, TimeSource, parse_datetime_in_tz};

/// Everything a rendering command runs with.
pub struct CommandContext {
    pub settings: Settings,
    pub clock: Box<dyn TimeSource>,
    pub options: RunOptions,
}

impl CommandContext {
    /// Load configuration and set up the clock for `options`.
    ///
    /// With `--json` all log output is switched off so stdout carries only
    /// JSON. Otherwise the version header is printed first.
    pub fn prepare(options: RunOptions) -> Result<Self> {
        Log::set_enabled(!options.json);

        config::set_config_dir(options.config_dir.clone())?;

        log_version!();
        if options.debug_enabled {
            log_pipe!();
            log_debug!("Debug mode enabled - showing configuration and scan details");
        }

        let config = Config::load()?;
        let settings = Settings::from_config(&config)?;

        if options.debug_enabled {
            config.log_config(&settings);
        }

        let clock = build_clock(options.at.as_deref(), &settings)?;
        if options.debug_enabled && clock.is_fixed() {
            log_pipe!();
            log_debug!("Using fixed time {} UTC", clock.now().format("%Y-%m-%d %H:%M:%S"));
        }

        Ok(Self {
            settings,
            clock,
            options,
        })
    }

    /// Build a context from parts that are already resolved.
    pub fn from_parts(settings: Settings, clock: Box<dyn TimeSource>, options: RunOptions) -> Self {
        Self {
            settings,
            clock,
            options,
        }
    }

    pub fn renderer<'a>(&'a self, provider: &'a dyn SunTimesProvider) -> Renderer<'a> {
        Renderer::new(&self.settings, provider, self.clock.as_ref())
            .with_debug(self.options.debug_enabled)
    }

    /// The sink selected by `--json`.
    pub fn sink(&self) -> Box<dyn DisplaySink> {
        if self.options.json {
            Box::new(JsonSink::new(io::stdout()))
        } else {
            Box::new(TerminalSink::new())
        }
    }

    /// Close the decorated output; JSON output has nothing to close.
    pub fn finish(&self) {
        if !self.options.json {
            log_end!();
        }
    }
}

/// System clock, or the wall-clock time given with `--at` in the
/// configured zone.
pub fn build_clock(at: Option<&str>, settings: &Settings) -> Result<Box<dyn TimeSource>> {
    match at {
        Some(at) => {
            let instant = parse_datetime_in_tz(at, settings.location.timezone)
                .map_err(|e| anyhow::anyhow!("Invalid value for --at '{at}': {e}"))?;
            Ok(Box::new(FixedTimeSource::new(instant)))
        }
        None => Ok(Box::new(RealTimeSource)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_build_clock_uses_configured_zone() {
        let settings = Settings::default();
        let clock = build_clock(Some("2026-12-21 09:30:00"), &settings).unwrap();
        assert!(clock.is_fixed());
        // Berlin is UTC+1 in December
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2026, 12, 21, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_build_clock_without_at_is_real() {
        let clock = build_clock(None, &Settings::default()).unwrap();
        assert!(!clock.is_fixed());
    }

    #[test]
    fn test_build_clock_rejects_skipped_hour() {
        let err = build_clock(Some("2026-03-29 02:15:00"), &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("--at"));
    }

    #[test]
    fn test_context_renderer_uses_context_clock() {
        let clock = build_clock(Some("2026-12-21 09:30:00"), &Settings::default()).unwrap();
        let context = CommandContext::from_parts(
            Settings::default(),
            clock,
            RunOptions {
                json: true,
                ..RunOptions::default()
            },
        );
        let renderer = context.renderer(&crate::geo::SunriseProvider);
        let report = renderer.compute();
        assert_eq!(report.year, 2026);
    }
}
