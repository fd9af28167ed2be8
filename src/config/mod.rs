//! Configuration for the observed location and display locale.
//!
//! Settings live in `daylight.toml`, searched in this order:
//! 1. the directory passed with `--config`
//! 2. **XDG_CONFIG_HOME**/daylight/daylight.toml (or the platform equivalent)
//!
//! A commented default file is written on first run:
//!
//! ```toml
//! #[Location]
//! place = "Wassenberg (DE)"      # Name shown in the metadata line
//! latitude = 51.1013             # Latitude in degrees (-90 to 90)
//! longitude = 6.1555             # Longitude in degrees (-180 to 180)
//! timezone = "Europe/Berlin"     # IANA time zone for dates and times
//!
//! #[Display]
//! locale = "de_DE"               # Locale for weekday names
//! ```
//!
//! An optional `geo.toml` in the same directory overrides `latitude` and
//! `longitude`, so coordinates can stay out of a shared configuration.
//!
//! Invalid values (coordinates out of range, unknown zone or locale) are
//! fatal: [`Settings::from_config`] and [`load`] return an error and the
//! application stops before rendering anything.

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::{Context, Result};
use chrono::Locale;
use serde::Deserialize;

use crate::constants::*;
use crate::display::parse_locale;
use crate::geo::Location;

pub use builder::{create_default_config, default_config_content};
pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};
pub use validation::{parse_timezone, validate_config};

/// Coordinates stored separately in `geo.toml`.
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GeoConfig {
    pub(crate) latitude: Option<f64>,
    pub(crate) longitude: Option<f64>,
}

/// Raw configuration as read from `daylight.toml`.
///
/// Every field is optional; [`load`] fills the gaps with defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display name of the location
    pub place: Option<String>,
    /// Latitude in degrees (-90 to +90)
    pub latitude: Option<f64>,
    /// Longitude in degrees (-180 to +180)
    pub longitude: Option<f64>,
    /// IANA time zone, e.g. "Europe/Berlin"
    pub timezone: Option<String>,
    /// Locale for localized names, e.g. "de_DE"
    pub locale: Option<String>,

    /// Set when coordinates came from geo.toml
    #[serde(skip)]
    pub geo_override: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        load()
    }

    /// Log where the configuration came from and what it resolved to.
    pub fn log_config(&self, settings: &Settings) {
        let source = get_config_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| "defaults".to_string());

        log_block_start!("Loaded configuration");
        log_indented!("Source: {source}");
        if self.geo_override {
            log_indented!("Coordinates from {GEO_FILE_NAME}");
        }
        log_indented!("Place: {}", settings.location.name);
        log_indented!("{}", settings.location.coordinates_label());
        log_indented!("Time zone: {}", settings.location.timezone);
        log_indented!("Locale: {}", settings.locale_name);
    }
}

/// Validated, immutable settings used by every component.
#[derive(Debug, Clone)]
pub struct Settings {
    pub location: Location,
    pub locale: Locale,
    /// Locale name as configured, e.g. "de_DE"
    pub locale_name: String,
}

impl Settings {
    /// Build settings from a configuration, using defaults for unset fields.
    pub fn from_config(config: &Config) -> Result<Self> {
        validate_config(config)?;

        let timezone = parse_timezone(config.timezone.as_deref().unwrap_or(DEFAULT_TIMEZONE))?;
        let locale_name = config.locale.as_deref().unwrap_or(DEFAULT_LOCALE).trim();
        let locale = parse_locale(locale_name).context("locale is not supported")?;

        let location = Location::new(
            config.place.as_deref().unwrap_or(DEFAULT_PLACE).trim(),
            config.latitude.unwrap_or(DEFAULT_LATITUDE),
            config.longitude.unwrap_or(DEFAULT_LONGITUDE),
            timezone,
        );

        Ok(Self {
            location,
            locale,
            locale_name: locale_name.to_string(),
        })
    }

    /// Label for the zone in the metadata line, in the configured language.
    pub fn timezone_label(&self) -> &'static str {
        if self.locale_name.starts_with("de") {
            "Zeitzone"
        } else {
            "Time zone"
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            location: Location::new(
                DEFAULT_PLACE,
                DEFAULT_LATITUDE,
                DEFAULT_LONGITUDE,
                chrono_tz::Europe::Berlin,
            ),
            locale: Locale::de_DE,
            locale_name: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
