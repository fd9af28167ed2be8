//! Configuration validation.
//!
//! Everything here is a fatal startup error: a location or zone that cannot
//! be used would make every rendered value wrong.

use anyhow::{Context, Result};
use chrono_tz::Tz;

use super::Config;
use crate::constants::*;
use crate::display::parse_locale;

/// Validate all fields that are present in `config`.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(place) = config.place.as_deref()
        && place.trim().is_empty()
    {
        anyhow::bail!("place must not be empty");
    }

    if let Some(lat) = config.latitude
        && !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat)
    {
        anyhow::bail!(
            "latitude must be between {} and {} degrees (got {})",
            MINIMUM_LATITUDE,
            MAXIMUM_LATITUDE,
            lat
        );
    }

    if let Some(lon) = config.longitude
        && !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between {} and {} degrees (got {})",
            MINIMUM_LONGITUDE,
            MAXIMUM_LONGITUDE,
            lon
        );
    }

    if let Some(tz) = config.timezone.as_deref() {
        parse_timezone(tz)?;
    }

    if let Some(locale) = config.locale.as_deref() {
        parse_locale(locale).context("locale is not supported")?;
    }

    Ok(())
}

/// Parse an IANA zone name such as "Europe/Berlin".
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim().parse::<Tz>().map_err(|_| {
        anyhow::anyhow!("Unknown time zone '{name}'. Use an IANA name like \"Europe/Berlin\"")
    })
}
