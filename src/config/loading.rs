//! Configuration loading.
//!
//! Finds the configuration file, creates a default one on first run,
//! applies `geo.toml` coordinate overrides and fills in defaults.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::validation::validate_config;
use super::{Config, GeoConfig};
use crate::constants::*;

/// Configuration directory chosen with `--config`, set once at startup
static CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Set the configuration directory for this process.
/// Returns an error if it was already set.
pub fn set_config_dir(dir: Option<String>) -> Result<()> {
    CONFIG_DIR
        .set(dir.map(PathBuf::from))
        .map_err(|_| anyhow::anyhow!("Configuration directory already set"))
}

/// The directory given with `--config`, if any.
pub fn get_custom_config_dir() -> Option<PathBuf> {
    CONFIG_DIR.get().and_then(|d| d.clone())
}

/// Path of `daylight.toml`: the custom directory if set, otherwise
/// `<config dir>/daylight/daylight.toml`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Some(custom_dir) = get_custom_config_dir() {
        return Ok(custom_dir.join(CONFIG_FILE_NAME));
    }

    let config_dir = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard location, creating a default file
/// if none exists yet.
pub fn load() -> Result<Config> {
    let config_path = get_config_path()?;

    if !config_path.exists() {
        super::builder::create_default_config(&config_path)
            .context("Failed to create default config during load")?;
    }

    load_from_path(&config_path)
}

/// Load configuration from a specific file. Does not create missing files.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        anyhow::bail!("Configuration file not found: {}", path.display());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    // geo.toml values are validated together with the main file
    load_geo_override_from_path(&mut config, path)?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    apply_defaults(&mut config);
    Ok(config)
}

/// Fill every unset field with its default.
pub(crate) fn apply_defaults(config: &mut Config) {
    if config.place.is_none() {
        config.place = Some(DEFAULT_PLACE.to_string());
    }
    if config.latitude.is_none() {
        config.latitude = Some(DEFAULT_LATITUDE);
    }
    if config.longitude.is_none() {
        config.longitude = Some(DEFAULT_LONGITUDE);
    }
    if config.timezone.is_none() {
        config.timezone = Some(DEFAULT_TIMEZONE.to_string());
    }
    if config.locale.is_none() {
        config.locale = Some(DEFAULT_LOCALE.to_string());
    }
}

/// Apply coordinates from a `geo.toml` next to `config_path`, if present.
///
/// The separate file keeps a private location out of a shared main config.
/// A malformed or unreadable `geo.toml` is reported and ignored.
pub(crate) fn load_geo_override_from_path(config: &mut Config, config_path: &Path) -> Result<()> {
    let Some(parent) = config_path.parent() else {
        return Ok(());
    };
    let geo_path = parent.join(GEO_FILE_NAME);

    if !geo_path.exists() {
        return Ok(());
    }

    match fs::read_to_string(&geo_path) {
        Ok(content) => match toml::from_str::<GeoConfig>(&content) {
            Ok(geo_config) => {
                if let Some(lat) = geo_config.latitude {
                    config.latitude = Some(lat);
                }
                if let Some(lon) = geo_config.longitude {
                    config.longitude = Some(lon);
                }
                config.geo_override = true;
            }
            Err(e) => {
                log_pipe!();
                log_warning!("Failed to parse geo.toml: {e}");
                log_decorated!("Using coordinates from main config.");
            }
        },
        Err(e) => {
            log_pipe!();
            log_warning!("Failed to read geo.toml: {e}");
            log_decorated!("Using coordinates from main config.");
        }
    }

    Ok(())
}
