//! Default configuration file creation.
//!
//! The generated file lists every setting with its default value and an
//! aligned comment, so users can edit it without consulting documentation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a commented default configuration to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    fs::write(path, default_config_content())
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration");
    log_indented!("{}", path.display());
    Ok(())
}

/// Content of the default configuration file.
pub fn default_config_content() -> String {
    let mut content = ConfigBuilder::new()
        .add_section("Location")
        .add_setting(
            "place",
            &format!("\"{DEFAULT_PLACE}\""),
            "Name shown in the metadata line",
        )
        .add_setting(
            "latitude",
            &format!("{DEFAULT_LATITUDE:.4}"),
            &format!("Latitude in degrees ({MINIMUM_LATITUDE} to {MAXIMUM_LATITUDE})"),
        )
        .add_setting(
            "longitude",
            &format!("{DEFAULT_LONGITUDE:.4}"),
            &format!("Longitude in degrees ({MINIMUM_LONGITUDE} to {MAXIMUM_LONGITUDE})"),
        )
        .add_setting(
            "timezone",
            &format!("\"{DEFAULT_TIMEZONE}\""),
            "IANA time zone for dates and times",
        )
        .add_section("Display")
        .add_setting(
            "locale",
            &format!("\"{DEFAULT_LOCALE}\""),
            "Locale for weekday names, e.g. \"de_DE\" or \"en_US\"",
        )
        .build();
    content.push('\n');
    content
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Comments line up one column after the longest setting
        let width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.chars().count()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut lines = Vec::new();
        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !lines.is_empty() {
                        lines.push(String::new());
                    }
                    lines.push(title);
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(width - line.chars().count());
                    lines.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_aligns_comments() {
        let content = ConfigBuilder::new()
            .add_section("A")
            .add_setting("x", "1", "short")
            .add_setting("longer", "\"value\"", "long")
            .add_section("B")
            .add_setting("y", "2", "other")
            .build();

        let expected = "#[A]\n\
                        x = 1            # short\n\
                        longer = \"value\" # long\n\
                        \n\
                        #[B]\n\
                        y = 2            # other";
        assert_eq!(content, expected);
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let config: crate::config::Config = toml::from_str(&default_config_content()).unwrap();
        assert_eq!(config.place.as_deref(), Some(DEFAULT_PLACE));
        assert_eq!(config.latitude, Some(DEFAULT_LATITUDE));
        assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
        assert_eq!(config.timezone.as_deref(), Some(DEFAULT_TIMEZONE));
        assert_eq!(config.locale.as_deref(), Some(DEFAULT_LOCALE));
    }
}
