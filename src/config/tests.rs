use super::loading::apply_defaults;
use super::*;
use crate::constants::test_constants::*;
use crate::constants::{
    DEFAULT_LATITUDE, DEFAULT_LOCALE, DEFAULT_LONGITUDE, DEFAULT_PLACE, DEFAULT_TIMEZONE,
};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn create_test_config(
    place: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<&str>,
    locale: Option<&str>,
) -> Config {
    Config {
        place: place.map(str::to_string),
        latitude,
        longitude,
        timezone: timezone.map(str::to_string),
        locale: locale.map(str::to_string),
        geo_override: false,
    }
}

fn standard_config() -> Config {
    create_test_config(
        Some(TEST_PLACE),
        Some(TEST_LATITUDE),
        Some(TEST_LONGITUDE),
        Some(TEST_TIMEZONE),
        Some(TEST_LOCALE),
    )
}

#[test]
fn test_config_validation_basic() {
    assert!(validate_config(&standard_config()).is_ok());
    assert!(validate_config(&Config::default()).is_ok());
}

#[test]
fn test_config_validation_coordinate_bounds() {
    let mut config = standard_config();

    config.latitude = Some(90.0);
    config.longitude = Some(-180.0);
    assert!(validate_config(&config).is_ok());

    config.latitude = Some(90.5);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("latitude"));

    config.latitude = Some(0.0);
    config.longitude = Some(181.0);
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("longitude"));
}

#[test]
fn test_config_validation_timezone_and_locale() {
    let mut config = standard_config();
    config.timezone = Some("Mars/Olympus_Mons".to_string());
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("Mars/Olympus_Mons"));

    let mut config = standard_config();
    config.locale = Some("xx_YY".to_string());
    assert!(validate_config(&config).is_err());

    let mut config = standard_config();
    config.place = Some("   ".to_string());
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_apply_defaults_fills_only_missing_fields() {
    let mut config = create_test_config(Some("Elsewhere"), None, Some(1.5), None, None);
    apply_defaults(&mut config);

    assert_eq!(config.place.as_deref(), Some("Elsewhere"));
    assert_eq!(config.latitude, Some(DEFAULT_LATITUDE));
    assert_eq!(config.longitude, Some(1.5));
    assert_eq!(config.timezone.as_deref(), Some(DEFAULT_TIMEZONE));
    assert_eq!(config.locale.as_deref(), Some(DEFAULT_LOCALE));
}

#[test]
fn test_settings_from_config() {
    let settings = Settings::from_config(&standard_config()).unwrap();
    assert_eq!(settings.location.name, TEST_PLACE);
    assert_eq!(settings.location.latitude, TEST_LATITUDE);
    assert_eq!(settings.location.timezone, chrono_tz::Europe::Berlin);
    assert_eq!(settings.timezone_label(), "Zeitzone");

    let english = create_test_config(None, None, None, Some("America/Chicago"), Some("en_US"));
    let settings = Settings::from_config(&english).unwrap();
    assert_eq!(settings.location.name, DEFAULT_PLACE);
    assert_eq!(settings.location.timezone, chrono_tz::America::Chicago);
    assert_eq!(settings.timezone_label(), "Time zone");
}

#[test]
fn test_settings_from_invalid_config_fails() {
    let config = create_test_config(None, None, None, Some("Nowhere/Special"), None);
    assert!(Settings::from_config(&config).is_err());
}

#[test]
fn test_load_from_path_with_partial_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("daylight.toml");
    fs::write(&path, "place = \"Aachen\"\nlatitude = 50.7753\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.place.as_deref(), Some("Aachen"));
    assert_eq!(config.latitude, Some(50.7753));
    assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
    assert_eq!(config.timezone.as_deref(), Some(DEFAULT_TIMEZONE));
    assert!(!config.geo_override);
}

#[test]
fn test_load_from_path_rejects_invalid_values() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("daylight.toml");

    fs::write(&path, "latitude = 123.0\n").unwrap();
    assert!(load_from_path(&path).is_err());

    fs::write(&path, "timezone = \"Atlantis/Capital\"\n").unwrap();
    assert!(load_from_path(&path).is_err());

    fs::write(&path, "latitude = \"north\"\n").unwrap();
    assert!(load_from_path(&path).is_err());

    fs::write(&path, "transition_mode = \"geo\"\n").unwrap();
    assert!(load_from_path(&path).is_err());
}

#[test]
fn test_load_from_missing_path_fails() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.toml");
    let err = load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
#[serial]
fn test_geo_toml_overrides_coordinates() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("daylight.toml");
    fs::write(&path, default_config_content()).unwrap();
    fs::write(
        temp_dir.path().join("geo.toml"),
        "latitude = 48.137154\nlongitude = 11.576124\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.latitude, Some(48.137154));
    assert_eq!(config.longitude, Some(11.576124));
    assert!(config.geo_override);
    // Other fields still come from the main file
    assert_eq!(config.place.as_deref(), Some(DEFAULT_PLACE));
}

#[test]
#[serial]
fn test_malformed_geo_toml_is_ignored() {
    crate::logger::Log::start_capture();

    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("daylight.toml");
    fs::write(&path, "latitude = 10.0\n").unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "latitude = [oops\n").unwrap();

    let config = load_from_path(&path);
    let output = crate::logger::Log::take_capture();

    let config = config.unwrap();
    assert_eq!(config.latitude, Some(10.0));
    assert!(!config.geo_override);
    assert!(output.contains("Failed to parse geo.toml"));
    assert!(output.contains("┣ Using coordinates from main config.\n"));
}

#[test]
#[serial]
fn test_geo_toml_values_are_validated() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("daylight.toml");
    fs::write(&path, "").unwrap();
    fs::write(temp_dir.path().join("geo.toml"), "longitude = 200.0\n").unwrap();

    assert!(load_from_path(&path).is_err());
}

#[test]
#[serial]
fn test_config_load_default_creation() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("daylight").join("daylight.toml");

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    crate::logger::Log::start_capture();
    let result = Config::load();
    let _ = crate::logger::Log::take_capture();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    let config = result.unwrap();
    assert!(config_path.exists());
    assert_eq!(config.place.as_deref(), Some(DEFAULT_PLACE));
    assert_eq!(config.locale.as_deref(), Some(DEFAULT_LOCALE));
}
