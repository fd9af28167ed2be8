//! Application-wide constants and defaults.

// # Location defaults

/// Display name of the default location.
pub const DEFAULT_PLACE: &str = "Wassenberg (DE)";

/// Default latitude in degrees (WGS84).
pub const DEFAULT_LATITUDE: f64 = 51.1013;

/// Default longitude in degrees (WGS84).
pub const DEFAULT_LONGITUDE: f64 = 6.1555;

/// IANA time zone all dates and times are displayed in.
pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Locale used for weekday and month names.
pub const DEFAULT_LOCALE: &str = "de_DE";

// # Validation limits

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

// # Display

/// Shown in place of any value that cannot be computed.
pub const PLACEHOLDER: &str = "–";

/// Long date format, e.g. "Freitag, 16.10.2026".
pub const DATE_FORMAT: &str = "%A, %d.%m.%Y";

/// Time-of-day format.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Format accepted by `--at`.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// # Calendar

/// UTC hour of the reference instant used for date-only calculations.
pub const REFERENCE_HOUR_UTC: u32 = 12;

/// Solar events further than this from the reference instant are discarded.
/// Near the antimeridian an event can land more than a day away.
pub const EVENT_WINDOW_HOURS: i64 = 36;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

// # Files

pub const CONFIG_DIR_NAME: &str = "daylight";
pub const CONFIG_FILE_NAME: &str = "daylight.toml";
pub const GEO_FILE_NAME: &str = "geo.toml";

// # Exit codes

pub const EXIT_FAILURE: i32 = 1;
