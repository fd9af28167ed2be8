//! The fixed observation point.

use chrono_tz::Tz;

/// Geographic location with the zone its calendar is read in.
///
/// Built once from configuration and passed by reference to every
/// calculation; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name, e.g. "Wassenberg (DE)"
    pub name: String,
    /// Latitude in degrees (-90 to +90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f64,
    /// Time zone that defines the civil date at this location
    pub timezone: Tz,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, timezone: Tz) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
            timezone,
        }
    }

    /// Coordinates formatted the way the metadata line shows them.
    pub fn coordinates_label(&self) -> String {
        format!("Lat {:.4}, Lon {:.4}", self.latitude, self.longitude)
    }
}
