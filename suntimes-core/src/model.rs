use serde::{Deserialize, Serialize};

/// Which location the user asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationIntent {
    /// Use the device's current position.
    CurrentDevice,
    /// Geocode free-form text typed by the user.
    Text(String),
}

/// A latitude/longitude pair, in degrees.
///
/// Produced by the location resolver, consumed by the day-info client.
/// Lives only for the duration of one lookup; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Astronomical timings for one calendar day at one location.
///
/// All fields are carried verbatim as the upstream API sent them; no
/// local reformatting. `timezone` is `"Unknown"` when the API omitted it,
/// the remaining fields fall back to `"N/A"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub sunrise: String,
    pub sunset: String,
    pub dawn: String,
    pub dusk: String,
    pub day_length: String,
    pub solar_noon: String,
    pub timezone: String,
}
