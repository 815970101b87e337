/// Everything that can terminate a lookup.
///
/// Every variant is terminal for the current orchestration run: there are
/// no retries and no partial results. The orchestrator logs the error,
/// hands it to the rendering boundary as an alert, and stops.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please enter a location for search.")]
    InvalidInput,

    #[error("Location permission denied: {0}")]
    LocationDenied(String),

    #[error("Geolocation is not supported on this device.")]
    LocationUnavailable,

    #[error("Location request timed out.")]
    LocationTimeout,

    #[error("No geocoding match found for '{query}'.")]
    GeocodeNoResult { query: String },

    #[error("Geocoding result is missing usable coordinates.")]
    GeocodeMalformed,

    #[error("Geocoding request failed: {0}")]
    GeocodeTransport(String),

    #[error("Sunrise-sunset request failed with status {status}.")]
    Transport { status: u16 },

    /// The day-info request never produced an HTTP status (connection
    /// refused, DNS failure, ...).
    #[error("Sunrise-sunset service unreachable: {0}")]
    DayInfoUnreachable(#[source] reqwest::Error),

    #[error("Sunrise-sunset response is missing the 'results' field.")]
    UpstreamData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_matches_alert_text() {
        assert_eq!(
            Error::InvalidInput.to_string(),
            "Please enter a location for search."
        );
    }

    #[test]
    fn transport_error_carries_status() {
        let err = Error::Transport { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}
