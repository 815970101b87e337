use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Error,
    geocode::GeocodeClient,
    model::{Coordinates, LocationIntent},
};

/// One-shot access to the device's current position.
///
/// Platform backends (GeoClue, CoreLocation, Windows.Devices.Geolocation)
/// implement this; the library itself ships only [`NoDeviceService`].
#[async_trait]
pub trait DevicePosition: Send + Sync + Debug {
    /// Current position in degrees, or why it couldn't be read:
    /// [`Error::LocationUnavailable`], [`Error::LocationDenied`] or
    /// [`Error::LocationTimeout`].
    async fn current_position(&self) -> Result<Coordinates, Error>;
}

/// Fallback for platforms without a wired-up location service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDeviceService;

#[async_trait]
impl DevicePosition for NoDeviceService {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Err(Error::LocationUnavailable)
    }
}

/// Turns a [`LocationIntent`] into coordinates.
#[derive(Debug)]
pub struct LocationResolver {
    geocoder: GeocodeClient,
    device: Box<dyn DevicePosition>,
}

impl LocationResolver {
    pub fn new(geocoder: GeocodeClient, device: Box<dyn DevicePosition>) -> Self {
        Self { geocoder, device }
    }

    /// Resolve the intent to a latitude/longitude pair.
    ///
    /// Text queries are validated before any network I/O: empty or
    /// whitespace-only input fails with [`Error::InvalidInput`] without a
    /// single request being issued.
    pub async fn resolve(&self, intent: &LocationIntent) -> Result<Coordinates, Error> {
        match intent {
            LocationIntent::CurrentDevice => {
                tracing::debug!("resolving via device position");
                self.device.current_position().await
            }
            LocationIntent::Text(query) => {
                let query = query.trim();
                if query.is_empty() {
                    return Err(Error::InvalidInput);
                }

                tracing::debug!(query, "resolving via geocoding");
                self.geocoder.lookup(query).await
            }
        }
    }
}
