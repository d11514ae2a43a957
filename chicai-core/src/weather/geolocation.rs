// File: chicai-core/src/weather/geolocation.rs

use async_trait::async_trait;

use chicai_common::models::Coordinates;
use chicai_common::traits::Geolocator;
use chicai_common::Error;

/// A position configured up front (e.g. from command-line flags).
pub struct FixedLocation {
    coords: Coordinates,
}

impl FixedLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates { latitude, longitude },
        }
    }
}

#[async_trait]
impl Geolocator for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Ok(self.coords)
    }
}

/// Used when the device exposes no position; behaves like a denied prompt.
pub struct NoLocation;

#[async_trait]
impl Geolocator for NoLocation {
    async fn current_position(&self) -> Result<Coordinates, Error> {
        Err(Error::Permission("location access is not available".into()))
    }
}
