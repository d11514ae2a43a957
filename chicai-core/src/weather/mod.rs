// File: chicai-core/src/weather/mod.rs

pub mod condition;
pub mod geolocation;
pub mod open_meteo;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use chicai_common::models::WeatherSnapshot;
use chicai_common::traits::{Geolocator, WeatherLookup};

pub use condition::WeatherCondition;
pub use geolocation::{FixedLocation, NoLocation};
pub use open_meteo::{OpenMeteoClient, DEFAULT_WEATHER_API_BASE};

pub const DEFAULT_LOCATION_LABEL: &str = "Your Location";

/// Best-effort current weather: position first, then a forecast lookup.
/// Any failure along the way is logged and reported as "no weather".
pub struct WeatherService {
    geolocator: Arc<dyn Geolocator>,
    client: OpenMeteoClient,
    location_label: String,
}

impl WeatherService {
    pub fn new(
        geolocator: Arc<dyn Geolocator>,
        client: OpenMeteoClient,
        location_label: impl Into<String>,
    ) -> Self {
        Self {
            geolocator,
            client,
            location_label: location_label.into(),
        }
    }
}

#[async_trait]
impl WeatherLookup for WeatherService {
    async fn current_weather(&self) -> Option<WeatherSnapshot> {
        let coords = match self.geolocator.current_position().await {
            Ok(c) => c,
            Err(e) => {
                warn!("Location unavailable ({}): {}", e.kind(), e);
                return None;
            }
        };

        match self.client.current_weather(coords, &self.location_label).await {
            Ok(snapshot) => {
                info!(
                    "Weather for {}: {}",
                    snapshot.location_label,
                    snapshot.prompt_fragment()
                );
                Some(snapshot)
            }
            Err(e) => {
                warn!("Weather lookup failed: {}", e);
                None
            }
        }
    }
}
