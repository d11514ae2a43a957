// File: chicai-core/src/weather/open_meteo.rs

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use chicai_common::models::{Coordinates, WeatherSnapshot};
use chicai_common::Error;

use crate::weather::condition::WeatherCondition;

pub const DEFAULT_WEATHER_API_BASE: &str = "https://api.open-meteo.com";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

/// Only the two fields we use; everything else in the payload is ignored.
#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: f64,
}

/// Client for the public Open-Meteo forecast endpoint.
pub struct OpenMeteoClient {
    api_base: String,
    client: Client,
}

impl OpenMeteoClient {
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_base: api_base.into(),
            client,
        })
    }

    pub fn forecast_url(&self, coords: Coordinates) -> Result<Url, Error> {
        let base = format!("{}/v1/forecast", self.api_base.trim_end_matches('/'));
        Url::parse_with_params(
            &base,
            &[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid weather API base '{}': {}", self.api_base, e)))
    }

    pub async fn current_weather(
        &self,
        coords: Coordinates,
        location_label: &str,
    ) -> Result<WeatherSnapshot, Error> {
        let url = self.forecast_url(coords)?;
        tracing::debug!("Fetching weather from {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        snapshot_from_body(&body, location_label)
    }
}

/// Turns a forecast response body into a snapshot.
pub fn snapshot_from_body(body: &str, location_label: &str) -> Result<WeatherSnapshot, Error> {
    let data: ForecastResponse = serde_json::from_str(body)?;
    let current = data
        .current_weather
        .ok_or_else(|| Error::Api("forecast response has no current_weather".into()))?;

    Ok(WeatherSnapshot {
        temperature_celsius: current.temperature.round() as i32,
        condition: WeatherCondition::from_code(current.weathercode.round() as i64)
            .label()
            .to_string(),
        location_label: location_label.to_string(),
        observed_at: Utc::now(),
    })
}
