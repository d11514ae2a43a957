// File: chicai-common/src/models/weather.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Device coordinates, as handed out by a geolocation source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions at the user's location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Rounded to whole degrees Celsius.
    pub temperature_celsius: i32,
    /// Human-readable condition label, e.g. "Partly cloudy".
    pub condition: String,
    pub location_label: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// The weather clause embedded in recommendation prompts, e.g. `"18°C, Rainy"`.
    pub fn prompt_fragment(&self) -> String {
        format!("{}°C, {}", self.temperature_celsius, self.condition)
    }
}
