// File: chicai-core/src/weather/condition.rs

use std::fmt;

/// Coarse condition buckets for WMO weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Rainy,
    Snowy,
    RainShowers,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Ascending-threshold bucketing of a weather code.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => WeatherCondition::ClearSky,
            1..=3 => WeatherCondition::PartlyCloudy,
            4..=48 => WeatherCondition::Foggy,
            49..=67 => WeatherCondition::Rainy,
            68..=77 => WeatherCondition::Snowy,
            78..=82 => WeatherCondition::RainShowers,
            83..=99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear sky",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Snowy => "Snowy",
            WeatherCondition::RainShowers => "Rain showers",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
