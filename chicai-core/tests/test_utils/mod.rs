// File: chicai-core/tests/test_utils/mod.rs
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use chicai_common::models::{
    EncodedImage, OutfitItem, OutfitRecommendation, RecommendationRequest, TryOnRequest,
    WeatherSnapshot,
};
use chicai_common::traits::{RecommendationGenerator, TryOnGenerator, WeatherLookup};
use chicai_common::Error;

mock! {
    pub Recommender {}
    #[async_trait]
    impl RecommendationGenerator for Recommender {
        async fn recommend(&self, request: &RecommendationRequest) -> Result<OutfitRecommendation, Error>;
    }
}

mock! {
    pub TryOn {}
    #[async_trait]
    impl TryOnGenerator for TryOn {
        async fn try_on(&self, request: &TryOnRequest) -> Result<Option<EncodedImage>, Error>;
    }
}

mock! {
    pub Weather {}
    #[async_trait]
    impl WeatherLookup for Weather {
        async fn current_weather(&self) -> Option<WeatherSnapshot>;
    }
}

/// A lookup that never finds anything.
pub fn no_weather() -> MockWeather {
    let mut weather = MockWeather::new();
    weather.expect_current_weather().returning(|| None);
    weather
}

pub fn weather(temperature_celsius: i32, condition: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_celsius,
        condition: condition.to_string(),
        location_label: "Your Location".to_string(),
        observed_at: Utc::now(),
    }
}

pub fn outfit(items: &[(&str, &str, &str)]) -> OutfitRecommendation {
    OutfitRecommendation {
        title: "Test Look".to_string(),
        description: "Something to wear".to_string(),
        items: items
            .iter()
            .map(|(category, item, tip)| OutfitItem {
                category: category.to_string(),
                item: item.to_string(),
                styling_tip: tip.to_string(),
            })
            .collect(),
        overall_styling_tip: "Keep it simple".to_string(),
        color_palette: vec!["#FFFFFF".to_string(), "#1A2B3C".to_string()],
    }
}

pub fn white_shirt() -> OutfitRecommendation {
    outfit(&[("top", "white shirt", "tuck it in")])
}

/// Smallest byte string `image::guess_format` recognises as PNG.
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13]
}

pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10, b'J', b'F', b'I', b'F', 0]
}
