// File: chicai-common/src/traits/service_traits.rs

use async_trait::async_trait;

use crate::error::Error;
use crate::models::{
    EncodedImage, OutfitRecommendation, RecommendationRequest, TryOnRequest, WeatherSnapshot,
};

/// Produces an outfit recommendation from a structured-output text model.
///
/// Implementations perform no retries. Any malformed or incomplete answer is an
/// `Err`; a partially populated recommendation is never returned.
#[async_trait]
pub trait RecommendationGenerator: Send + Sync {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<OutfitRecommendation, Error>;
}

/// Dresses the person in a photo in the given outfit.
///
/// `Ok(None)` means the model answered without an image part. That is not an
/// error, but it is also not a result.
#[async_trait]
pub trait TryOnGenerator: Send + Sync {
    async fn try_on(&self, request: &TryOnRequest) -> Result<Option<EncodedImage>, Error>;
}

/// Best-effort lookup of current weather at the device location.
///
/// Every failure collapses to `None`; weather only ever decorates a prompt.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn current_weather(&self) -> Option<WeatherSnapshot>;
}
