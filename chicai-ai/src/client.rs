use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use chicai_common::models::{
    EncodedImage, OutfitRecommendation, RecommendationRequest, TryOnRequest,
};
use chicai_common::traits::{RecommendationGenerator, TryOnGenerator};
use chicai_common::Error;

use crate::models::ProviderConfig;
use crate::provider::GeminiProvider;
use crate::response::response_text;
use crate::traits::ModelProvider;
use crate::{recommendation, tryon};

/// Client for the two generative capabilities: outfit recommendations from a
/// text model and try-on images from an image-editing model.
pub struct AiClient {
    /// Transport used for every call
    provider: Arc<dyn ModelProvider>,

    text_model: String,

    image_model: String,
}

impl AiClient {
    /// Create a new AI client over the given provider
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Create a client backed by a [`GeminiProvider`]
    pub fn from_config(config: ProviderConfig) -> Result<Self, Error> {
        let text_model = config.text_model.clone();
        let image_model = config.image_model.clone();
        let provider = GeminiProvider::new(config)?;
        Ok(Self::new(Arc::new(provider), text_model, image_model))
    }
}

/// Recovers errors the provider reported as `chicai_common::Error`; everything
/// else is a transport failure.
fn provider_error(err: anyhow::Error) -> Error {
    match err.downcast::<Error>() {
        Ok(err) => err,
        Err(other) => Error::Provider(format!("{:#}", other)),
    }
}

#[async_trait]
impl RecommendationGenerator for AiClient {
    async fn recommend(&self, request: &RecommendationRequest) -> Result<OutfitRecommendation, Error> {
        info!(
            "Requesting {} recommendation from {} (weather={}, context={})",
            request.occasion,
            self.text_model,
            request.weather.is_some(),
            request.user_context.is_some()
        );

        let body = recommendation::request_body(request);
        let response = self.provider
            .generate_content(&self.text_model, body)
            .await
            .map_err(provider_error)?;

        let text = response_text(&response);
        debug!("Recommendation response text: {}", text);

        let outfit = recommendation::parse_recommendation(&text).map_err(|e| {
            warn!("Discarding malformed recommendation: {}", e);
            e
        })?;
        info!("Received '{}' with {} items", outfit.title, outfit.items.len());
        Ok(outfit)
    }
}

#[async_trait]
impl TryOnGenerator for AiClient {
    async fn try_on(&self, request: &TryOnRequest) -> Result<Option<EncodedImage>, Error> {
        info!(
            "Requesting try-on from {} ({} bytes of {}): {}",
            self.image_model,
            request.image.len(),
            request.image.media_type,
            request.outfit_description
        );

        let body = tryon::request_body(request);
        let response = self.provider
            .generate_content(&self.image_model, body)
            .await
            .map_err(provider_error)?;

        let image = tryon::extract_image(&response)?;
        match &image {
            Some(img) => info!("Try-on returned {} bytes of {}", img.len(), img.media_type),
            None => warn!("Try-on response contained no image part"),
        }
        Ok(image)
    }
}
