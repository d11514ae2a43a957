use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use chicai_common::Error;

use crate::models::{ProviderConfig, DEFAULT_API_BASE};
use crate::traits::ModelProvider;

/// Gemini `generateContent` provider implementation
pub struct GeminiProvider {
    config: ProviderConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider with the given configuration
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    fn api_base(&self) -> String {
        self.config
            .api_base
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string()
    }

    /// `{api_base}/models/{model}:generateContent`, tolerating a `models/` prefix.
    pub fn endpoint_for_model(&self, model: &str) -> String {
        let trimmed = model.trim();
        let model_path = if trimmed.starts_with("models/") {
            trimmed.to_string()
        } else {
            format!("models/{}", trimmed)
        };
        format!("{}/{}:generateContent", self.api_base(), model_path)
    }
}

#[async_trait]
impl ModelProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_content(&self, model: &str, body: Value) -> anyhow::Result<Value> {
        let api_key = match self.config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => return Err(Error::Config("GEMINI_API_KEY is not set".into()).into()),
        };

        let endpoint = self.endpoint_for_model(model);
        tracing::info!("Making API call to {}", endpoint);
        // Bodies may carry base64 images; log the size only.
        tracing::trace!("API request payload: {} bytes", body.to_string().len());

        let response = self.client
            .post(&endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        // Get the raw response text first for better error handling
        let response_text = response.text().await?;
        tracing::debug!("Raw API response ({} bytes, status {})", response_text.len(), status);

        let data = match serde_json::from_str::<Value>(&response_text) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to parse API response as JSON: {:?}", e);
                return Err(Error::Api(format!("non-JSON response (HTTP {}): {}", status, e)).into());
            }
        };

        // Check for API errors
        if let Some(error) = data.get("error") {
            tracing::error!("API returned error: {:?}", error);
            let error_message = error.get("message").and_then(|m| m.as_str()).unwrap_or("Unknown error");
            return Err(Error::Api(error_message.to_string()).into());
        }

        if !status.is_success() {
            tracing::error!("API returned HTTP {}", status);
            return Err(Error::Api(format!("HTTP {}", status)).into());
        }

        if let Some(reason) = data.pointer("/promptFeedback/blockReason").and_then(|r| r.as_str()) {
            tracing::warn!("Prompt was blocked: {}", reason);
            return Err(Error::Api(format!("prompt blocked: {}", reason)).into());
        }

        Ok(data)
    }
}
