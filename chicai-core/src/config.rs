// File: chicai-core/src/config.rs

use chicai_ai::models::{DEFAULT_API_BASE, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use chicai_ai::ProviderConfig;

use crate::weather::DEFAULT_WEATHER_API_BASE;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Runtime settings for a styling session.
#[derive(Debug, Clone, PartialEq)]
pub struct StylistConfig {
    /// Absent keys are allowed; generator calls then fail with a configuration error.
    pub api_key: Option<String>,
    pub api_base: String,
    pub text_model: String,
    pub image_model: String,
    pub weather_api_base: String,
    pub request_timeout_secs: u64,
    pub weather_timeout_secs: u64,
}

impl Default for StylistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            weather_api_base: DEFAULT_WEATHER_API_BASE.to_string(),
            request_timeout_secs: 120,
            weather_timeout_secs: 10,
        }
    }
}

impl StylistConfig {
    /// Defaults plus the API key from the process environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn into_provider_config(self) -> ProviderConfig {
        ProviderConfig {
            api_base: Some(self.api_base),
            api_key: self.api_key,
            text_model: self.text_model,
            image_model: self.image_model,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}
