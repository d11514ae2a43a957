use serde::{Serialize, Deserialize};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Configuration for the generative model backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL for API requests
    pub api_base: Option<String>,

    /// API key for authentication. Calls fail with a configuration error when unset.
    pub api_key: Option<String>,

    /// Structured-output text model used for recommendations
    pub text_model: String,

    /// Image-editing model used for try-on
    pub image_model: String,

    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            request_timeout_secs: 120,
        }
    }
}
