// ================================================================
// File: chicai-common/src/error.rs
// ================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Camera or geolocation access was refused.
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Missing hardware or a device that stopped producing data.
    #[error("Resource unavailable: {0}")]
    Resource(String),

    /// The remote API answered, but with an error.
    #[error("API error: {0}")]
    Api(String),

    /// Transport-level failure inside a model provider.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The model answered with JSON that does not match the outfit schema.
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Short category name used in failure notices.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Permission(_) => "permission",
            Error::Resource(_) => "resource",
            Error::Http(_) | Error::Api(_) | Error::Provider(_) => "network",
            Error::Schema(_) | Error::EmptyResponse | Error::Json(_) => "schema",
            Error::UnsupportedMediaType(_)
            | Error::InvalidDataUri(_)
            | Error::Image(_)
            | Error::Base64(_) => "image",
            Error::Io(_) => "io",
            Error::Config(_) => "config",
        }
    }
}
