// File: chicai-common/src/models/image.rs

use std::fmt;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An encoded still image plus its declared media type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl EncodedImage {
    pub fn new(media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            data,
        }
    }

    /// Base64 payload without the data URI header.
    pub fn base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// `data:{media_type};base64,{payload}`
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64())
    }

    /// Splits a base64 data URI back into media type and bytes.
    pub fn from_data_uri(uri: &str) -> Result<Self, Error> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidDataUri("missing 'data:' prefix".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidDataUri("missing ',' separator".into()))?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| Error::InvalidDataUri("only base64 payloads are supported".into()))?;
        if media_type.is_empty() {
            return Err(Error::InvalidDataUri("empty media type".into()));
        }
        let data = BASE64.decode(payload.trim())?;
        Ok(Self::new(media_type, data))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// Payloads are large; keep Debug output to the metadata.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("media_type", &self.media_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// How a captured image entered the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureSource {
    Camera,
    Upload,
}

/// The user's photo, the input of every try-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedImage {
    pub image: EncodedImage,
    pub source: CaptureSource,
    pub captured_at: DateTime<Utc>,
}

impl CapturedImage {
    pub fn new(image: EncodedImage, source: CaptureSource) -> Self {
        Self {
            image,
            source,
            captured_at: Utc::now(),
        }
    }
}

/// The image returned by the try-on model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TryOnResult {
    pub image: EncodedImage,
    pub generated_at: DateTime<Utc>,
}

impl TryOnResult {
    pub fn new(image: EncodedImage) -> Self {
        Self {
            image,
            generated_at: Utc::now(),
        }
    }
}
