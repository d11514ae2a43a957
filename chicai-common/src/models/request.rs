// File: chicai-common/src/models/request.rs

use serde::{Deserialize, Serialize};

use crate::models::image::EncodedImage;
use crate::models::occasion::Occasion;

/// Input of one recommendation generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub occasion: Occasion,
    /// Pre-formatted weather clause, e.g. `"18°C, Rainy"`.
    pub weather: Option<String>,
    pub user_context: Option<String>,
}

/// Input of one try-on generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TryOnRequest {
    pub image: EncodedImage,
    pub outfit_description: String,
}
