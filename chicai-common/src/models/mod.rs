// File: chicai-common/src/models/mod.rs
pub mod image;
pub mod occasion;
pub mod outfit;
pub mod request;
pub mod weather;

pub use image::{CaptureSource, CapturedImage, EncodedImage, TryOnResult};
pub use occasion::Occasion;
pub use outfit::{OutfitItem, OutfitRecommendation};
pub use request::{RecommendationRequest, TryOnRequest};
pub use weather::{Coordinates, WeatherSnapshot};
