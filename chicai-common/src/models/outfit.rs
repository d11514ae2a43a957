// File: chicai-common/src/models/outfit.rs

use serde::{Deserialize, Serialize};

/// One garment or accessory in a recommended outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItem {
    pub category: String,
    pub item: String,
    pub styling_tip: String,
}

/// A complete outfit as returned by the recommendation model.
///
/// Field names on the wire follow the model's response schema
/// (`overallStylingTip`, `colorPalette`, ...). Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub title: String,
    pub description: String,
    pub items: Vec<OutfitItem>,
    pub overall_styling_tip: String,
    /// Color encodings, normally hex codes like `#1A2B3C`.
    pub color_palette: Vec<String>,
}

impl OutfitRecommendation {
    /// Flattens the items into the text handed to the try-on model:
    /// `"top: white linen shirt, shoes: loafers"`, in item order.
    pub fn outfit_description(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("{}: {}", i.category, i.item))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
