//! Recommendation contract: prompt, response schema, and strict parsing.

use serde_json::{json, Value};

use chicai_common::models::{OutfitRecommendation, RecommendationRequest};
use chicai_common::Error;

/// Builds the natural-language prompt. Absent inputs are left out entirely.
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let mut lines = vec![format!(
        "Generate a complete fashion outfit recommendation for a {} occasion.",
        request.occasion.id()
    )];
    if let Some(weather) = request.weather.as_deref().filter(|w| !w.trim().is_empty()) {
        lines.push(format!("Current weather: {}.", weather.trim()));
    }
    if let Some(context) = request.user_context.as_deref().filter(|c| !c.trim().is_empty()) {
        lines.push(format!("User context: {}.", context.trim()));
    }
    lines.push("Provide coordinated clothing items, styling tips, and a color palette.".to_string());
    lines.push("Express each palette color as a hex code such as #1A2B3C.".to_string());
    lines.join("\n")
}

/// The fixed output schema the text model is constrained to.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "category": { "type": "STRING" },
                        "item": { "type": "STRING" },
                        "stylingTip": { "type": "STRING" }
                    },
                    "required": ["category", "item", "stylingTip"]
                }
            },
            "overallStylingTip": { "type": "STRING" },
            "colorPalette": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["title", "description", "items", "overallStylingTip", "colorPalette"]
    })
}

pub fn request_body(request: &RecommendationRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": build_prompt(request) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

/// Parses the model's JSON text into a recommendation.
///
/// Empty text, any missing or mistyped field, and an empty item list or palette
/// are all failures. Nothing is defaulted.
pub fn parse_recommendation(text: &str) -> Result<OutfitRecommendation, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    let de = &mut serde_json::Deserializer::from_str(text);
    let recommendation: OutfitRecommendation = serde_path_to_error::deserialize(de)
        .map_err(|e| Error::Schema(format!("{} (at '{}')", e.inner(), e.path())))?;

    if recommendation.items.is_empty() {
        return Err(Error::Schema("recommendation has no items".into()));
    }
    if recommendation.color_palette.is_empty() {
        return Err(Error::Schema("recommendation has an empty color palette".into()));
    }
    Ok(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chicai_common::models::Occasion;

    fn request(weather: Option<&str>, context: Option<&str>) -> RecommendationRequest {
        RecommendationRequest {
            occasion: Occasion::Party,
            weather: weather.map(str::to_string),
            user_context: context.map(str::to_string),
        }
    }

    #[test]
    fn prompt_without_weather_has_no_weather_clause() {
        let prompt = build_prompt(&request(None, None));
        assert!(prompt.contains("for a party occasion"));
        assert!(!prompt.to_lowercase().contains("weather"));
        assert!(!prompt.contains("User context"));
    }

    #[test]
    fn prompt_embeds_weather_and_context() {
        let prompt = build_prompt(&request(Some("18°C, Rainy"), Some("I run cold")));
        assert!(prompt.contains("Current weather: 18°C, Rainy."));
        assert!(prompt.contains("User context: I run cold."));
    }

    #[test]
    fn blank_context_is_treated_as_absent() {
        let prompt = build_prompt(&request(None, Some("   ")));
        assert!(!prompt.contains("User context"));
    }

    #[test]
    fn request_body_carries_schema() {
        let body = request_body(&request(None, None));
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(
            body["generationConfig"]["responseSchema"]["required"],
            json!(["title", "description", "items", "overallStylingTip", "colorPalette"])
        );
        assert!(body["contents"][0]["parts"][0]["text"].as_str().unwrap().contains("party"));
    }

    #[test]
    fn parses_complete_recommendation() {
        let text = r##"{
            "title": "Midnight Glam",
            "description": "Sharp and shiny.",
            "items": [
                {"category": "top", "item": "sequin blazer", "stylingTip": "wear open"},
                {"category": "bottom", "item": "black trousers", "stylingTip": "cropped"}
            ],
            "overallStylingTip": "Keep jewelry minimal.",
            "colorPalette": ["#000000", "#C0C0C0"]
        }"##;
        let rec = parse_recommendation(text).unwrap();
        assert_eq!(rec.items.len(), 2);
        assert_eq!(rec.items[0].styling_tip, "wear open");
        assert_eq!(rec.color_palette, vec!["#000000", "#C0C0C0"]);
    }

    #[test]
    fn empty_text_is_a_failure() {
        assert!(matches!(parse_recommendation("  "), Err(Error::EmptyResponse)));
    }

    #[test]
    fn empty_object_is_a_schema_failure() {
        assert!(matches!(parse_recommendation("{}"), Err(Error::Schema(_))));
    }

    #[test]
    fn missing_item_field_reports_its_path() {
        let text = r##"{
            "title": "t", "description": "d",
            "items": [{"category": "top", "item": "shirt"}],
            "overallStylingTip": "o", "colorPalette": ["#fff"]
        }"##;
        match parse_recommendation(text) {
            Err(Error::Schema(msg)) => {
                assert!(msg.contains("stylingTip"), "{}", msg);
                assert!(msg.contains("items"), "{}", msg);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_items_or_palette_are_rejected() {
        let no_items = r##"{"title":"t","description":"d","items":[],"overallStylingTip":"o","colorPalette":["#fff"]}"##;
        let no_colors = r##"{"title":"t","description":"d","items":[{"category":"a","item":"b","stylingTip":"c"}],"overallStylingTip":"o","colorPalette":[]}"##;
        assert!(matches!(parse_recommendation(no_items), Err(Error::Schema(_))));
        assert!(matches!(parse_recommendation(no_colors), Err(Error::Schema(_))));
    }
}
