// File: chicai-core/tests/scenario_tests.rs
//
// Whole-session walkthroughs with the real Gemini request/response handling
// and a mocked transport underneath.

mod test_utils;

use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use mockall::mock;
use serde_json::{json, Value};

use chicai_ai::{AiClient, ModelProvider};
use chicai_common::models::Occasion;
use chicai_core::{Outcome, StylistService};

use test_utils::*;

mock! {
    Provider {}
    #[async_trait]
    impl ModelProvider for Provider {
        fn name(&self) -> &str;
        async fn generate_content(&self, model: &str, body: Value) -> anyhow::Result<Value>;
    }
}

fn text_response(text: &str) -> Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

fn prompt_of(body: &Value) -> &str {
    body["contents"][0]["parts"]
        .as_array()
        .and_then(|parts| parts.iter().find_map(|p| p["text"].as_str()))
        .unwrap_or_default()
}

fn stylist(provider: MockProvider) -> StylistService {
    let ai = Arc::new(AiClient::new(Arc::new(provider), "text-model", "image-model"));
    StylistService::new(ai.clone(), ai, Arc::new(no_weather()))
}

#[tokio::test]
async fn party_without_weather_renders_three_items() {
    let outfit = json!({
        "title": "Party Ready",
        "description": "Sparkle without trying too hard.",
        "items": [
            { "category": "top", "item": "sequin blouse", "stylingTip": "half tuck" },
            { "category": "bottom", "item": "black trousers", "stylingTip": "cropped at the ankle" },
            { "category": "shoes", "item": "strappy heels", "stylingTip": "match the metal of your jewelry" }
        ],
        "overallStylingTip": "Let the top do the talking.",
        "colorPalette": ["#000000", "#D4AF37"]
    });

    let mut provider = MockProvider::new();
    provider
        .expect_generate_content()
        .withf(|model, body| {
            let prompt = prompt_of(body);
            model == "text-model" && prompt.contains("party") && !prompt.to_lowercase().contains("weather")
        })
        .times(1)
        .returning(move |_, _| Ok(text_response(&outfit.to_string())));

    let svc = stylist(provider);
    assert_eq!(svc.refresh_weather().await, Outcome::NoResult);
    svc.select_occasion(Occasion::Party);
    assert_eq!(svc.request_recommendation().await, Outcome::Completed);

    let view = svc.view();
    let card = view.recommendation.expect("recommendation shown");
    assert_eq!(card.items.len(), 3);
    assert!(!card.palette.is_empty());
    assert_eq!(card.stylist_note, "Let the top do the talking.");
    assert!(view.notice.is_none());
}

#[tokio::test]
async fn uploaded_photo_is_dressed_in_a_single_item_outfit() {
    let photo = png_bytes();
    let expected_payload = BASE64.encode(&photo);
    let result_bytes = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
    let result_payload = BASE64.encode(&result_bytes);

    let mut provider = MockProvider::new();
    provider
        .expect_generate_content()
        .withf(|model, _| model == "text-model")
        .times(1)
        .returning(|_, _| {
            Ok(text_response(
                r##"{"title":"Crisp","description":"Clean lines","items":[{"category":"top","item":"white shirt","stylingTip":"tuck it in"}],"overallStylingTip":"Iron it","colorPalette":["#FFFFFF"]}"##,
            ))
        });
    provider
        .expect_generate_content()
        .withf(move |model, body| {
            let inline = &body["contents"][0]["parts"][0]["inlineData"];
            model == "image-model"
                && inline["mimeType"] == "image/png"
                && inline["data"] == expected_payload.as_str()
                && prompt_of(body).starts_with(
                    "Modify the person in this image to be wearing the following outfit: top: white shirt.\n",
                )
        })
        .times(1)
        .returning(move |_, _| {
            Ok(json!({ "candidates": [{ "content": { "parts": [
                { "text": "Here you go" },
                { "inlineData": { "mimeType": "image/png", "data": result_payload } }
            ] } }] }))
        });

    let svc = stylist(provider);
    assert_eq!(svc.upload_image(photo, Some("image/png")), Outcome::Completed);
    svc.select_occasion(Occasion::Office);
    assert_eq!(svc.request_recommendation().await, Outcome::Completed);
    assert_eq!(
        svc.snapshot().recommendation().unwrap().outfit_description(),
        "top: white shirt"
    );

    assert_eq!(svc.request_try_on().await, Outcome::Completed);
    let result = svc.view().try_on.result.expect("try-on shown");
    assert_eq!(result.image.media_type, "image/png");
    assert_eq!(result.image.data, result_bytes);
}

#[tokio::test]
async fn text_only_try_on_answer_leaves_no_result() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_content()
        .withf(|model, _| model == "text-model")
        .returning(|_, _| {
            Ok(text_response(
                r##"{"title":"T","description":"D","items":[{"category":"dress","item":"slip dress","stylingTip":"layer a blazer"}],"overallStylingTip":"N","colorPalette":["#222222"]}"##,
            ))
        });
    provider
        .expect_generate_content()
        .withf(|model, _| model == "image-model")
        .times(1)
        .returning(|_, _| Ok(text_response("I cannot edit this image.")));

    let svc = stylist(provider);
    svc.upload_image(jpeg_bytes(), None);
    svc.select_occasion(Occasion::DateNight);
    svc.request_recommendation().await;

    assert_eq!(svc.request_try_on().await, Outcome::NoResult);
    let view = svc.view();
    assert!(view.try_on.result.is_none());
    assert!(view.try_on.original.is_some());
    assert!(view.notice.is_some());
}

#[tokio::test]
async fn empty_model_answer_is_a_failure() {
    let mut provider = MockProvider::new();
    provider
        .expect_generate_content()
        .times(1)
        .returning(|_, _| Ok(json!({ "candidates": [] })));

    let svc = stylist(provider);
    svc.select_occasion(Occasion::Casual);
    assert!(matches!(svc.request_recommendation().await, Outcome::Failed(_)));
    assert!(svc.view().recommendation.is_none());
    assert!(svc.view().notice.is_some());
}
