// File: chicai-core/tests/service_tests.rs

mod test_utils;

use std::sync::Arc;

use chicai_common::models::{EncodedImage, Occasion};
use chicai_common::Error;
use chicai_core::session::{ImagePhase, Operation, RecommendationPhase};
use chicai_core::{Outcome, StylistService};

use test_utils::*;

fn service(recommender: MockRecommender, try_on: MockTryOn, weather: MockWeather) -> StylistService {
    StylistService::new(Arc::new(recommender), Arc::new(try_on), Arc::new(weather))
}

#[tokio::test]
async fn every_occasion_issues_one_call_with_that_occasion() {
    for occasion in Occasion::ALL {
        let mut recommender = MockRecommender::new();
        recommender
            .expect_recommend()
            .withf(move |req| req.occasion == occasion && req.weather.is_none())
            .times(1)
            .returning(|_| Ok(white_shirt()));

        let svc = service(recommender, MockTryOn::new(), no_weather());
        assert_eq!(svc.select_occasion(occasion), Outcome::Completed);
        assert_eq!(svc.request_recommendation().await, Outcome::Completed);
        assert_eq!(svc.snapshot().recommendation_phase(), RecommendationPhase::Ready);
    }
}

#[tokio::test]
async fn weather_is_included_once_resolved() {
    let mut weather_lookup = MockWeather::new();
    weather_lookup
        .expect_current_weather()
        .times(1)
        .returning(|| Some(weather(8, "Rainy")));

    let mut recommender = MockRecommender::new();
    recommender
        .expect_recommend()
        .withf(|req| req.weather.as_deref() == Some("8°C, Rainy"))
        .times(1)
        .returning(|_| Ok(white_shirt()));

    let svc = service(recommender, MockTryOn::new(), weather_lookup);
    assert_eq!(svc.refresh_weather().await, Outcome::Completed);
    assert_eq!(svc.view().weather.unwrap().temperature, "8°C");

    svc.select_occasion(Occasion::Office);
    assert_eq!(svc.request_recommendation().await, Outcome::Completed);
}

#[tokio::test]
async fn missing_weather_is_not_a_failure() {
    let svc = service(MockRecommender::new(), MockTryOn::new(), no_weather());
    assert_eq!(svc.refresh_weather().await, Outcome::NoResult);
    let state = svc.snapshot();
    assert!(state.weather().is_none());
    assert!(!state.pending().weather);
    assert!(state.notice().is_none());
}

#[tokio::test]
async fn recommendation_without_occasion_is_blocked() {
    let mut recommender = MockRecommender::new();
    recommender.expect_recommend().times(0);

    let svc = service(recommender, MockTryOn::new(), no_weather());
    assert!(matches!(svc.request_recommendation().await, Outcome::Blocked(_)));
    assert!(!svc.view().can_generate);
}

#[tokio::test]
async fn user_context_reaches_the_generator() {
    let mut recommender = MockRecommender::new();
    recommender
        .expect_recommend()
        .withf(|req| req.user_context.as_deref() == Some("I prefer dark colors"))
        .times(1)
        .returning(|_| Ok(white_shirt()));

    let svc = service(recommender, MockTryOn::new(), no_weather());
    svc.select_occasion(Occasion::DateNight);
    svc.set_user_context(Some("I prefer dark colors".into()));
    assert_eq!(svc.request_recommendation().await, Outcome::Completed);
}

#[tokio::test]
async fn generator_failure_becomes_a_notice() {
    let mut recommender = MockRecommender::new();
    recommender
        .expect_recommend()
        .times(2)
        .returning(|_| Err(Error::Schema("missing field `items`".into())));

    let svc = service(recommender, MockTryOn::new(), no_weather());
    svc.select_occasion(Occasion::Sport);

    let outcome = svc.request_recommendation().await;
    assert!(matches!(outcome, Outcome::Failed(ref reason) if reason.contains("items")));
    let state = svc.snapshot();
    assert_eq!(state.notice().unwrap().operation, Operation::Recommendation);
    assert_eq!(state.recommendation_phase(), RecommendationPhase::OccasionSelected);

    // Retry is allowed right away.
    assert!(matches!(svc.request_recommendation().await, Outcome::Failed(_)));
    svc.dismiss_notice();
    assert!(svc.view().notice.is_none());
}

#[tokio::test]
async fn incomplete_outfit_is_rejected() {
    let mut recommender = MockRecommender::new();
    recommender
        .expect_recommend()
        .times(1)
        .returning(|_| Ok(outfit(&[])));

    let svc = service(recommender, MockTryOn::new(), no_weather());
    svc.select_occasion(Occasion::Casual);
    assert!(matches!(svc.request_recommendation().await, Outcome::Failed(_)));
    assert!(svc.snapshot().recommendation().is_none());
}

#[tokio::test]
async fn try_on_is_not_called_without_inputs() {
    let mut try_on = MockTryOn::new();
    try_on.expect_try_on().times(0);

    let mut recommender = MockRecommender::new();
    recommender.expect_recommend().returning(|_| Ok(white_shirt()));

    let svc = service(recommender, try_on, no_weather());
    assert!(matches!(svc.request_try_on().await, Outcome::Blocked(_)));

    svc.select_occasion(Occasion::Office);
    svc.request_recommendation().await;
    assert!(matches!(svc.request_try_on().await, Outcome::Blocked(_)));

    svc.clear_image();
    svc.upload_image(png_bytes(), Some("image/png"));
    svc.clear_image();
    assert!(matches!(svc.request_try_on().await, Outcome::Blocked(_)));
}

#[tokio::test]
async fn new_photo_clears_the_try_on_result() {
    let mut recommender = MockRecommender::new();
    recommender.expect_recommend().returning(|_| Ok(white_shirt()));
    let mut try_on = MockTryOn::new();
    try_on
        .expect_try_on()
        .times(1)
        .returning(|_| Ok(Some(EncodedImage::new("image/png", vec![1, 2, 3]))));

    let svc = service(recommender, try_on, no_weather());
    svc.select_occasion(Occasion::Wedding);
    svc.request_recommendation().await;
    assert_eq!(svc.upload_image(jpeg_bytes(), None), Outcome::Completed);
    assert_eq!(svc.request_try_on().await, Outcome::Completed);
    assert_eq!(svc.snapshot().image_phase(), ImagePhase::TryOnReady);
    assert!(!svc.view().try_on.can_try_on);

    assert_eq!(svc.upload_image(png_bytes(), None), Outcome::Completed);
    let state = svc.snapshot();
    assert!(state.try_on().is_none());
    assert_eq!(state.image_phase(), ImagePhase::ImageCaptured);
    assert!(svc.view().try_on.can_try_on);
}

#[tokio::test]
async fn empty_try_on_shows_no_image() {
    let mut recommender = MockRecommender::new();
    recommender.expect_recommend().returning(|_| Ok(white_shirt()));
    let mut try_on = MockTryOn::new();
    try_on.expect_try_on().times(1).returning(|_| Ok(None));

    let svc = service(recommender, try_on, no_weather());
    svc.select_occasion(Occasion::Party);
    svc.request_recommendation().await;
    svc.upload_image(png_bytes(), None);

    assert_eq!(svc.request_try_on().await, Outcome::NoResult);
    let view = svc.view();
    assert!(view.try_on.result.is_none());
    assert!(!view.try_on.pending);
    assert!(view.try_on.can_try_on);
    assert!(view.notice.is_some());
}

#[tokio::test]
async fn try_on_failure_is_recorded() {
    let mut recommender = MockRecommender::new();
    recommender.expect_recommend().returning(|_| Ok(white_shirt()));
    let mut try_on = MockTryOn::new();
    try_on
        .expect_try_on()
        .times(1)
        .returning(|_| Err(Error::Api("quota exceeded".into())));

    let svc = service(recommender, try_on, no_weather());
    svc.select_occasion(Occasion::Party);
    svc.request_recommendation().await;
    svc.upload_image(png_bytes(), None);

    assert!(matches!(svc.request_try_on().await, Outcome::Failed(ref r) if r.contains("quota")));
    let state = svc.snapshot();
    assert!(state.try_on().is_none());
    assert_eq!(state.notice().unwrap().operation, Operation::TryOn);
}

#[tokio::test]
async fn rejected_upload_keeps_previous_photo() {
    let svc = service(MockRecommender::new(), MockTryOn::new(), no_weather());
    svc.upload_image(png_bytes(), None);

    let outcome = svc.upload_image(b"just some text".to_vec(), Some("text/plain"));
    assert!(matches!(outcome, Outcome::Failed(_)));
    let state = svc.snapshot();
    assert_eq!(state.image().unwrap().image.media_type, "image/png");
    assert_eq!(state.notice().unwrap().operation, Operation::Capture);
}

#[tokio::test]
async fn subscribers_see_background_updates() {
    let mut weather_lookup = MockWeather::new();
    weather_lookup
        .expect_current_weather()
        .returning(|| Some(weather(25, "Clear sky")));

    let svc = Arc::new(service(MockRecommender::new(), MockTryOn::new(), weather_lookup));
    let mut rx = svc.subscribe();

    let background = svc.clone();
    tokio::spawn(async move { background.refresh_weather().await });

    let state = rx
        .wait_for(|state| state.weather().is_some())
        .await
        .expect("sender alive")
        .clone();
    assert_eq!(state.weather().unwrap().temperature_celsius, 25);
}
