//! What the user sees, derived from a [`SessionState`] snapshot.

use std::sync::Arc;

use chicai_common::models::{CaptureSource, Occasion, TryOnResult};

use crate::session::state::SessionState;

#[derive(Debug, Clone, PartialEq)]
pub struct OccasionCard {
    pub occasion: Occasion,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub location: String,
    pub temperature: String,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub category: String,
    pub item: String,
    pub styling_tip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub title: String,
    pub description: String,
    pub items: Vec<ItemRow>,
    pub palette: Vec<String>,
    pub stylist_note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OriginalPhoto {
    pub source: CaptureSource,
    pub media_type: String,
    pub size: usize,
}

#[derive(Debug, Clone)]
pub struct TryOnPanel {
    pub original: Option<OriginalPhoto>,
    /// Only ever a result generated from the current photo and outfit.
    pub result: Option<Arc<TryOnResult>>,
    pub pending: bool,
    pub can_try_on: bool,
}

#[derive(Debug, Clone)]
pub struct SessionView {
    pub occasions: Vec<OccasionCard>,
    pub weather: Option<WeatherCard>,
    pub can_generate: bool,
    pub generating: bool,
    pub recommendation: Option<RecommendationCard>,
    pub try_on: TryOnPanel,
    pub notice: Option<String>,
}

impl SessionView {
    pub fn from_state(state: &SessionState) -> Self {
        let occasions = Occasion::ALL
            .iter()
            .map(|&occasion| OccasionCard {
                occasion,
                label: occasion.label(),
                selected: state.occasion() == Some(occasion),
            })
            .collect();

        let weather = state.weather().map(|w| WeatherCard {
            location: w.location_label.clone(),
            temperature: format!("{}°C", w.temperature_celsius),
            condition: w.condition.clone(),
        });

        let pending = state.pending();

        let recommendation = state.recommendation().map(|rec| RecommendationCard {
            title: rec.title.clone(),
            description: rec.description.clone(),
            items: rec
                .items
                .iter()
                .map(|i| ItemRow {
                    category: i.category.clone(),
                    item: i.item.clone(),
                    styling_tip: i.styling_tip.clone(),
                })
                .collect(),
            palette: rec.color_palette.clone(),
            stylist_note: rec.overall_styling_tip.clone(),
        });

        let original = state.image().map(|img| OriginalPhoto {
            source: img.source,
            media_type: img.image.media_type.clone(),
            size: img.image.len(),
        });
        let result = state.try_on().cloned();
        let try_on_pending = pending.try_on.is_some();
        let can_try_on = original.is_some()
            && recommendation.is_some()
            && !try_on_pending
            && result.is_none();

        Self {
            occasions,
            weather,
            can_generate: state.occasion().is_some() && !pending.recommendation,
            generating: pending.recommendation,
            recommendation,
            try_on: TryOnPanel {
                original,
                result,
                pending: try_on_pending,
                can_try_on,
            },
            notice: state.notice().map(|n| n.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::{Effect, SessionEvent};
    use chicai_common::models::{CapturedImage, EncodedImage, OutfitItem, OutfitRecommendation};

    #[test]
    fn fresh_session_has_nothing_to_generate() {
        let view = SessionView::from_state(&SessionState::new());
        assert_eq!(view.occasions.len(), 6);
        assert!(view.occasions.iter().all(|c| !c.selected));
        assert!(!view.can_generate);
        assert!(view.recommendation.is_none());
        assert!(!view.try_on.can_try_on);
    }

    #[test]
    fn renders_three_item_rows() {
        let outfit = OutfitRecommendation {
            title: "Party Ready".into(),
            description: "Fun".into(),
            items: ["top", "bottom", "shoes"]
                .iter()
                .map(|c| OutfitItem {
                    category: c.to_string(),
                    item: format!("{} item", c),
                    styling_tip: "tip".into(),
                })
                .collect(),
            overall_styling_tip: "Have fun".into(),
            color_palette: vec!["#000000".into(), "#FF00FF".into()],
        };
        let (state, effect) = SessionState::new()
            .apply(SessionEvent::SelectOccasion(Occasion::Party))
            .0
            .apply(SessionEvent::RecommendationRequested);
        assert!(matches!(effect, Effect::Run(_)));
        assert!(SessionView::from_state(&state).generating);

        let state = state.apply(SessionEvent::RecommendationSucceeded(outfit)).0;
        let view = SessionView::from_state(&state);
        let card = view.recommendation.expect("recommendation card");
        assert_eq!(card.items.len(), 3);
        assert!(!card.palette.is_empty());
        assert!(view.occasions.iter().any(|c| c.selected && c.occasion == Occasion::Party));
        assert!(view.can_generate);
        assert!(!view.try_on.can_try_on);

        let state = state
            .apply(SessionEvent::ImageCaptured(CapturedImage::new(
                EncodedImage::new("image/png", vec![0; 3]),
                CaptureSource::Camera,
            )))
            .0;
        let view = SessionView::from_state(&state);
        assert!(view.try_on.can_try_on);
        assert_eq!(view.try_on.original.unwrap().size, 3);
        assert!(view.try_on.result.is_none());
    }
}
