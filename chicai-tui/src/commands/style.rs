// File: chicai-tui/src/commands/style.rs

use std::str::FromStr;

use chicai_common::models::Occasion;
use chicai_core::{Outcome, StylistService};

use crate::app::TuiApp;
use crate::commands::{describe, rest_of_line};
use crate::render;

pub fn handle_occasion(args: &[&str], app: &TuiApp) -> String {
    let Some(raw) = args.first() else {
        return "Usage: occasion <casual|office|party|date-night|wedding|sport>".to_string();
    };
    match Occasion::from_str(raw) {
        Ok(occasion) => {
            app.service.select_occasion(occasion);
            format!("Dressing for: {}", occasion.label())
        }
        Err(e) => format!("{}. Type 'occasions' to list them.", e),
    }
}

pub fn handle_context(line: &str, args: &[&str], app: &TuiApp) -> String {
    match args {
        [] => match app.service.snapshot().user_context() {
            Some(ctx) => format!("Context: {}", ctx),
            None => "No context set. Usage: context <text> | context clear".to_string(),
        },
        [word] if word.eq_ignore_ascii_case("clear") => {
            app.service.set_user_context(None);
            "Context cleared.".to_string()
        }
        _ => {
            let text = rest_of_line(line, "context");
            app.service.set_user_context(Some(text.to_string()));
            format!("Context: {}", text)
        }
    }
}

/// The weather card for the lookup made at startup; `None` when it found nothing.
pub async fn startup_weather(service: &StylistService) -> Option<String> {
    match service.refresh_weather().await {
        Outcome::Completed => Some(render::render_weather(service.view().weather.as_ref())),
        _ => None,
    }
}

pub async fn handle_weather(app: &TuiApp) -> String {
    let outcome = app.service.refresh_weather().await;
    match outcome {
        Outcome::NoResult => {
            "Weather is unavailable; recommendations will ignore it.".to_string()
        }
        other => describe(&other, || render::render_weather(app.service.view().weather.as_ref())),
    }
}

pub async fn handle_recommend(app: &TuiApp) -> String {
    let view = app.service.view();
    if !view.can_generate {
        return if view.generating {
            "A recommendation is already being generated.".to_string()
        } else {
            "Pick an occasion first (see 'occasions').".to_string()
        };
    }

    println!("Asking the stylist...");
    let outcome = app.service.request_recommendation().await;
    describe(&outcome, || {
        app.service
            .view()
            .recommendation
            .as_ref()
            .map(render::render_recommendation)
            .unwrap_or_default()
    })
}

pub async fn handle_try_on(app: &TuiApp) -> String {
    let panel = app.service.view().try_on;
    if !panel.can_try_on {
        return if panel.pending {
            "A try-on is already being generated.".to_string()
        } else if panel.original.is_none() {
            "Add a photo first ('upload <path>' or 'camera').".to_string()
        } else if panel.result.is_some() {
            "A try-on is already showing. Use 'save <path>', or change the photo or outfit.".to_string()
        } else {
            "Generate a recommendation first ('recommend').".to_string()
        };
    }

    println!("Dressing you up, this can take a while...");
    let outcome = app.service.request_try_on().await;
    match outcome {
        chicai_core::Outcome::NoResult => app
            .service
            .view()
            .notice
            .unwrap_or_else(|| "The photo or outfit changed while generating; try again.".to_string()),
        other => describe(&other, || render::render_try_on(&app.service.view().try_on)),
    }
}
