// File: chicai-tui/src/commands/photo.rs

use tracing::info;

use crate::app::TuiApp;
use crate::commands::{describe, rest_of_line};
use crate::render;

fn photo_summary(app: &TuiApp) -> String {
    match app.service.view().try_on.original {
        Some(photo) => format!("Photo set: {} ({} bytes).", photo.media_type, photo.size),
        None => "No photo.".to_string(),
    }
}

pub async fn handle_upload(line: &str, app: &TuiApp) -> String {
    let path = rest_of_line(line, "upload");
    if path.is_empty() {
        return "Usage: upload <path>".to_string();
    }
    let outcome = app.service.upload_file(path).await;
    describe(&outcome, || photo_summary(app))
}

pub fn handle_clear(app: &TuiApp) -> String {
    let outcome = app.service.clear_image();
    describe(&outcome, || "Photo removed.".to_string())
}

pub async fn handle_save(line: &str, app: &TuiApp) -> String {
    let path = rest_of_line(line, "save");
    if path.is_empty() {
        return "Usage: save <path>".to_string();
    }
    let Some(result) = app.service.view().try_on.result else {
        return "There is no try-on image to save yet.".to_string();
    };
    match tokio::fs::write(path, &result.image.data).await {
        Ok(()) => {
            info!("Saved try-on image to {}", path);
            format!("Saved {} ({} bytes) to {}", result.image.media_type, result.image.len(), path)
        }
        Err(e) => format!("Could not write {}: {}", path, e),
    }
}

pub async fn handle_camera(app: &TuiApp) -> String {
    if app.is_capturing() {
        return "Already in capture mode.".to_string();
    }
    match app.service.open_camera(app.camera()).await {
        Some(session) => {
            app.begin_capture(session);
            "Camera on. Commands: snap, retake, confirm, close".to_string()
        }
        None => app
            .service
            .view()
            .notice
            .unwrap_or_else(|| "The camera could not be opened.".to_string()),
    }
}

/// Handles one line while in capture mode. Returns `(consumed, output)`;
/// `quit` is left for the main dispatcher.
pub fn handle_capture_line(line: &str, app: &TuiApp) -> (bool, Option<String>) {
    if !app.is_capturing() {
        return (false, None);
    }

    let cmd = line.split_whitespace().next().unwrap_or("").to_lowercase();
    let output = match cmd.as_str() {
        "snap" => app
            .with_capture(|session| match session.take_photo() {
                Ok(still) => format!("Snapshot taken ({} bytes). 'confirm' to use it or 'retake'.", still.len()),
                Err(e) => format!("Could not take a snapshot: {}", e),
            })
            .unwrap_or_default(),
        "retake" => app
            .with_capture(|session| {
                session.retake();
                "Back to the live preview.".to_string()
            })
            .unwrap_or_default(),
        "confirm" => match app.take_capture() {
            Some(session) => match session.confirm() {
                Ok(captured) => {
                    let outcome = app.service.capture_image(captured);
                    describe(&outcome, || format!("{} Camera closed.", photo_summary(app)))
                }
                Err(session) => {
                    app.begin_capture(session);
                    "Take a snapshot first ('snap').".to_string()
                }
            },
            None => String::new(),
        },
        "close" | "cancel" => {
            app.end_capture();
            "Camera closed without a photo.".to_string()
        }
        "show" => render::render_try_on(&app.service.view().try_on),
        "quit" | "exit" => return (false, None),
        _ => "In capture mode: snap, retake, confirm, close".to_string(),
    };
    (true, Some(output))
}
