// File: chicai-tui/src/commands/mod.rs

use chicai_core::Outcome;

use crate::app::TuiApp;
use crate::help::show_command_help;
use crate::render;

mod photo;
mod style;

pub use photo::handle_capture_line;
pub use style::startup_weather;

/// Runs one prompt line. Returns `(quit_requested, output)`.
pub async fn dispatch(line: &str, app: &TuiApp) -> (bool, Option<String>) {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let cmd = parts.first().unwrap_or(&"").to_lowercase();
    let args = parts.get(1..).unwrap_or(&[]);

    match cmd.as_str() {
        "" => (false, None),
        "help" => (false, Some(show_command_help(args.first().copied()))),
        "occasions" => (false, Some(render::render_occasions(&app.service.view()))),
        "occasion" => (false, Some(style::handle_occasion(args, app))),
        "context" => (false, Some(style::handle_context(line, args, app))),
        "weather" => (false, Some(style::handle_weather(app).await)),
        "recommend" => (false, Some(style::handle_recommend(app).await)),
        "tryon" | "try-on" => (false, Some(style::handle_try_on(app).await)),
        "upload" => (false, Some(photo::handle_upload(line, app).await)),
        "camera" => (false, Some(photo::handle_camera(app).await)),
        "clear" => (false, Some(photo::handle_clear(app))),
        "save" => (false, Some(photo::handle_save(line, app).await)),
        "show" => (false, Some(render::render_view(&app.service.view()))),
        "dismiss" => {
            app.service.dismiss_notice();
            (false, None)
        }
        "quit" | "exit" => {
            app.end_capture();
            (true, Some("Goodbye!".to_string()))
        }
        other => (
            false,
            Some(format!("Unknown command '{}'. Type 'help' for usage.", other)),
        ),
    }
}

/// Everything after the command word, with inner spacing preserved.
pub(crate) fn rest_of_line<'a>(line: &'a str, cmd: &str) -> &'a str {
    let trimmed = line.trim_start();
    trimmed.get(cmd.len()..).unwrap_or("").trim()
}

/// One-line explanation of an outcome; `success` renders the completed case.
pub(crate) fn describe(outcome: &Outcome, success: impl FnOnce() -> String) -> String {
    match outcome {
        Outcome::Completed => success(),
        Outcome::NoResult => "Nothing came back.".to_string(),
        Outcome::Failed(reason) => format!("Failed: {}", reason),
        Outcome::Blocked(reason) => format!("Not now: {}", reason),
    }
}
