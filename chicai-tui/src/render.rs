// File: chicai-tui/src/render.rs
//
// Plain-text rendering of the session view model.

use std::fmt::Write;

use colored::Colorize;

use chicai_core::session::{RecommendationCard, SessionView, TryOnPanel, WeatherCard};

/// `#RRGGBB` (or `RRGGBB`) to its components.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// A colored block followed by the code; unparseable colors are shown as text only.
pub fn swatch(color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => format!("{} {}", "   ".on_truecolor(r, g, b), color),
        None => color.to_string(),
    }
}

pub fn render_occasions(view: &SessionView) -> String {
    let mut out = String::from("Occasions:\n");
    for card in &view.occasions {
        let marker = if card.selected { "*" } else { " " };
        let line = format!("  {} {:<10} ({})", marker, card.label, card.occasion.id());
        if card.selected {
            let _ = writeln!(out, "{}", line.bold());
        } else {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

pub fn render_weather(weather: Option<&WeatherCard>) -> String {
    match weather {
        Some(w) => format!("Weather: {} {} in {}", w.temperature.bold(), w.condition, w.location),
        None => "Weather: unavailable".dimmed().to_string(),
    }
}

pub fn render_recommendation(card: &RecommendationCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.title.bold().underline());
    let _ = writeln!(out, "{}", card.description);
    let _ = writeln!(out);
    for row in &card.items {
        let _ = writeln!(out, "  {:<12} {}", format!("{}:", row.category).cyan(), row.item);
        let _ = writeln!(out, "  {:<12} {}", "", row.styling_tip.italic());
    }
    let _ = writeln!(out);
    let swatches: Vec<String> = card.palette.iter().map(|c| swatch(c)).collect();
    let _ = writeln!(out, "Palette: {}", swatches.join("  "));
    let _ = write!(out, "Stylist's note: {}", card.stylist_note);
    out
}

pub fn render_try_on(panel: &TryOnPanel) -> String {
    let mut out = String::from("Try-on:\n");
    match &panel.original {
        Some(photo) => {
            let _ = writeln!(
                out,
                "  Photo: {:?} {} ({} bytes)",
                photo.source, photo.media_type, photo.size
            );
        }
        None => {
            let _ = writeln!(out, "  Photo: none (use 'upload <path>' or 'camera')");
        }
    }
    if panel.pending {
        let _ = writeln!(out, "  {}", "Generating...".yellow());
    } else if let Some(result) = &panel.result {
        let _ = writeln!(
            out,
            "  Result: {} ({} bytes), use 'save <path>'",
            result.image.media_type,
            result.image.len()
        );
    } else if panel.can_try_on {
        let _ = writeln!(out, "  Ready: type 'tryon'");
    }
    out.trim_end().to_string()
}

/// Everything on screen, top to bottom.
pub fn render_view(view: &SessionView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", render_weather(view.weather.as_ref()));
    out.push_str(&render_occasions(view));
    if view.generating {
        let _ = writeln!(out, "{}", "Generating recommendation...".yellow());
    }
    if let Some(card) = &view.recommendation {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", render_recommendation(card));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_try_on(&view.try_on));
    if let Some(notice) = &view.notice {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {}", "!".red().bold(), notice.red());
    }
    out.trim_end().to_string()
}
