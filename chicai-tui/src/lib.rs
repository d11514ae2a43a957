// File: chicai-tui/src/lib.rs

pub mod app;
pub mod commands;
pub mod help;
pub mod render;

pub use app::TuiApp;
