// File: chicai-core/src/lib.rs

pub mod capture;
pub mod config;
pub mod services;
pub mod session;
pub mod weather;

pub use chicai_common::Error;
pub use config::StylistConfig;
pub use services::{Outcome, StylistService};
pub use session::{SessionEvent, SessionState, SessionView};
