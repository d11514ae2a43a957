// File: chicai-core/src/services/mod.rs

pub mod stylist_service;

pub use stylist_service::StylistService;

/// How a session operation ended. Failures are also recorded on the session
/// as a notice, so callers may ignore the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The backend answered but had nothing to offer (no weather, no image),
    /// or the answer arrived after its inputs were replaced.
    NoResult,
    Failed(String),
    /// Refused without calling anything.
    Blocked(&'static str),
}
