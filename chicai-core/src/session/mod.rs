pub mod state;
pub mod view;

pub use state::{
    Command, Effect, FailureNotice, ImagePhase, Operation, Pending, RecommendationPhase,
    Revision, SessionEvent, SessionState, TryOnTicket,
};
pub use view::{
    ItemRow, OccasionCard, OriginalPhoto, RecommendationCard, SessionView, TryOnPanel, WeatherCard,
};
