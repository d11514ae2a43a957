//! chicai-core/src/session/state.rs
//!
//! The session as an immutable snapshot plus a pure transition function.
//! Nothing in here performs I/O: a transition that needs a backend call returns
//! an [`Effect::Run`] command and the caller feeds the completion back in as
//! another event.

use std::sync::Arc;

use tracing::{debug, warn};

use chicai_common::models::{
    CapturedImage, EncodedImage, Occasion, OutfitRecommendation, RecommendationRequest,
    TryOnRequest, TryOnResult, WeatherSnapshot,
};

/// Monotonic counter bumped whenever an input of the try-on changes.
pub type Revision = u64;

/// Identifies the inputs a try-on was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryOnTicket {
    pub image_revision: Revision,
    pub recommendation_revision: Revision,
}

/// Which operation a failure notice belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Recommendation,
    TryOn,
    Capture,
}

/// User-visible explanation of the last failed operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureNotice {
    pub operation: Operation,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationPhase {
    Idle,
    OccasionSelected,
    Pending,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePhase {
    NoImage,
    ImageCaptured,
    TryOnPending,
    TryOnReady,
}

/// In-flight markers. Set before a call is issued and cleared by its completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pending {
    pub weather: bool,
    pub recommendation: bool,
    pub try_on: Option<TryOnTicket>,
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    SelectOccasion(Occasion),
    SetUserContext(Option<String>),
    WeatherRequested,
    WeatherResolved(Option<WeatherSnapshot>),
    RecommendationRequested,
    RecommendationSucceeded(OutfitRecommendation),
    RecommendationFailed(String),
    /// A new photo from either the camera or an upload.
    ImageCaptured(CapturedImage),
    ImageCleared,
    /// Camera or upload failed before producing an image.
    CaptureFailed(String),
    TryOnRequested,
    TryOnSucceeded { ticket: TryOnTicket, image: EncodedImage },
    /// The model answered without an image.
    TryOnEmpty { ticket: TryOnTicket },
    TryOnFailed { ticket: TryOnTicket, reason: String },
    DismissNotice,
}

/// Backend work requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LookupWeather,
    GenerateRecommendation(RecommendationRequest),
    GenerateTryOn { ticket: TryOnTicket, request: TryOnRequest },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Run(Command),
    /// The event was refused; the state is unchanged.
    Blocked(&'static str),
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    occasion: Option<Occasion>,
    weather: Option<WeatherSnapshot>,
    user_context: Option<String>,
    recommendation: Option<Arc<OutfitRecommendation>>,
    recommendation_revision: Revision,
    image: Option<Arc<CapturedImage>>,
    image_revision: Revision,
    try_on: Option<Arc<TryOnResult>>,
    pending: Pending,
    notice: Option<FailureNotice>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occasion(&self) -> Option<Occasion> {
        self.occasion
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn user_context(&self) -> Option<&str> {
        self.user_context.as_deref()
    }

    pub fn recommendation(&self) -> Option<&Arc<OutfitRecommendation>> {
        self.recommendation.as_ref()
    }

    pub fn image(&self) -> Option<&Arc<CapturedImage>> {
        self.image.as_ref()
    }

    pub fn try_on(&self) -> Option<&Arc<TryOnResult>> {
        self.try_on.as_ref()
    }

    pub fn pending(&self) -> &Pending {
        &self.pending
    }

    pub fn notice(&self) -> Option<&FailureNotice> {
        self.notice.as_ref()
    }

    pub fn recommendation_phase(&self) -> RecommendationPhase {
        if self.pending.recommendation {
            RecommendationPhase::Pending
        } else if self.recommendation.is_some() {
            RecommendationPhase::Ready
        } else if self.occasion.is_some() {
            RecommendationPhase::OccasionSelected
        } else {
            RecommendationPhase::Idle
        }
    }

    pub fn image_phase(&self) -> ImagePhase {
        if self.image.is_none() {
            ImagePhase::NoImage
        } else if self.pending.try_on.is_some() {
            ImagePhase::TryOnPending
        } else if self.try_on.is_some() {
            ImagePhase::TryOnReady
        } else {
            ImagePhase::ImageCaptured
        }
    }

    fn current_ticket(&self) -> TryOnTicket {
        TryOnTicket {
            image_revision: self.image_revision,
            recommendation_revision: self.recommendation_revision,
        }
    }

    /// Whether a try-on started with `ticket` would still match the current inputs.
    pub fn is_current(&self, ticket: TryOnTicket) -> bool {
        ticket == self.current_ticket()
    }

    /// Takes the pending try-on marker if it belongs to `ticket`. Returns whether
    /// the ticket still describes the current image and recommendation.
    fn settle_try_on(&mut self, ticket: TryOnTicket) -> bool {
        if self.pending.try_on == Some(ticket) {
            self.pending.try_on = None;
        } else {
            warn!("Try-on completion for unknown ticket {:?}", ticket);
        }
        ticket == self.current_ticket()
    }

    fn fail(&mut self, operation: Operation, message: impl Into<String>) {
        self.notice = Some(FailureNotice {
            operation,
            message: message.into(),
        });
    }

    /// Applies one event, returning the next snapshot and the work it asks for.
    pub fn apply(mut self, event: SessionEvent) -> (SessionState, Effect) {
        let effect = match event {
            SessionEvent::SelectOccasion(occasion) => {
                self.occasion = Some(occasion);
                Effect::None
            }

            SessionEvent::SetUserContext(context) => {
                self.user_context = context
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty());
                Effect::None
            }

            SessionEvent::WeatherRequested => {
                if self.pending.weather {
                    return (self, Effect::Blocked("weather lookup already in progress"));
                }
                self.pending.weather = true;
                Effect::Run(Command::LookupWeather)
            }

            SessionEvent::WeatherResolved(snapshot) => {
                self.pending.weather = false;
                self.weather = snapshot;
                Effect::None
            }

            SessionEvent::RecommendationRequested => {
                let Some(occasion) = self.occasion else {
                    return (self, Effect::Blocked("select an occasion first"));
                };
                if self.pending.recommendation {
                    return (self, Effect::Blocked("a recommendation is already being generated"));
                }
                self.pending.recommendation = true;
                let request = RecommendationRequest {
                    occasion,
                    weather: self.weather.as_ref().map(WeatherSnapshot::prompt_fragment),
                    user_context: self.user_context.clone(),
                };
                Effect::Run(Command::GenerateRecommendation(request))
            }

            SessionEvent::RecommendationSucceeded(recommendation) => {
                if !self.pending.recommendation {
                    warn!("Ignoring recommendation that nobody asked for");
                    return (self, Effect::None);
                }
                self.pending.recommendation = false;
                if recommendation.items.is_empty() || recommendation.color_palette.is_empty() {
                    self.fail(Operation::Recommendation, "The stylist returned an incomplete outfit.");
                    return (self, Effect::None);
                }
                self.recommendation = Some(Arc::new(recommendation));
                self.recommendation_revision += 1;
                self.try_on = None;
                if self.notice.as_ref().is_some_and(|n| n.operation == Operation::Recommendation) {
                    self.notice = None;
                }
                Effect::None
            }

            SessionEvent::RecommendationFailed(reason) => {
                self.pending.recommendation = false;
                self.fail(Operation::Recommendation, reason);
                Effect::None
            }

            SessionEvent::ImageCaptured(image) => {
                debug!("New {:?} image ({} bytes)", image.source, image.image.len());
                self.image = Some(Arc::new(image));
                self.image_revision += 1;
                self.try_on = None;
                if self.notice.as_ref().is_some_and(|n| n.operation == Operation::Capture) {
                    self.notice = None;
                }
                Effect::None
            }

            SessionEvent::ImageCleared => {
                if self.image.is_none() {
                    return (self, Effect::Blocked("there is no image to clear"));
                }
                self.image = None;
                self.image_revision += 1;
                self.try_on = None;
                Effect::None
            }

            SessionEvent::CaptureFailed(reason) => {
                self.fail(Operation::Capture, reason);
                Effect::None
            }

            SessionEvent::TryOnRequested => {
                let (Some(image), Some(recommendation)) = (&self.image, &self.recommendation) else {
                    return (self, Effect::Blocked("a photo and a recommendation are both required"));
                };
                if self.pending.try_on.is_some() {
                    return (self, Effect::Blocked("a try-on is already being generated"));
                }
                let request = TryOnRequest {
                    image: image.image.clone(),
                    outfit_description: recommendation.outfit_description(),
                };
                let ticket = self.current_ticket();
                self.pending.try_on = Some(ticket);
                Effect::Run(Command::GenerateTryOn { ticket, request })
            }

            SessionEvent::TryOnSucceeded { ticket, image } => {
                if self.settle_try_on(ticket) {
                    self.try_on = Some(Arc::new(TryOnResult::new(image)));
                    if self.notice.as_ref().is_some_and(|n| n.operation == Operation::TryOn) {
                        self.notice = None;
                    }
                } else {
                    debug!("Discarding try-on result for replaced inputs");
                }
                Effect::None
            }

            SessionEvent::TryOnEmpty { ticket } => {
                if self.settle_try_on(ticket) {
                    self.try_on = None;
                    self.fail(Operation::TryOn, "The stylist did not return an image. Try again.");
                }
                Effect::None
            }

            SessionEvent::TryOnFailed { ticket, reason } => {
                if self.settle_try_on(ticket) {
                    self.try_on = None;
                    self.fail(Operation::TryOn, reason);
                }
                Effect::None
            }

            SessionEvent::DismissNotice => {
                self.notice = None;
                Effect::None
            }
        };
        (self, effect)
    }
}
