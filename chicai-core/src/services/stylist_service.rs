// File: chicai-core/src/services/stylist_service.rs

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use chicai_ai::AiClient;
use chicai_common::models::{CapturedImage, Occasion};
use chicai_common::traits::{
    CameraDevice, Geolocator, RecommendationGenerator, TryOnGenerator, WeatherLookup,
};
use chicai_common::Error;

use crate::capture::{self, CaptureSession};
use crate::config::StylistConfig;
use crate::services::Outcome;
use crate::session::{Command, Effect, SessionEvent, SessionState, SessionView};
use crate::weather::{OpenMeteoClient, WeatherService};

/// Drives one styling session.
///
/// Every user action becomes a [`SessionEvent`]; when the reducer asks for
/// backend work the call is made here and its completion is fed back as another
/// event. The pending markers are set inside the same state update that accepts
/// the request, so concurrent callers can never start the same call twice.
pub struct StylistService {
    state: watch::Sender<SessionState>,
    recommender: Arc<dyn RecommendationGenerator>,
    try_on: Arc<dyn TryOnGenerator>,
    weather: Arc<dyn WeatherLookup>,
}

impl StylistService {
    pub fn new(
        recommender: Arc<dyn RecommendationGenerator>,
        try_on: Arc<dyn TryOnGenerator>,
        weather: Arc<dyn WeatherLookup>,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::new());
        Self {
            state,
            recommender,
            try_on,
            weather,
        }
    }

    /// Wires the Gemini-backed generators and the Open-Meteo weather lookup.
    pub fn from_config(
        config: StylistConfig,
        geolocator: Arc<dyn Geolocator>,
        location_label: impl Into<String>,
    ) -> Result<Self, Error> {
        if !config.has_api_key() {
            warn!("No API key configured; recommendations and try-on will fail");
        }
        let weather_client = OpenMeteoClient::new(
            config.weather_api_base.clone(),
            Duration::from_secs(config.weather_timeout_secs),
        )?;
        let weather = WeatherService::new(geolocator, weather_client, location_label);
        let ai = Arc::new(AiClient::from_config(config.into_provider_config())?);
        Ok(Self::new(ai.clone(), ai, Arc::new(weather)))
    }

    /// Latest session snapshot.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn view(&self) -> SessionView {
        SessionView::from_state(&self.state.borrow())
    }

    /// Receives every new snapshot, including ones produced by background work.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    fn dispatch(&self, event: SessionEvent) -> Effect {
        let mut effect = Effect::None;
        self.state.send_modify(|state| {
            let (next, e) = std::mem::take(state).apply(event);
            *state = next;
            effect = e;
        });
        effect
    }

    /// Applies `event` and evaluates `check` against the resulting state in the
    /// same update.
    fn dispatch_checked(
        &self,
        event: SessionEvent,
        check: impl FnOnce(&SessionState) -> bool,
    ) -> bool {
        let mut passed = false;
        self.state.send_modify(|state| {
            let (next, _) = std::mem::take(state).apply(event);
            passed = check(&next);
            *state = next;
        });
        passed
    }

    fn immediate(effect: Effect) -> Outcome {
        match effect {
            Effect::Blocked(reason) => {
                debug!("Blocked: {}", reason);
                Outcome::Blocked(reason)
            }
            _ => Outcome::Completed,
        }
    }

    pub fn select_occasion(&self, occasion: Occasion) -> Outcome {
        info!("Occasion selected: {}", occasion);
        Self::immediate(self.dispatch(SessionEvent::SelectOccasion(occasion)))
    }

    pub fn set_user_context(&self, context: Option<String>) -> Outcome {
        Self::immediate(self.dispatch(SessionEvent::SetUserContext(context)))
    }

    pub fn dismiss_notice(&self) {
        self.dispatch(SessionEvent::DismissNotice);
    }

    pub async fn refresh_weather(&self) -> Outcome {
        match self.dispatch(SessionEvent::WeatherRequested) {
            Effect::Run(command) => self.run(command).await,
            other => Self::immediate(other),
        }
    }

    pub async fn request_recommendation(&self) -> Outcome {
        match self.dispatch(SessionEvent::RecommendationRequested) {
            Effect::Run(command) => self.run(command).await,
            other => Self::immediate(other),
        }
    }

    pub async fn request_try_on(&self) -> Outcome {
        match self.dispatch(SessionEvent::TryOnRequested) {
            Effect::Run(command) => self.run(command).await,
            other => Self::immediate(other),
        }
    }

    /// Replaces the session photo. Any try-on of the old photo is dropped.
    pub fn capture_image(&self, image: CapturedImage) -> Outcome {
        Self::immediate(self.dispatch(SessionEvent::ImageCaptured(image)))
    }

    pub fn upload_image(&self, bytes: Vec<u8>, declared: Option<&str>) -> Outcome {
        match capture::decode_upload(bytes, declared) {
            Ok(image) => self.capture_image(image),
            Err(e) => self.report_capture_failure(&e),
        }
    }

    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Outcome {
        match capture::upload_from_path(path).await {
            Ok(image) => self.capture_image(image),
            Err(e) => self.report_capture_failure(&e),
        }
    }

    /// Opens capture mode. A refused or missing camera is recorded as a notice
    /// and `None` is returned; the session carries on without a photo.
    pub async fn open_camera(&self, device: &dyn CameraDevice) -> Option<CaptureSession> {
        match CaptureSession::open(device).await {
            Ok(session) => Some(session),
            Err(e) => {
                self.report_capture_failure(&e);
                None
            }
        }
    }

    pub fn report_capture_failure(&self, err: &Error) -> Outcome {
        warn!("Capture failed: {}", err);
        let message = match err {
            Error::Permission(_) => {
                "Camera access was denied. Allow camera access or upload a photo instead.".to_string()
            }
            Error::Resource(_) => format!("No camera available: {}", err),
            _ => format!("Could not use that image: {}", err),
        };
        self.dispatch(SessionEvent::CaptureFailed(message.clone()));
        Outcome::Failed(message)
    }

    pub fn clear_image(&self) -> Outcome {
        Self::immediate(self.dispatch(SessionEvent::ImageCleared))
    }

    async fn run(&self, command: Command) -> Outcome {
        match command {
            Command::LookupWeather => {
                debug!("Looking up weather");
                let previous = self.state.borrow().weather().cloned();
                let guard = InFlight::arm(self, SessionEvent::WeatherResolved(previous));
                let snapshot = self.weather.current_weather().await;
                guard.disarm();
                let found = snapshot.is_some();
                if !found {
                    info!("Continuing without weather");
                }
                self.dispatch(SessionEvent::WeatherResolved(snapshot));
                if found {
                    Outcome::Completed
                } else {
                    Outcome::NoResult
                }
            }

            Command::GenerateRecommendation(request) => {
                let guard = InFlight::arm(
                    self,
                    SessionEvent::RecommendationFailed(
                        "The recommendation request was interrupted.".to_string(),
                    ),
                );
                let result = self.recommender.recommend(&request).await;
                guard.disarm();
                match result {
                    Ok(rec) if rec.items.is_empty() || rec.color_palette.is_empty() => {
                        let reason = "The stylist returned an incomplete outfit.".to_string();
                        warn!("{}", reason);
                        self.dispatch(SessionEvent::RecommendationFailed(reason.clone()));
                        Outcome::Failed(reason)
                    }
                    Ok(rec) => {
                        info!("Recommendation ready: {} ({} items)", rec.title, rec.items.len());
                        self.dispatch(SessionEvent::RecommendationSucceeded(rec));
                        Outcome::Completed
                    }
                    Err(e) => {
                        warn!("Recommendation failed ({}): {}", e.kind(), e);
                        let reason = format!("Could not generate a recommendation: {}", e);
                        self.dispatch(SessionEvent::RecommendationFailed(reason.clone()));
                        Outcome::Failed(reason)
                    }
                }
            }

            Command::GenerateTryOn { ticket, request } => {
                info!(
                    "Generating try-on for '{}' ({} byte {})",
                    request.outfit_description,
                    request.image.len(),
                    request.image.media_type
                );
                let guard = InFlight::arm(
                    self,
                    SessionEvent::TryOnFailed {
                        ticket,
                        reason: "The try-on request was interrupted.".to_string(),
                    },
                );
                let result = self.try_on.try_on(&request).await;
                guard.disarm();
                match result {
                    Ok(Some(image)) => {
                        let kept = self.dispatch_checked(
                            SessionEvent::TryOnSucceeded { ticket, image },
                            |state| state.is_current(ticket),
                        );
                        if kept {
                            Outcome::Completed
                        } else {
                            info!("Try-on finished after its inputs changed; result discarded");
                            Outcome::NoResult
                        }
                    }
                    Ok(None) => {
                        warn!("Try-on returned no image");
                        self.dispatch(SessionEvent::TryOnEmpty { ticket });
                        Outcome::NoResult
                    }
                    Err(e) => {
                        warn!("Try-on failed ({}): {}", e.kind(), e);
                        let reason = format!("Could not generate the try-on: {}", e);
                        self.dispatch(SessionEvent::TryOnFailed {
                            ticket,
                            reason: reason.clone(),
                        });
                        Outcome::Failed(reason)
                    }
                }
            }
        }
    }
}

/// Settles an accepted backend call if its future is dropped or the backend
/// panics before the completion event is dispatched.
struct InFlight<'a> {
    service: &'a StylistService,
    abandon: Option<SessionEvent>,
}

impl<'a> InFlight<'a> {
    fn arm(service: &'a StylistService, abandon: SessionEvent) -> Self {
        Self {
            service,
            abandon: Some(abandon),
        }
    }

    fn disarm(mut self) {
        self.abandon = None;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(event) = self.abandon.take() {
            warn!("Backend call abandoned before completion; releasing its pending marker");
            self.service.dispatch(event);
        }
    }
}
