// File: chicai-tui/src/app.rs

use std::sync::{Arc, Mutex};

use chicai_common::traits::CameraDevice;
use chicai_core::capture::CaptureSession;
use chicai_core::StylistService;

/// Interactive front end state: the session plus whatever capture mode holds.
pub struct TuiApp {
    pub service: Arc<StylistService>,
    camera: Arc<dyn CameraDevice>,
    /// `Some` while in capture mode.
    capture: Mutex<Option<CaptureSession>>,
}

impl TuiApp {
    pub fn new(service: Arc<StylistService>, camera: Arc<dyn CameraDevice>) -> Self {
        Self {
            service,
            camera,
            capture: Mutex::new(None),
        }
    }

    pub fn camera(&self) -> &dyn CameraDevice {
        self.camera.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.lock().map(|c| c.is_some()).unwrap_or(false)
    }

    pub fn prompt_string(&self) -> &'static str {
        if self.is_capturing() {
            "camera> "
        } else {
            "chicai> "
        }
    }

    pub(crate) fn begin_capture(&self, session: CaptureSession) {
        if let Ok(mut slot) = self.capture.lock() {
            *slot = Some(session);
        }
    }

    /// Takes the capture session out of the app; put it back with `begin_capture`.
    pub(crate) fn take_capture(&self) -> Option<CaptureSession> {
        self.capture.lock().ok().and_then(|mut slot| slot.take())
    }

    /// Runs `f` against the open capture session, if any.
    pub(crate) fn with_capture<R>(&self, f: impl FnOnce(&mut CaptureSession) -> R) -> Option<R> {
        let mut slot = self.capture.lock().ok()?;
        slot.as_mut().map(f)
    }

    /// Closes capture mode if it is open; releases the camera.
    pub fn end_capture(&self) -> bool {
        match self.take_capture() {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        }
    }
}
