// File: chicai-common/src/traits/device_traits.rs

use async_trait::async_trait;

use crate::error::Error;
use crate::models::Coordinates;

/// Which camera to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Forward-facing ("selfie") camera.
    User,
    Environment,
}

/// A raw RGB8 video frame.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes, row-major.
    pub rgb: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame({}x{})", self.width, self.height)
    }
}

/// A live video stream. Holding one keeps the camera busy.
pub trait VideoStream: Send {
    /// The frame currently on screen.
    fn current_frame(&mut self) -> Result<Frame, Error>;

    /// Stops every track. Must be idempotent.
    fn stop(&mut self);

    fn is_live(&self) -> bool;
}

/// Access to the device camera (video only, no audio).
#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn open(&self, facing: Facing) -> Result<Box<dyn VideoStream>, Error>;
}

/// Single-shot position lookup; no continuous tracking.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, Error>;
}
