// File: chicai-core/src/capture/camera.rs

use std::path::PathBuf;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use tracing::{debug, info};

use chicai_common::models::{CaptureSource, CapturedImage, EncodedImage};
use chicai_common::traits::{CameraDevice, Facing, Frame, VideoStream};
use chicai_common::Error;

pub const JPEG_QUALITY: u8 = 90;

/// Encodes one RGB frame as a JPEG still.
pub fn encode_jpeg(frame: &Frame, quality: u8) -> Result<EncodedImage, Error> {
    let expected = frame.width as usize * frame.height as usize * 3;
    if frame.width == 0 || frame.height == 0 || frame.rgb.len() != expected {
        return Err(Error::Image(format!(
            "frame {}x{} carries {} bytes, expected {}",
            frame.width,
            frame.height,
            frame.rgb.len(),
            expected
        )));
    }
    let img = RgbImage::from_raw(frame.width, frame.height, frame.rgb.clone())
        .ok_or_else(|| Error::Image("frame buffer does not match its dimensions".into()))?;

    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .encode_image(&img)
        .map_err(|e| Error::Image(e.to_string()))?;
    Ok(EncodedImage::new("image/jpeg", buf))
}

/// One visit to capture mode.
///
/// Owns the video stream from `open` until the session is confirmed, closed or
/// dropped; every one of those paths stops the stream. Between `take_photo` and
/// `confirm` the user can `retake` as often as they like.
pub struct CaptureSession {
    stream: Box<dyn VideoStream>,
    snapshot: Option<EncodedImage>,
    quality: u8,
}

impl CaptureSession {
    /// Asks the device for the forward-facing camera.
    pub async fn open(device: &dyn CameraDevice) -> Result<Self, Error> {
        let stream = device.open(Facing::User).await?;
        info!("Camera stream opened");
        Ok(Self {
            stream,
            snapshot: None,
            quality: JPEG_QUALITY,
        })
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    /// True while showing the live preview rather than a frozen snapshot.
    pub fn is_previewing(&self) -> bool {
        self.snapshot.is_none()
    }

    pub fn snapshot(&self) -> Option<&EncodedImage> {
        self.snapshot.as_ref()
    }

    /// Freezes the current frame. Replaces any earlier snapshot.
    pub fn take_photo(&mut self) -> Result<&EncodedImage, Error> {
        let frame = self.stream.current_frame()?;
        let still = encode_jpeg(&frame, self.quality)?;
        debug!("Snapshot taken: {:?} -> {} bytes", frame, still.len());
        Ok(&*self.snapshot.insert(still))
    }

    /// Drops the snapshot and goes back to the live preview.
    pub fn retake(&mut self) {
        if self.snapshot.take().is_some() {
            debug!("Snapshot discarded, back to preview");
        }
    }

    /// Emits the snapshot and releases the camera. Without a snapshot the
    /// session is handed back unchanged.
    pub fn confirm(mut self) -> Result<CapturedImage, CaptureSession> {
        match self.snapshot.take() {
            Some(still) => Ok(CapturedImage::new(still, CaptureSource::Camera)),
            None => Err(self),
        }
    }

    /// Leaves capture mode without a photo.
    pub fn close(self) {}
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.stream.is_live() {
            self.stream.stop();
            info!("Camera stream released");
        }
    }
}

/// A "camera" backed by a still image file, e.g. a frame dumped from a
/// loopback video device. Every frame is the same picture.
pub struct StillFrameCamera {
    path: PathBuf,
}

impl StillFrameCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CameraDevice for StillFrameCamera {
    async fn open(&self, facing: Facing) -> Result<Box<dyn VideoStream>, Error> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(Error::Permission(format!("{}: {}", self.path.display(), e)));
            }
            Err(e) => {
                return Err(Error::Resource(format!("{}: {}", self.path.display(), e)));
            }
        };
        let decoded = image::load_from_memory(&bytes).map_err(|e| Error::Image(e.to_string()))?;
        let rgb = decoded.to_rgb8();
        debug!(
            "Still-frame camera {:?} opened from {} ({}x{})",
            facing,
            self.path.display(),
            rgb.width(),
            rgb.height()
        );
        Ok(Box::new(StillFrameStream {
            frame: Frame {
                width: rgb.width(),
                height: rgb.height(),
                rgb: rgb.into_raw(),
            },
            live: true,
        }))
    }
}

pub struct StillFrameStream {
    frame: Frame,
    live: bool,
}

impl VideoStream for StillFrameStream {
    fn current_frame(&mut self) -> Result<Frame, Error> {
        if !self.live {
            return Err(Error::Resource("camera stream has been stopped".into()));
        }
        Ok(self.frame.clone())
    }

    fn stop(&mut self) {
        self.live = false;
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

/// No camera hardware; discovered only when capture is attempted.
pub struct NoCamera;

#[async_trait]
impl CameraDevice for NoCamera {
    async fn open(&self, _facing: Facing) -> Result<Box<dyn VideoStream>, Error> {
        Err(Error::Resource("no camera is available on this device".into()))
    }
}
