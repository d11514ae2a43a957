// File: chicai-core/src/capture/mod.rs

pub mod camera;
pub mod upload;

pub use camera::{encode_jpeg, CaptureSession, NoCamera, StillFrameCamera, StillFrameStream, JPEG_QUALITY};
pub use upload::{decode_upload, upload_from_data_uri, upload_from_path};
