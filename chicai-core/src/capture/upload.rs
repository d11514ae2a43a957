// File: chicai-core/src/capture/upload.rs

use std::path::Path;

use image::ImageFormat;
use tracing::debug;

use chicai_common::models::{CaptureSource, CapturedImage, EncodedImage};
use chicai_common::Error;

fn media_type_for(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Tiff => Some("image/tiff"),
        _ => None,
    }
}

/// Accepts a user-supplied file as the session photo.
///
/// The media type always comes from the bytes themselves; `declared` is only
/// used for logging when it disagrees.
pub fn decode_upload(bytes: Vec<u8>, declared: Option<&str>) -> Result<CapturedImage, Error> {
    if bytes.is_empty() {
        return Err(Error::UnsupportedMediaType("empty file".into()));
    }
    let format = image::guess_format(&bytes).map_err(|_| {
        Error::UnsupportedMediaType(declared.unwrap_or("unrecognized data").to_string())
    })?;
    let media_type = media_type_for(format)
        .ok_or_else(|| Error::UnsupportedMediaType(format!("{:?}", format)))?;

    if let Some(declared) = declared {
        if !declared.eq_ignore_ascii_case(media_type) {
            debug!("Upload declared as {} but looks like {}", declared, media_type);
        }
    }

    Ok(CapturedImage::new(
        EncodedImage::new(media_type, bytes),
        CaptureSource::Upload,
    ))
}

pub async fn upload_from_path(path: impl AsRef<Path>) -> Result<CapturedImage, Error> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_upload(bytes, None)
}

pub fn upload_from_data_uri(uri: &str) -> Result<CapturedImage, Error> {
    let image = EncodedImage::from_data_uri(uri)?;
    decode_upload(image.data, Some(&image.media_type))
}
