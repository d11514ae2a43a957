//! Try-on contract: instruction text, request body, and result extraction.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{json, Value};

use chicai_common::models::{EncodedImage, TryOnRequest};
use chicai_common::Error;

use crate::response::first_candidate_parts;

/// Media type assumed when an inline part omits it.
const FALLBACK_MEDIA_TYPE: &str = "image/png";

pub fn instruction(outfit_description: &str) -> String {
    format!(
        "Modify the person in this image to be wearing the following outfit: {}.\n\
         Ensure the clothing fits their body shape and face naturally.\n\
         Maintain the original person's identity but change their attire completely to match the description.\n\
         The output should be just the modified image.",
        outfit_description
    )
}

/// Image part first, instruction second.
pub fn request_body(request: &TryOnRequest) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                {
                    "inlineData": {
                        "mimeType": request.image.media_type,
                        "data": request.image.base64()
                    }
                },
                { "text": instruction(&request.outfit_description) }
            ]
        }],
        "generationConfig": {
            "responseModalities": ["TEXT", "IMAGE"]
        }
    })
}

/// The first inline image part of the first candidate, if any.
///
/// Text parts are skipped. A payload that is present but not valid base64 is an
/// error; no image at all is `Ok(None)`.
pub fn extract_image(response: &Value) -> Result<Option<EncodedImage>, Error> {
    for part in first_candidate_parts(response) {
        let Some(inline) = part
            .get("inlineData")
            .or_else(|| part.get("inline_data"))
            .and_then(Value::as_object)
        else {
            if let Some(text) = part.get("text").and_then(Value::as_str) {
                tracing::debug!("Try-on model text part: {}", text.trim());
            }
            continue;
        };

        let data = inline.get("data").and_then(Value::as_str).unwrap_or_default();
        if data.is_empty() {
            continue;
        }
        let media_type = inline
            .get("mimeType")
            .or_else(|| inline.get("mime_type"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_MEDIA_TYPE);

        let bytes = BASE64.decode(data.as_bytes())?;
        return Ok(Some(EncodedImage::new(media_type, bytes)));
    }
    Ok(None)
}
