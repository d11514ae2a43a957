//! Helpers for reading `generateContent` response bodies.

use serde_json::Value;

/// Parts of the first candidate, in order. Empty when the shape is unexpected.
pub fn first_candidate_parts(response: &Value) -> &[Value] {
    response
        .pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Concatenated `text` parts of the first candidate.
pub fn response_text(response: &Value) -> String {
    first_candidate_parts(response)
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect()
}
