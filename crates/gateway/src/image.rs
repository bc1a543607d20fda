//! Decoding of inbound image payloads.
//!
//! The upload widget sends images as base64 data URLs
//! (`data:image/png;base64,<payload>`). The proxy strips the prefix and
//! forwards the raw bytes to the model; bare base64 is accepted as well.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{GatewayError, Result};

/// Decode a data URL or bare base64 string into raw image bytes.
///
/// # Errors
/// Returns [`GatewayError::InvalidImage`] when the payload is empty or the
/// base64 content does not decode.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>> {
    let encoded = strip_data_url_prefix(payload).unwrap_or(payload);
    if encoded.is_empty() {
        return Err(GatewayError::InvalidImage("empty payload".to_string()));
    }
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| GatewayError::InvalidImage(e.to_string()))
}

/// Returns the base64 portion of an image data URL, or `None` when the
/// payload does not carry the `data:image/...;base64,` prefix.
fn strip_data_url_prefix(payload: &str) -> Option<&str> {
    let rest = payload.strip_prefix("data:image/")?;
    let (_, encoded) = rest.split_once(";base64,")?;
    Some(encoded)
}
