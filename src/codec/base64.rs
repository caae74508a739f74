//! Bytes at the JSON boundary: standard base64 with padding.

use ::base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{CodecError, Result};

/// Render raw bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Parse base64 text read for `field`.
pub fn decode(field: &str, text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| CodecError::validation(field, format!("invalid base64: {}", e)))
}
