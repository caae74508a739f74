//! Error types for sei-proto.

use std::time::Duration;

use thiserror::Error;

/// Main error type for all codec and client operations.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Buffer ended early or its framing is malformed (truncated varint,
    /// bad tag, length running past the end, wire-type mismatch).
    #[error("Framing error: {0}")]
    Framing(String),

    /// A 64-bit value does not fit the safely representable integer range.
    #[error("value {value} exceeds safely representable integer range")]
    Range {
        /// The offending value, as text so both signed and unsigned fit.
        value: String,
    },

    /// A JSON value could not be coerced to the declared field type.
    #[error("Validation error on `{field}`: {reason}")]
    Validation {
        /// Field (or record) the value was read for.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// String field payload is not valid UTF-8.
    #[error("Invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// No codec registered for the given type URL.
    #[error("No codec registered for type URL: {0}")]
    UnknownType(String),

    /// `Any` payload does not hold the requested type.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// Type URL the caller asked for.
        expected: String,
        /// Type URL carried by the payload.
        actual: String,
    },

    /// JSON text parsing error at the boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The transport failed to deliver a request or response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport did not answer in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

impl CodecError {
    /// Buffer exhausted: `needed` more bytes were required, `remaining` were left.
    pub(crate) fn truncated(needed: usize, remaining: usize) -> Self {
        Self::Framing(format!(
            "buffer exhausted: needed {} bytes, {} remaining",
            needed, remaining
        ))
    }

    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised while reading malformed bytes.
    pub fn is_framing(&self) -> bool {
        matches!(self, Self::Framing(_))
    }

    /// True for 64-bit range violations.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// True for JSON coercion failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Result type alias using CodecError.
pub type Result<T> = std::result::Result<T, CodecError>;
