//! Shared Error Types
//!
//! Errors raised by the pure domain layer. They carry no HTTP knowledge; the
//! backend maps them onto status codes.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field violates a constraint
//! - `InvalidRequest` - The request is malformed as a whole
//! - `UnknownVariant` - A stored or submitted label does not name a known value
//! - `SerializationError` - JSON serialization/deserialization failures
//!
//! # Usage
//!
//! ```rust
//! use daybook::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title length should not be more than 20 characters!");
//! assert_eq!(error.to_string(), "Title length should not be more than 20 characters!");
//! ```
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// Data validation error
    ///
    /// Displays only the message so it can be returned to the caller verbatim.
    #[error("{message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Malformed request, such as a missing query parameter
    #[error("{message}")]
    InvalidRequest {
        /// Human-readable error message
        message: String,
    },

    /// A label that should map onto an enum did not
    #[error("unknown {kind}: {value}")]
    UnknownVariant {
        /// What was being parsed (e.g. "mood")
        kind: &'static str,
        /// The offending value
        value: String,
    },

    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid-request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a new unknown-variant error
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
