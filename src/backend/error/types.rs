/**
 * Backend Error Types
 *
 * Every failure a request can end in. Services classify a request into one
 * of these before touching the store, so an error response always means
 * nothing was written.
 *
 * # Error Categories
 *
 * - Client errors: `Validation`, `BadRequest`, `Unauthorized`, `Forbidden`,
 *   `NotFound`, `Conflict`. Their message is returned verbatim.
 * - Server errors: `Database`, `Internal`. The caller only sees
 *   [`GENERIC_ERROR_MESSAGE`].
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Message returned for every 500 response
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong! Please try again later!";

/// Result alias used by services and handlers
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use daybook::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Entry not found!");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A field is missing, oversized or malformed
    #[error("{0}")]
    Validation(String),

    /// The request as a whole is malformed
    #[error("{0}")]
    BadRequest(String),

    /// No valid credentials were presented
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is known but lacks the required permission
    #[error("{0}")]
    Forbidden(String),

    /// The entity does not exist, or its existence is hidden from the caller
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated
    #[error("{0}")]
    Conflict(String),

    /// Store failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show the caller
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
