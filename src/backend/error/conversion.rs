/**
 * Error Conversion
 *
 * Turns backend errors into HTTP responses and lifts lower-level errors into
 * [`BackendError`].
 *
 * # Response Format
 *
 * ```json
 * { "message": "Entry not found!" }
 * ```
 */

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;
use crate::shared::{ApiResponse, SharedError};

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            BackendError::Database(err) => tracing::error!("Database error: {:?}", err),
            BackendError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            other => tracing::debug!("Request rejected with {}: {}", status, other),
        }

        (status, Json(ApiResponse::message(self.message()))).into_response()
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => BackendError::Validation(message),
            SharedError::InvalidRequest { message } => BackendError::BadRequest(message),
            unknown @ SharedError::UnknownVariant { .. } => BackendError::Validation(unknown.to_string()),
            SharedError::SerializationError { message } => BackendError::Internal(message),
        }
    }
}

const INVALID_BODY_MESSAGE: &str = "Please provide a valid request body!";
const INVALID_PATH_MESSAGE: &str = "Please provide a valid id!";
const INVALID_QUERY_MESSAGE: &str = "Please provide valid query parameters!";

/// Well-formed JSON of the wrong shape is a 422, anything else a 400
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        match rejection {
            JsonRejection::JsonDataError(_) => BackendError::validation(INVALID_BODY_MESSAGE),
            _ => BackendError::bad_request(INVALID_BODY_MESSAGE),
        }
    }
}

impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path parameters: {}", rejection.body_text());
        BackendError::bad_request(INVALID_PATH_MESSAGE)
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!("Rejected query string: {}", rejection.body_text());
        BackendError::bad_request(INVALID_QUERY_MESSAGE)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Internal(format!("JSON error: {}", err))
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        BackendError::Internal(format!("Password hashing error: {}", err))
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        BackendError::Internal(format!("Token error: {}", err))
    }
}
