//! POST /api/auth/logout
//!
//! Tokens are stateless, so logging out only clears the cookie.

use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::sessions::cleared_cookie;
use crate::shared::ApiResponse;

pub async fn logout() -> impl IntoResponse {
    (
        [(SET_COOKIE, cleared_cookie())],
        Json(ApiResponse::message("Logged out successfully!")),
    )
}
