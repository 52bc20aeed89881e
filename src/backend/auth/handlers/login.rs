/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * An unknown email and a wrong password produce the same 401 so the
 * response does not reveal which accounts exist.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::{create_token, session_cookie};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

const INVALID_CREDENTIALS: &str = "Invalid email or password!";

pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> BackendResult<impl IntoResponse> {
    let (Some(email), Some(password)) = (
        request.email.as_deref().map(str::trim).filter(|e| !e.is_empty()),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return Err(BackendError::validation("Please submit with required fields!"));
    };

    tracing::info!("Login request for: {}", email);

    let user = get_user_by_email(&state.db, email).await?.ok_or_else(|| {
        tracing::warn!("User not found: {}", email);
        BackendError::unauthorized(INVALID_CREDENTIALS)
    })?;

    if !verify(password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(user.id, &user.email, &state.config.jwt_secret, state.config.token_ttl_days)?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok((
        [(SET_COOKIE, session_cookie(&token, state.config.token_ttl_days))],
        Json(ApiResponse::with_data(
            "Logged in successfully!",
            AuthResponse {
                token,
                user: user.profile(),
            },
        )),
    ))
}
