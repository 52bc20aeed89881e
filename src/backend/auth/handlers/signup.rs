/**
 * Signup Handler
 *
 * POST /api/auth/signup
 *
 * # Validation
 *
 * - First name, last name, email and password are required
 * - Email must contain '@'
 * - Password must be at least 8 characters long
 * - Email must not be registered yet, ignoring case (409)
 */

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json},
};
use bcrypt::hash;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::{create_token, session_cookie};
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::ApiJson;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

pub const MIN_PASSWORD_CHARS: usize = 8;

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub async fn signup(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> BackendResult<impl IntoResponse> {
    let (Some(first_name), Some(last_name), Some(email), Some(password)) = (
        required(&request.first_name),
        required(&request.last_name),
        required(&request.email),
        request.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        tracing::warn!("Signup with missing fields");
        return Err(BackendError::validation("Please submit with required fields!"));
    };

    if !email.contains('@') {
        tracing::warn!("Invalid email format: {}", email);
        return Err(BackendError::validation("Please provide a valid email!"));
    }

    if password.chars().count() < MIN_PASSWORD_CHARS {
        tracing::warn!("Password too short");
        return Err(BackendError::validation("Password must be at least 8 characters!"));
    }

    if get_user_by_email(&state.db, email).await?.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict("User with this email already exists!"));
    }

    let password_hash = hash(password, state.config.bcrypt_cost)?;

    let user = create_user(
        &state.db,
        NewUser {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await?;

    let token = create_token(user.id, &user.email, &state.config.jwt_secret, state.config.token_ttl_days)?;

    tracing::info!("User created successfully: {}", user.email);

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, session_cookie(&token, state.config.token_ttl_days))],
        Json(ApiResponse::with_data(
            "User registered successfully!",
            AuthResponse {
                token,
                user: user.profile(),
            },
        )),
    ))
}
