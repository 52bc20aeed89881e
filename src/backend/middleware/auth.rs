/**
 * Authentication Middleware
 *
 * Protected routes run behind [`auth_middleware`], which verifies the
 * session token and stores an [`AuthenticatedUser`] in the request
 * extensions. Handlers receive it through the [`AuthUser`] extractor.
 *
 * A token is only accepted if its user still exists.
 */

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::{token_from_headers, verify_token};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;

const UNAUTHORIZED_MESSAGE: &str = "Unauthorized! Please login to continue.";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Resolve the caller from request headers
pub async fn authenticate(headers: &HeaderMap, state: &AppState) -> BackendResult<AuthenticatedUser> {
    let token = token_from_headers(headers).ok_or_else(|| {
        tracing::warn!("Missing session token");
        BackendError::unauthorized(UNAUTHORIZED_MESSAGE)
    })?;

    let claims = verify_token(&token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized(UNAUTHORIZED_MESSAGE)
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        BackendError::unauthorized(UNAUTHORIZED_MESSAGE)
    })?;

    if get_user_by_id(&state.db, user_id).await?.is_none() {
        tracing::warn!("Token for unknown user {}", user_id);
        return Err(BackendError::unauthorized(UNAUTHORIZED_MESSAGE));
    }

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// Authentication middleware
///
/// Rejects the request with 401 if no valid token is presented.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(request.headers(), &app_state).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Uses the user stored by [`auth_middleware`] when present and
/// authenticates the request itself otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl AuthUser {
    pub fn id(&self) -> Uuid {
        self.0.user_id
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(user.clone()));
        }
        authenticate(&parts.headers, state).await.map(AuthUser)
    }
}

/// `Option<AuthUser>` resolves to `None` for anonymous or invalid sessions
impl OptionalFromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(Some(AuthUser(user.clone())));
        }
        match authenticate(&parts.headers, state).await {
            Ok(user) => Ok(Some(AuthUser(user))),
            Err(BackendError::Unauthorized(_)) => Ok(None),
            Err(other) => Err(other),
        }
    }
}
