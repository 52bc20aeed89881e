/**
 * Get Current User Handler
 *
 * GET /api/auth/me returns the caller's profile, including the writing
 * streak. The password hash is never part of the response.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{ApiResponse, UserProfile};

pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> BackendResult<Json<ApiResponse<UserProfile>>> {
    let user = get_user_by_id(&state.db, auth.id())
        .await?
        .ok_or_else(|| BackendError::not_found("User not found!"))?;

    Ok(Json(ApiResponse::with_data("User fetched successfully!", user.profile())))
}
