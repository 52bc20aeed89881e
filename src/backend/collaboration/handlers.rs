/**
 * Sharing and Comment HTTP Handlers
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::collaboration::service::CollaborationService;
use crate::backend::error::BackendResult;
use crate::backend::middleware::{ApiJson, ApiPath, AuthUser};
use crate::backend::server::state::AppState;
use crate::shared::{AddCommentRequest, ApiResponse, CommentView, Entry, SharedEntry};

/// Body of `POST /api/collaboration/share`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub entry_id: Uuid,
    pub email: String,
    #[serde(default)]
    pub can_edit: bool,
}

/// Body of `POST /api/collaboration/unshare`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnshareRequest {
    pub entry_id: Uuid,
    pub user_id: Uuid,
}

/// POST /api/collaboration/share
pub async fn share_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<ShareRequest>,
) -> BackendResult<Json<ApiResponse<Entry>>> {
    let entry = CollaborationService::from_state(&state)
        .share(auth.id(), request.entry_id, &request.email, request.can_edit)
        .await?;
    Ok(Json(ApiResponse::with_data("Entry shared successfully", entry)))
}

/// POST /api/collaboration/unshare
pub async fn unshare_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<UnshareRequest>,
) -> BackendResult<Json<ApiResponse<Entry>>> {
    let entry = CollaborationService::from_state(&state)
        .unshare(auth.id(), request.entry_id, request.user_id)
        .await?;
    Ok(Json(ApiResponse::with_data("Entry unshared successfully", entry)))
}

/// GET /api/collaboration/shared-with-me
pub async fn shared_with_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> BackendResult<Json<ApiResponse<Vec<SharedEntry>>>> {
    let entries = CollaborationService::from_state(&state)
        .shared_with_me(auth.id())
        .await?;
    Ok(Json(ApiResponse::with_data("Shared entries fetched successfully", entries)))
}

/// POST /api/collaboration/comment
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(request): ApiJson<AddCommentRequest>,
) -> BackendResult<(StatusCode, Json<ApiResponse<CommentView>>)> {
    let comment = CollaborationService::from_state(&state)
        .add_comment(auth.id(), request.entry_id, request.content.as_deref())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Comment added successfully", comment)),
    ))
}

/// GET /api/collaboration/comments/{entry_id}
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(entry_id): ApiPath<Uuid>,
) -> BackendResult<Json<ApiResponse<Vec<CommentView>>>> {
    let comments = CollaborationService::from_state(&state)
        .list_comments(auth.id(), entry_id)
        .await?;
    Ok(Json(ApiResponse::with_data("Comments fetched successfully", comments)))
}

/// DELETE /api/collaboration/comment/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(comment_id): ApiPath<Uuid>,
) -> BackendResult<Json<ApiResponse<()>>> {
    CollaborationService::from_state(&state)
        .delete_comment(auth.id(), comment_id)
        .await?;
    Ok(Json(ApiResponse::message("Comment deleted successfully")))
}
