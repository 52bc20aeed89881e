/**
 * Sharing and Comment Routes
 *
 * - `POST /api/collaboration/share` - Share an entry by email
 * - `POST /api/collaboration/unshare` - Revoke read access
 * - `GET /api/collaboration/shared-with-me` - Entries others shared with me
 * - `POST /api/collaboration/comment` - Comment on an entry
 * - `GET /api/collaboration/comments/{entry_id}` - Comments on an entry
 * - `DELETE /api/collaboration/comment/{comment_id}` - Delete own comment
 *
 * Every route requires authentication.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

use crate::backend::collaboration::handlers::{
    add_comment, delete_comment, list_comments, share_entry, shared_with_me, unshare_entry,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

pub fn configure_collaboration_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let collaboration = Router::new()
        .route("/api/collaboration/share", post(share_entry))
        .route("/api/collaboration/unshare", post(unshare_entry))
        .route("/api/collaboration/shared-with-me", get(shared_with_me))
        .route("/api/collaboration/comment", post(add_comment))
        .route("/api/collaboration/comments/{entry_id}", get(list_comments))
        .route("/api/collaboration/comment/{comment_id}", delete(delete_comment))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.merge(collaboration)
}
