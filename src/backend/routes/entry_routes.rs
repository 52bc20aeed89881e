/**
 * Journal Entry Routes
 *
 * - `POST /api/entries` - Create an entry
 * - `GET /api/entries` - List own entries
 * - `GET /api/entries/search?text=` - Search own entries
 * - `GET /api/entries/analytics` - Mood analytics
 * - `GET /api/entries/export?format=` - Download own entries
 * - `GET|PUT|DELETE /api/entries/{id}` - Read, update, delete
 * - `PATCH|POST /api/entries/{id}/favorite` - Toggle favorite
 *
 * Every route requires authentication.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch},
    Router,
};

use crate::backend::entries::handlers::{
    create_entry, delete_entry, entry_analytics, export_entries, get_entry, list_entries, search_entries,
    toggle_favorite, update_entry,
};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure entry routes
///
/// Static segments (`search`, `analytics`, `export`) take precedence over
/// `{id}` in axum's matcher.
pub fn configure_entry_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let entries = Router::new()
        .route("/api/entries", get(list_entries).post(create_entry))
        .route("/api/entries/search", get(search_entries))
        .route("/api/entries/analytics", get(entry_analytics))
        .route("/api/entries/export", get(export_entries))
        .route(
            "/api/entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route(
            "/api/entries/{id}/favorite",
            patch(toggle_favorite).post(toggle_favorite),
        )
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router.merge(entries)
}
