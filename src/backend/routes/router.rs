/**
 * Router Configuration
 *
 * Combines all route groups into a single Axum router. Cross-cutting layers
 * (CORS, tracing) are added by [`crate::backend::server::init::create_app`].
 */

use axum::{response::Json, routing::get, Router};

use crate::backend::error::BackendError;
use crate::backend::realtime::handle_realtime_subscription;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::routes::collaboration_routes::configure_collaboration_routes;
use crate::backend::routes::entry_routes::configure_entry_routes;
use crate::backend::server::state::AppState;
use crate::shared::ApiResponse;

/// GET /health
async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("OK"))
}

async fn not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

/// Create the Axum router with all routes configured
///
/// - `GET /health` - Liveness probe
/// - `GET /realtime` - Server-Sent Events stream, open to anonymous clients
/// - `/api/auth/*` - Authentication
/// - `/api/entries/*` - Journal entries
/// - `/api/collaboration/*` - Sharing and comments
///
/// Unknown routes answer 404 in the usual `{message}` shape.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/health", get(health))
        .route("/realtime", get(handle_realtime_subscription));

    let router = configure_auth_routes(router, &app_state);
    let router = configure_entry_routes(router, &app_state);
    let router = configure_collaboration_routes(router, &app_state);

    router.fallback(not_found).with_state(app_state)
}
