/**
 * Server Initialization
 *
 * Wraps the router in the layers every request passes through:
 * 1. HTTP tracing (`tower-http` `TraceLayer`)
 * 2. CORS, restricted to `FRONTEND_URL` with credentials when configured
 */

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let Some(origin) = config.frontend_url.as_deref() else {
        return CorsLayer::permissive();
    };

    match origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_credentials(true)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        Err(e) => {
            tracing::warn!("Ignoring invalid FRONTEND_URL {:?}: {}", origin, e);
            CorsLayer::permissive()
        }
    }
}

/// Create and configure the Axum application
pub fn create_app(state: AppState) -> Router<()> {
    tracing::info!("Initializing DayBook backend server");
    let cors = cors_layer(&state.config);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
