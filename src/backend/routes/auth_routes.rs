/**
 * Authentication Routes
 *
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 * - `GET /api/auth/me` - Current user's profile (requires authentication)
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

pub fn configure_auth_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(get_me))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    router
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .merge(protected)
}
