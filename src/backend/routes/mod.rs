//! Route Configuration Module
//!
//! ```text
//! routes/
//! ├── mod.rs                  - Module exports and documentation
//! ├── router.rs               - Main router creation
//! ├── auth_routes.rs          - Signup, login, logout, me
//! ├── entry_routes.rs         - Journal entry endpoints
//! └── collaboration_routes.rs - Sharing and comment endpoints
//! ```
//!
//! Each group builds its own sub-router and puts the authentication
//! middleware on it with `route_layer`, so a route that does not match never
//! triggers authentication.

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// Journal entry routes
pub mod entry_routes;

/// Sharing and comment routes
pub mod collaboration_routes;

pub use router::create_router;
