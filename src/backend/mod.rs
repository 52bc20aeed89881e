//! Backend Module
//!
//! Server-side code for DayBook: an Axum HTTP API over SQLite with a
//! Server-Sent Events channel for real-time updates. Only compiled with the
//! `ssr` feature.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT sessions
//! - **`middleware`** - Session verification for protected routes
//! - **`entries`** - Entry lifecycle: CRUD, favorites, search, analytics, export
//! - **`collaboration`** - Sharing and comments
//! - **`realtime`** - Event broadcasting and presence
//! - **`error`** - Backend error type and HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── entries/        - Journal entries
//! ├── collaboration/  - Sharing and comments
//! ├── realtime/       - Event broadcasting
//! └── error/          - Error types
//! ```
//!
//! # Layering
//!
//! Handlers stay thin and call a service (`EntryService`,
//! `CollaborationService`). Services apply validation and permission rules
//! from [`crate::shared`] and call the `db` functions of their module. Every
//! request is classified (validation, existence, permission) before anything
//! is written.
//!
//! # Error Handling
//!
//! Handlers return [`BackendResult`](error::BackendResult). `BackendError`
//! renders as `{message}` with the matching status code; database and
//! internal failures are logged and answered with a generic message.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time update system
pub mod realtime;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Journal entries
pub mod entries;

/// Sharing and comments
pub mod collaboration;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::{broadcast_event, handle_realtime_subscription, RealtimeEventBroadcast};
pub use server::{create_app, AppState};
