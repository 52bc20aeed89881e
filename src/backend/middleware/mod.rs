//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Session token verification for protected routes
//! - **`extract`** - Body, path and query extractors that reject with `BackendError`

pub mod auth;
pub mod extract;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
pub use extract::{ApiJson, ApiPath, ApiQuery};
