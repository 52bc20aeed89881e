//! Backend Error Module
//!
//! Errors raised by services and handlers, and their HTTP rendering.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Status Mapping
//!
//! | variant        | status |
//! |----------------|--------|
//! | `Validation`   | 422    |
//! | `BadRequest`   | 400    |
//! | `Unauthorized` | 401    |
//! | `Forbidden`    | 403    |
//! | `NotFound`     | 404    |
//! | `Conflict`     | 409    |
//! | `Database`     | 500    |
//! | `Internal`     | 500    |
//!
//! 500 responses never carry the underlying detail; it is logged instead.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, BackendResult, GENERIC_ERROR_MESSAGE};
