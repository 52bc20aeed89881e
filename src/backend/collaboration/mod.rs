//! Sharing and Comments
//!
//! ```text
//! collaboration/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Grant tables and comment storage
//! ├── service.rs   - Share, unshare and comment rules
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;

pub mod service;

pub mod handlers;

pub use service::CollaborationService;
