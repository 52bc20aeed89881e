//! Journal Entries Module
//!
//! # Module Structure
//!
//! ```text
//! entries/
//! ├── mod.rs       - Module exports
//! ├── db.rs        - Entry persistence and grant loading
//! ├── service.rs   - Entry lifecycle rules
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod db;

pub mod service;

pub mod handlers;

pub use service::EntryService;
