//! Server Module
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState, database loading and FromRef implementations
//! └── init.rs         - Layers and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. [`ServerConfig::from_env`] reads the environment
//! 2. [`AppState::connect`] opens the SQLite pool and runs migrations
//! 3. [`create_app`] builds the router and wraps it in CORS and tracing layers
//!
//! # Example
//!
//! ```rust,no_run
//! use daybook::backend::server::{create_app, AppState, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::connect(ServerConfig::from_env()?).await?;
//! let app = create_app(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::{AppState, StartupError};
