//! DayBook - Main Library
//!
//! DayBook is a personal journaling service. Users write dated entries, every
//! entry is tagged with a mood derived from lexicon-based sentiment analysis,
//! a daily writing streak is tracked per user, and entries can be shared
//! read-only or with edit rights and discussed in comments.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types and pure logic, always compiled
//!   - Entry, comment and user types
//!   - Sentiment classifier and built-in lexicon
//!   - Streak tracker and permission predicates
//!   - Field validation, analytics and export rendering
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Entry lifecycle and collaboration services over SQLite (sqlx)
//!   - Authentication (bcrypt + JWT)
//!   - Real-time event broadcasting over Server-Sent Events
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use daybook::backend::server::{config::ServerConfig, init::create_app, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = AppState::connect(config).await?;
//! let app = create_app(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - Shared state is `Arc`-wrapped and cloned into every handler
//! - Real-time events use `tokio::sync::broadcast`
//! - The presence registry sits behind a `tokio::sync::RwLock`

/// Domain types and pure journaling logic
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
