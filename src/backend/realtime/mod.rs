//! Real-time Update Module
//!
//! Fan-out of domain events to every connected client, plus a registry of
//! which users currently hold a live connection.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Publisher trait and broadcast channel
//! ├── presence.rs     - Online-user registry
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery
//!
//! Events go out over a `tokio::sync::broadcast` channel. Every subscriber
//! receives every event. A subscriber that falls more than the channel
//! capacity behind skips the missed events; there is no replay and no
//! acknowledgement.
//!
//! # Event Filtering
//!
//! Clients can filter events by type using the `types` query parameter:
//! - `?types=entry-updated,comment-added` - Entry edits and new comments
//! - `?types=user-status` - Presence changes only
//! - No parameter - Every event type

/// Publisher trait and broadcast channel
pub mod broadcast;

/// Online-user registry
pub mod presence;

/// Server-Sent Events subscription handler
pub mod subscription;

pub use broadcast::{broadcast_event, Publisher, RealtimeEventBroadcast};
pub use presence::{ConnectionId, PresenceGuard, PresenceRegistry};
pub use subscription::handle_realtime_subscription;
