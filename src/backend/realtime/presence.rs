//! Online-user registry
//!
//! Maps each connected user to the id of their most recent real-time
//! connection. A user reconnecting replaces the old handle. When a
//! connection ends it only removes the entry if the entry still points at
//! that connection, so a stale disconnect cannot mark a reconnected user
//! offline.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::realtime::broadcast::Publisher;
use crate::shared::{RealtimeEvent, UserStatus};

/// Identifies one SSE connection
pub type ConnectionId = Uuid;

#[derive(Debug, Clone, Default)]
pub struct PresenceRegistry {
    connections: Arc<RwLock<HashMap<Uuid, ConnectionId>>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new connection for `user_id` and return its handle
    pub async fn connect(&self, user_id: Uuid) -> ConnectionId {
        let connection = Uuid::new_v4();
        self.connections.write().await.insert(user_id, connection);
        tracing::debug!("[Presence] {} connected as {}", user_id, connection);
        connection
    }

    /// Remove `user_id` if `connection` is still their current handle
    ///
    /// Returns whether the user went offline.
    pub async fn disconnect(&self, user_id: Uuid, connection: ConnectionId) -> bool {
        let mut connections = self.connections.write().await;
        if connections.get(&user_id) == Some(&connection) {
            connections.remove(&user_id);
            tracing::debug!("[Presence] {} disconnected", user_id);
            true
        } else {
            false
        }
    }

    pub async fn is_online(&self, user_id: Uuid) -> bool {
        self.connections.read().await.contains_key(&user_id)
    }

    pub async fn online_users(&self) -> Vec<Uuid> {
        self.connections.read().await.keys().copied().collect()
    }
}

/// Keeps a user online for as long as it is alive
///
/// Dropping the guard removes the registry entry and publishes
/// `user-status offline`. The cleanup runs on the current Tokio runtime; a
/// guard dropped outside a runtime leaves the entry in place.
pub struct PresenceGuard {
    registry: PresenceRegistry,
    publisher: Arc<dyn Publisher>,
    user_id: Uuid,
    connection: ConnectionId,
}

impl PresenceGuard {
    /// Register `user_id` and publish `user-status online`
    pub async fn register(
        registry: PresenceRegistry,
        publisher: Arc<dyn Publisher>,
        user_id: Uuid,
    ) -> Self {
        let connection = registry.connect(user_id).await;
        publisher.publish(RealtimeEvent::user_status(user_id, UserStatus::Online));
        Self {
            registry,
            publisher,
            user_id,
            connection,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn connection(&self) -> ConnectionId {
        self.connection
    }
}

impl Drop for PresenceGuard {
    fn drop(&mut self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("[Presence] No runtime to release {}", self.user_id);
            return;
        };
        let registry = self.registry.clone();
        let publisher = Arc::clone(&self.publisher);
        let user_id = self.user_id;
        let connection = self.connection;
        handle.spawn(async move {
            if registry.disconnect(user_id, connection).await {
                publisher.publish(RealtimeEvent::user_status(user_id, UserStatus::Offline));
            }
        });
    }
}
