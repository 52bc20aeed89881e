/**
 * Real-time Event System
 *
 * Event types pushed to subscribers of the real-time channel. Every event is
 * sent to every subscriber; clients pick out what they care about by type.
 */
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::entry::Entry;
use crate::shared::error::SharedError;

/// Type of real-time event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    /// An entry was edited
    EntryUpdated,
    /// An entry was shared with another user
    EntryShared,
    /// A comment was posted on an entry
    CommentAdded,
    /// A user came online or went offline
    UserStatus,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::EntryUpdated,
        EventType::EntryShared,
        EventType::CommentAdded,
        EventType::UserStatus,
    ];

    /// Wire name, also used as the SSE event name
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::EntryUpdated => "entry-updated",
            EventType::EntryShared => "entry-shared",
            EventType::CommentAdded => "comment-added",
            EventType::UserStatus => "user-status",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| SharedError::unknown("event type", s))
    }
}

/// Presence transition carried by [`EventType::UserStatus`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    Offline,
}

/// Real-time event that can be broadcast to all subscribers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeEvent {
    /// Type of event
    pub event_type: EventType,
    /// Event payload (JSON-serializable data)
    pub payload: serde_json::Value,
    /// RFC 3339 time the event was created
    pub timestamp: String,
}

impl RealtimeEvent {
    /// Create a new real-time event
    pub fn new(event_type: EventType, payload: serde_json::Value) -> Self {
        Self {
            event_type,
            payload,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// `entry-updated {entryId, updatedBy, entry}`
    pub fn entry_updated(entry: &Entry, updated_by: Uuid) -> Result<Self, SharedError> {
        Ok(Self::new(
            EventType::EntryUpdated,
            serde_json::json!({
                "entryId": entry.id,
                "updatedBy": updated_by,
                "entry": serde_json::to_value(entry)?,
            }),
        ))
    }

    /// `entry-shared {entryId, sharedBy, sharedWith, canEdit}`
    pub fn entry_shared(entry_id: Uuid, shared_by: Uuid, shared_with: Uuid, can_edit: bool) -> Self {
        Self::new(
            EventType::EntryShared,
            serde_json::json!({
                "entryId": entry_id,
                "sharedBy": shared_by,
                "sharedWith": shared_with,
                "canEdit": can_edit,
            }),
        )
    }

    /// `comment-added {entryId, comment}`
    pub fn comment_added(entry_id: Uuid, comment: serde_json::Value) -> Self {
        Self::new(
            EventType::CommentAdded,
            serde_json::json!({
                "entryId": entry_id,
                "comment": comment,
            }),
        )
    }

    /// `user-status {userId, status}`
    pub fn user_status(user_id: Uuid, status: UserStatus) -> Self {
        Self::new(
            EventType::UserStatus,
            serde_json::json!({
                "userId": user_id,
                "status": status,
            }),
        )
    }
}
