/**
 * Real-time Event Broadcasting
 *
 * Services never talk to the channel directly; they hold something that
 * implements [`Publisher`]. In the running server that is the
 * [`RealtimeEventBroadcast`] sender, in unit tests it can be a recorder.
 */

use crate::shared::RealtimeEvent;
use tokio::sync::broadcast;

/// Real-time update event broadcast
///
/// ```rust
/// use daybook::backend::realtime::RealtimeEventBroadcast;
/// use daybook::shared::RealtimeEvent;
/// use tokio::sync::broadcast;
///
/// let (tx, _) = broadcast::channel::<RealtimeEvent>(1000);
/// let _broadcast: RealtimeEventBroadcast = tx;
/// ```
pub type RealtimeEventBroadcast = broadcast::Sender<RealtimeEvent>;

/// Sink for real-time events
pub trait Publisher: Send + Sync {
    /// Deliver `event` to every current subscriber, returning how many there were
    fn publish(&self, event: RealtimeEvent) -> usize;
}

impl Publisher for RealtimeEventBroadcast {
    fn publish(&self, event: RealtimeEvent) -> usize {
        broadcast_event(self, event)
    }
}

/// Broadcast a real-time event to all subscribers
///
/// Returns the number of active subscribers that received the event (0 if
/// nobody is listening).
pub fn broadcast_event(broadcast_tx: &RealtimeEventBroadcast, event: RealtimeEvent) -> usize {
    let event_type = event.event_type;
    match broadcast_tx.send(event) {
        Ok(subscriber_count) => {
            tracing::info!("[Realtime] {} broadcast to {} subscribers", event_type, subscriber_count);
            subscriber_count
        }
        Err(_) => {
            tracing::debug!("[Realtime] No subscribers to receive {}", event_type);
            0
        }
    }
}
