/**
 * Real-time Subscription Handler
 *
 * Server-Sent Events stream for the `/realtime` endpoint. Every event on the
 * broadcast channel is forwarded to the client, optionally narrowed by the
 * `types` query parameter.
 *
 * # Presence
 *
 * When the request carries a valid token the caller is marked online for the
 * lifetime of the stream. The [`PresenceGuard`] travels inside the stream
 * state, so the user goes offline as soon as the client disconnects and the
 * stream is dropped. Anonymous subscribers still receive events.
 *
 * # Connection Management
 *
 * - Connections are kept alive using the SSE keep-alive mechanism
 * - Lagged events are logged but don't cause connection drops
 */

use std::collections::HashMap;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream;
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tokio_stream::Stream;

use crate::backend::middleware::{ApiQuery, AuthUser};
use crate::backend::realtime::presence::PresenceGuard;
use crate::backend::server::state::AppState;
use crate::shared::{EventType, RealtimeEvent};

/// Parse `?types=a,b` into a filter; unknown names are ignored
///
/// Returns `None` (no filtering) when the parameter is absent or names no
/// known event type.
pub fn parse_type_filter(raw: Option<&str>) -> Option<Vec<EventType>> {
    let types: Vec<EventType> = raw?
        .split(',')
        .filter_map(|name| match name.parse::<EventType>() {
            Ok(event_type) => Some(event_type),
            Err(_) => {
                if !name.trim().is_empty() {
                    tracing::debug!("[Realtime] Ignoring unknown event type {:?}", name);
                }
                None
            }
        })
        .collect();
    (!types.is_empty()).then_some(types)
}

struct Subscription {
    rx: Receiver<RealtimeEvent>,
    filter: Option<Vec<EventType>>,
    _presence: Option<PresenceGuard>,
}

impl Subscription {
    fn accepts(&self, event_type: EventType) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|types| types.contains(&event_type))
    }
}

/// Handle real-time subscription (GET /realtime)
///
/// # Query Parameters
///
/// - `types` - Comma-separated list of event types, e.g.
///   `?types=entry-updated,user-status`. All types when omitted.
///
/// # Example Response
///
/// ```http
/// HTTP/1.1 200 OK
/// Content-Type: text/event-stream
///
/// event: entry-updated
/// data: {"eventType":"entry-updated","payload":{...},"timestamp":"..."}
/// ```
pub async fn handle_realtime_subscription(
    State(state): State<AppState>,
    auth: Option<AuthUser>,
    ApiQuery(query): ApiQuery<HashMap<String, String>>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let filter = parse_type_filter(query.get("types").map(String::as_str));
    match &filter {
        Some(types) => tracing::info!("[Realtime] Subscription filtered to {:?}", types),
        None => tracing::info!("[Realtime] Subscription to all event types"),
    }

    // Subscribe before announcing presence so the caller sees its own online event
    let rx = state.realtime_broadcast.subscribe();
    let presence = match auth {
        Some(user) => Some(PresenceGuard::register(state.presence.clone(), state.publisher(), user.id()).await),
        None => None,
    };

    let subscription = Subscription {
        rx,
        filter,
        _presence: presence,
    };

    let stream = stream::unfold(subscription, |mut sub| async move {
        loop {
            match sub.rx.recv().await {
                Ok(event) => {
                    if !sub.accepts(event.event_type) {
                        continue;
                    }
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };
                    let sse_event = Event::default().event(event.event_type.as_str()).data(data);
                    return Some((Ok(sse_event), sub));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Receiver lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
