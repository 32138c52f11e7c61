//! Narrative event tracking.
//!
//! Each session owns a monotonic set of fired event types. Handling an event
//! records it and returns the canned sequence for its type; suppressing a
//! repeat is the caller's decision.

use std::collections::{HashMap, HashSet};

use tokio::sync::RwLock;
use tracing::info;

use va_core::{EventType, GameEvent, ResponseMessage, SessionId};

use crate::content;

/// Session-keyed sets of fired events.
#[derive(Debug, Default)]
pub struct EventTracker {
    sessions: RwLock<HashMap<SessionId, HashSet<EventType>>>,
}

impl EventTracker {
    /// Create a tracker with no sessions.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `event_type` has fired in `session`.
    pub async fn has_occurred(&self, session: SessionId, event_type: EventType) -> bool {
        self.sessions
            .read()
            .await
            .get(&session)
            .is_some_and(|set| set.contains(&event_type))
    }

    /// Add the event's type to the session's set. Idempotent.
    pub async fn record(&self, session: SessionId, event: &GameEvent) {
        let fresh = self
            .sessions
            .write()
            .await
            .entry(session)
            .or_default()
            .insert(event.kind);
        if fresh {
            info!(%session, event = ?event.kind, "narrative event fired");
        }
    }

    /// Record `event` and return its canned sequence.
    ///
    /// The sequence is returned on every call, including repeats.
    pub async fn handle(&self, session: SessionId, event: GameEvent) -> Vec<ResponseMessage> {
        self.record(session, &event).await;
        content::messages_for(event.kind)
    }

    /// Fire `event_type` only if it has not fired yet, returning its
    /// sequence, or an empty list for a repeat.
    pub async fn trigger_once(
        &self,
        session: SessionId,
        event_type: EventType,
    ) -> Vec<ResponseMessage> {
        if self.has_occurred(session, event_type).await {
            return Vec::new();
        }
        self.handle(session, GameEvent::new(event_type)).await
    }

    /// Every event fired in `session`, in declaration order.
    pub async fn occurred(&self, session: SessionId) -> Vec<EventType> {
        let sessions = self.sessions.read().await;
        let Some(set) = sessions.get(&session) else {
            return Vec::new();
        };
        EventType::ALL
            .into_iter()
            .filter(|e| set.contains(e))
            .collect()
    }

    /// Drop the session's event set. Returns true if it existed.
    pub async fn end_session(&self, session: SessionId) -> bool {
        self.sessions.write().await.remove(&session).is_some()
    }
}
