use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MemberId;

/// Key of one entry in a notification region.
///
/// Composite of the originating member and a per-member monotonic
/// sequence number, so notifications from different members never collide
/// and notifications from one member stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationKey {
    /// Member that emitted the notification.
    pub member: MemberId,
    /// Monotonic sequence number within that member.
    pub sequence: u64,
}

impl NotificationKey {
    /// Create a key for the `sequence`-th notification of `member`.
    pub fn new(member: MemberId, sequence: u64) -> Self {
        Self { member, sequence }
    }
}

/// One management event record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Name of the management entity that emitted the event.
    pub source: String,
    /// Human-readable description of what happened.
    pub message: String,
    /// Event-specific payload.
    pub payload: Value,
    /// When the event was emitted, in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
}

impl Notification {
    /// Create a notification with an empty payload.
    pub fn new(source: impl Into<String>, message: impl Into<String>, timestamp_ms: u64) -> Self {
        Self {
            source: source.into(),
            message: message.into(),
            payload: Value::Null,
            timestamp_ms,
        }
    }

    /// Attach an event-specific payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }
}
