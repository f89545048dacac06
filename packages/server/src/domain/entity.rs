//! Core domain models for the chat room.

use serde::{Deserialize, Serialize};

use super::value_object::{MessageId, MessageKind, MessageText, ParticipantName, Timestamp};

/// Represents a participant registered in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name, unique within the room
    pub name: ParticipantName,
    /// Timestamp of the last heartbeat (joining counts as one)
    pub last_seen: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: ParticipantName, last_seen: Timestamp) -> Self {
        Self { name, last_seen }
    }

    /// Whether the last heartbeat is at least `ttl_millis` old at `now`
    pub fn is_expired(&self, now: Timestamp, ttl_millis: u64) -> bool {
        now.millis_since(self.last_seen) >= ttl_millis
    }
}

/// A message that has not been stored yet.
///
/// The store turns it into a [`Message`] by assigning an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub text: MessageText,
    pub kind: MessageKind,
    /// Display time, `HH:MM:SS`
    pub time: String,
}

impl NewMessage {
    /// Attach a store-assigned id
    pub fn with_id(self, id: MessageId) -> Message {
        Message {
            id,
            from: self.from,
            to: self.to,
            text: self.text,
            kind: self.kind,
            time: self.time,
        }
    }
}

/// Represents a chat message in the room log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    /// Sender's name
    pub from: ParticipantName,
    /// Recipient name, or the room's broadcast target
    pub to: ParticipantName,
    pub text: MessageText,
    pub kind: MessageKind,
    /// Display time (`HH:MM:SS`) fixed at insertion
    pub time: String,
}

impl Message {
    /// Whether `viewer` may see this message.
    ///
    /// Anything that is not private is public. Private messages addressed to
    /// the broadcast target are public too; otherwise only the sender and the
    /// recipient see them.
    pub fn is_visible_to(
        &self,
        viewer: Option<&ParticipantName>,
        broadcast_target: &ParticipantName,
    ) -> bool {
        if self.kind != MessageKind::Private || &self.to == broadcast_target {
            return true;
        }
        viewer.is_some_and(|v| v == &self.from || v == &self.to)
    }

    /// Whether `requestor` may edit or delete this message
    pub fn is_owned_by(&self, requestor: &ParticipantName) -> bool {
        self.kind != MessageKind::System && &self.from == requestor
    }
}
