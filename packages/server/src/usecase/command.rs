//! Typed commands built once at the transport boundary.
//!
//! Every field is already a validated value object, so the use case layer
//! only enforces identity, ownership and type rules.

use crate::domain::{MessageId, MessageKind, MessageText, ParticipantName};

/// Send a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub text: MessageText,
    pub kind: MessageKind,
}

/// Replace the text of an existing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMessageCommand {
    pub id: MessageId,
    pub requestor: ParticipantName,
    pub text: MessageText,
}
