//! HTTP API request and response DTOs.
//!
//! Field names follow the JSON shape clients of the room already speak
//! (`lastStatus`, `type`).

use serde::{Deserialize, Serialize};

use crate::domain::{
    Message, MessageKind, MessageText, Participant, ParticipantName, ValueObjectError,
};
use crate::usecase::SendMessageCommand;

/// Body of `POST /participants`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinRequestDto {
    pub name: String,
}

/// Participant entry of `GET /participants`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds) of the last heartbeat
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_status: participant.last_seen.value(),
        }
    }
}

/// Body of `POST /messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequestDto {
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl SendMessageRequestDto {
    /// Validate the body and build the command for `from`
    pub fn into_command(
        self,
        from: ParticipantName,
    ) -> Result<SendMessageCommand, ValueObjectError> {
        Ok(SendMessageCommand {
            from,
            to: ParticipantName::new(self.to)?,
            text: MessageText::new(self.text)?,
            kind: MessageKind::try_from(self.kind.as_str())?,
        })
    }
}

/// Body of `PUT /messages/{id}`; other fields are ignored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditMessageRequestDto {
    pub text: String,
}

/// Query of `GET /messages`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMessagesQuery {
    /// Kept as a string so that a malformed limit means "no limit" instead of a 400
    pub limit: Option<String>,
}

impl ListMessagesQuery {
    pub fn limit(&self) -> Option<usize> {
        self.limit.as_deref().and_then(|l| l.trim().parse().ok())
    }
}

/// Message entry of `GET /messages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// `HH:MM:SS`
    pub time: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.to_string(),
            from: message.from.into_string(),
            to: message.to.into_string(),
            text: message.text.into_string(),
            kind: message.kind,
            time: message.time,
        }
    }
}
