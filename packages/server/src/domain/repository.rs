//! Repository traits (the store seam).
//!
//! The use case layer depends on these traits; implementations live in the
//! infrastructure layer.

use async_trait::async_trait;

use super::{
    entity::{Message, NewMessage, Participant},
    error::RepositoryError,
    value_object::{MessageId, MessageText, ParticipantName, Timestamp},
};

/// Store for participant records, keyed by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    async fn find_by_name(
        &self,
        name: &ParticipantName,
    ) -> Result<Option<Participant>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Participant>, RepositoryError>;

    async fn insert(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Returns `false` when no participant has that name.
    async fn update_last_seen(
        &self,
        name: &ParticipantName,
        last_seen: Timestamp,
    ) -> Result<bool, RepositoryError>;

    /// Returns `false` when no participant has that name.
    async fn delete_by_name(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;
}

/// Append-ordered store for messages.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn find_by_id(&self, id: &MessageId) -> Result<Option<Message>, RepositoryError>;

    /// All messages in insertion order.
    async fn find_all(&self) -> Result<Vec<Message>, RepositoryError>;

    /// Assigns a fresh id and appends.
    async fn insert(&self, message: NewMessage) -> Result<Message, RepositoryError>;

    /// Returns `false` when no message has that id.
    async fn update_text(
        &self,
        id: &MessageId,
        text: MessageText,
    ) -> Result<bool, RepositoryError>;

    /// Returns `false` when no message has that id.
    async fn delete_by_id(&self, id: &MessageId) -> Result<bool, RepositoryError>;
}
