//! Domain factories for creating domain entities and value objects.

use super::MessageId;

/// Factory for generating MessageId instances.
///
/// Separates id generation from the parsing rules in MessageId.
pub struct MessageIdFactory;

impl MessageIdFactory {
    /// Generate a new MessageId with a random UUID v4.
    pub fn generate() -> MessageId {
        MessageId::from_uuid(uuid::Uuid::new_v4())
    }
}
