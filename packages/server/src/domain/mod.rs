//! Domain layer for the chat room.
//!
//! This module contains business rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod clock;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entity::{Message, NewMessage, Participant};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::MessageIdFactory;
pub use repository::{MessageRepository, ParticipantRepository};
pub use value_object::{MessageId, MessageKind, MessageText, ParticipantName, Timestamp};

#[cfg(test)]
pub use repository::{MockMessageRepository, MockParticipantRepository};
