//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// ParticipantName validation error
    #[error("ParticipantName cannot be empty")]
    ParticipantNameEmpty,

    /// ParticipantName too long error
    #[error("ParticipantName cannot exceed {max} characters (got {actual})")]
    ParticipantNameTooLong { max: usize, actual: usize },

    /// MessageText validation error
    #[error("MessageText cannot be empty")]
    MessageTextEmpty,

    /// MessageText too long error
    #[error("MessageText cannot exceed {max} characters (got {actual})")]
    MessageTextTooLong { max: usize, actual: usize },

    /// MessageId invalid format error (not a valid UUID format)
    #[error("MessageId must be a valid UUID format (got: {0})")]
    MessageIdInvalidFormat(String),

    /// Unknown message type on the wire
    #[error("Unknown message type: {0}")]
    MessageKindUnknown(String),
}

/// Errors raised by Store implementations.
///
/// "Not found" is never an error at this level; lookups return `Option`
/// and deletes return `bool`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The underlying store could not complete the operation
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
