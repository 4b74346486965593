//! Domain layer error definitions.

use thiserror::Error;

/// Errors produced by the sanitizer/validator before any domain logic runs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or not a string
    #[error("invalid input type for '{0}'")]
    InvalidType(String),

    /// A required field sanitized down to the empty string
    #[error("'{0}' is not allowed to be empty")]
    EmptyValue(String),

    /// A value is outside its allowed set (client-supplied message type)
    #[error("'{0}' is not a valid message type")]
    InvalidEnum(String),
}

/// Errors surfaced by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Another active participant already holds this name
    #[error("name '{0}' is already in use")]
    NameTaken(String),

    /// No active participant with this name
    #[error("participant '{0}' not found")]
    ParticipantNotFound(String),

    /// The backing store could not be read or written
    #[error("backing store unavailable: {0}")]
    StorageUnavailable(String),
}
