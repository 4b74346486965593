//! Domain layer for the message board.
//!
//! This module contains the presence and visibility rules that are
//! independent of HTTP and storage concerns, plus the repository trait
//! the infrastructure layer implements (dependency inversion).

pub mod entity;
pub mod error;
pub mod repository;
pub mod validate;
pub mod value_object;

pub use entity::{
    DEPARTED_TEXT, JOINED_TEXT, Message, Participant, filter_visible, partition_stale,
};
pub use error::{RepositoryError, ValidationError};
pub use repository::BoardRepository;
pub use value_object::{
    BROADCAST_RECIPIENT, ClockTime, MessageBody, MessageKind, ParticipantName, Recipient, Timestamp,
};

#[cfg(test)]
pub use repository::MockBoardRepository;
