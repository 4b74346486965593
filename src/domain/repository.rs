//! Repository trait owned by the domain layer.
//!
//! The registry of participants and the message log are the only shared
//! mutable stores. Every method is one logical critical section: an
//! implementation must serialize the full read-modify-write cycle on a
//! store so concurrent mutations never lose an update. Cross-store
//! atomicity is not required.

use async_trait::async_trait;

use super::{
    entity::{Message, Participant},
    error::RepositoryError,
    value_object::{ParticipantName, Timestamp},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Snapshot of the current participants, in insertion order.
    async fn participants(&self) -> Result<Vec<Participant>, RepositoryError>;

    /// Insert a participant.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NameTaken`] when an active participant
    /// with the same name exists. The uniqueness check and the insert happen
    /// in the same critical section.
    async fn add_participant(&self, participant: Participant) -> Result<(), RepositoryError>;

    /// Refresh a participant's `last_status`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ParticipantNotFound`] when no active
    /// participant matches.
    async fn refresh_participant(
        &self,
        name: &ParticipantName,
        at: Timestamp,
    ) -> Result<(), RepositoryError>;

    /// Whether an active participant with this name exists.
    async fn is_present(&self, name: &ParticipantName) -> Result<bool, RepositoryError>;

    /// Snapshot of the message log, in arrival order.
    async fn messages(&self) -> Result<Vec<Message>, RepositoryError>;

    /// Append a message to the log.
    async fn append_message(&self, message: Message) -> Result<(), RepositoryError>;

    /// Remove and return every participant whose last activity is at or
    /// beyond the staleness threshold, in snapshot order. Partitioning and
    /// the registry rewrite happen in the same critical section; on a read
    /// failure the registry is left untouched.
    async fn evict_stale(
        &self,
        now: Timestamp,
        threshold_ms: i64,
    ) -> Result<Vec<Participant>, RepositoryError>;
}
