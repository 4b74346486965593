//! Core domain models for the message board.

use serde::{Deserialize, Serialize};

use super::value_object::{
    ClockTime, MessageBody, MessageKind, ParticipantName, Recipient, Timestamp,
};

/// Status notice text appended when a participant joins the room
pub const JOINED_TEXT: &str = "entra na sala...";

/// Status notice text appended when a participant is evicted
pub const DEPARTED_TEXT: &str = "sai da sala...";

/// A participant currently present in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within the room
    pub name: ParticipantName,
    /// Instant of the last known activity (join or heartbeat)
    pub last_status: Timestamp,
}

impl Participant {
    /// Create a new participant, active as of `last_status`
    pub fn new(name: ParticipantName, last_status: Timestamp) -> Self {
        Self { name, last_status }
    }

    /// Whether this participant's last activity is at or beyond the
    /// staleness threshold
    pub fn is_stale(&self, now: Timestamp, threshold_ms: i64) -> bool {
        now.millis_since(self.last_status) >= threshold_ms
    }
}

/// An entry in the append-only message log.
///
/// `from` and `to` reference participants by name only; a message outlives
/// the participant that sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender name
    pub from: ParticipantName,
    /// Recipient: a participant or the broadcast audience
    pub to: Recipient,
    /// Message body
    pub text: MessageBody,
    /// Public, private, or system status
    pub kind: MessageKind,
    /// Clock time at creation, immutable
    pub time: ClockTime,
}

impl Message {
    /// Create a user-originated message
    pub fn user(
        from: ParticipantName,
        to: Recipient,
        text: MessageBody,
        kind: MessageKind,
        at: Timestamp,
    ) -> Self {
        Self {
            from,
            to,
            text,
            kind,
            time: ClockTime::from_timestamp(at),
        }
    }

    /// Create the system status notice for a join
    pub fn joined(name: &ParticipantName, at: Timestamp) -> Self {
        Self::status(name, JOINED_TEXT, at)
    }

    /// Create the system status notice for an eviction
    pub fn departed(name: &ParticipantName, at: Timestamp) -> Self {
        Self::status(name, DEPARTED_TEXT, at)
    }

    fn status(name: &ParticipantName, text: &str, at: Timestamp) -> Self {
        Self {
            from: name.clone(),
            to: Recipient::Everyone,
            text: MessageBody::system(text),
            kind: MessageKind::Status,
            time: ClockTime::from_timestamp(at),
        }
    }

    /// Visibility rule: public and status messages are visible to everyone;
    /// addressed messages only to their sender, their recipient, or (when
    /// addressed to the broadcast audience) to all viewers.
    pub fn visible_to(&self, viewer: &ParticipantName) -> bool {
        matches!(self.kind, MessageKind::Message | MessageKind::Status)
            || self.from == *viewer
            || match &self.to {
                Recipient::Everyone => true,
                Recipient::Direct(name) => name == viewer,
            }
    }
}

/// Compute the subsequence of `messages` visible to `viewer`, preserving
/// arrival order. With a `limit`, only the last `limit` visible entries are
/// kept (still in arrival order).
pub fn filter_visible(
    messages: Vec<Message>,
    viewer: &ParticipantName,
    limit: Option<usize>,
) -> Vec<Message> {
    let visible: Vec<Message> = messages
        .into_iter()
        .filter(|message| message.visible_to(viewer))
        .collect();
    match limit {
        Some(n) if n < visible.len() => visible[visible.len() - n..].to_vec(),
        _ => visible,
    }
}

/// Partition participants into `(active, stale)` against the staleness
/// threshold, preserving the snapshot's iteration order in both halves.
pub fn partition_stale(
    participants: Vec<Participant>,
    now: Timestamp,
    threshold_ms: i64,
) -> (Vec<Participant>, Vec<Participant>) {
    participants
        .into_iter()
        .partition(|participant| !participant.is_stale(now, threshold_ms))
}
