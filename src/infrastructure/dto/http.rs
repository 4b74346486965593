//! HTTP API response DTOs for the message board.

use serde::{Deserialize, Serialize};

use crate::domain::{Message, Participant};

/// Participant entry for the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub name: String,
    /// Unix timestamp (milliseconds) of the last join or heartbeat
    pub last_status: i64,
}

impl From<Participant> for ParticipantDto {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name.into_string(),
            last_status: participant.last_status.value(),
        }
    }
}

/// Message entry for the messages endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub from: String,
    pub to: String,
    pub text: String,
    pub r#type: String,
    /// Clock time `HH-mm-ss`
    pub time: String,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        Self {
            from: message.from.into_string(),
            to: message.to.as_str().to_string(),
            text: message.text.as_str().to_string(),
            r#type: message.kind.as_str().to_string(),
            time: message.time.as_str().to_string(),
        }
    }
}
