//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity. Constructors taking
//! raw input run it through the sanitizer first, so a value object can only
//! hold cleaned data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{error::ValidationError, validate};

/// Reserved recipient value meaning "all current participants".
pub const BROADCAST_RECIPIENT: &str = "Todos";

/// Display name of a participant.
///
/// Sanitized (markup-stripped, trimmed), non-empty, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Sanitize raw input into a participant name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValue`] when the input sanitizes to
    /// the empty string.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let name = validate::sanitize(raw);
        if name.is_empty() {
            return Err(ValidationError::EmptyValue("name".to_string()));
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of a message.
///
/// Sanitized and non-empty for user-submitted messages. System status
/// notices bypass sanitization via [`MessageBody::system`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody(String);

impl MessageBody {
    /// Sanitize raw input into a message body.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValue`] when the input sanitizes to
    /// the empty string.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let text = validate::sanitize(raw);
        if text.is_empty() {
            return Err(ValidationError::EmptyValue("text".to_string()));
        }
        Ok(Self(text))
    }

    /// Build a body from trusted, system-generated text (status notices).
    pub fn system(text: &str) -> Self {
        Self(text.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recipient of a message: a specific participant or the whole room.
///
/// Serialized as a plain string; [`BROADCAST_RECIPIENT`] is the wire form
/// of [`Recipient::Everyone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// The broadcast audience ("Todos")
    Everyone,
    /// A single addressed participant
    Direct(ParticipantName),
}

impl Recipient {
    /// Sanitize raw input into a recipient.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValue`] when the input sanitizes to
    /// the empty string.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let to = validate::sanitize(raw);
        if to.is_empty() {
            return Err(ValidationError::EmptyValue("to".to_string()));
        }
        if to == BROADCAST_RECIPIENT {
            return Ok(Self::Everyone);
        }
        Ok(Self::Direct(ParticipantName(to)))
    }

    /// Get the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Everyone => BROADCAST_RECIPIENT,
            Self::Direct(name) => name.as_str(),
        }
    }

    /// Whether this recipient is the broadcast audience.
    pub fn is_everyone(&self) -> bool {
        matches!(self, Self::Everyone)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Recipient {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Recipient {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Persisted data is already sanitized; only the broadcast marker
        // needs to be recognized here.
        let raw = String::deserialize(deserializer)?;
        if raw == BROADCAST_RECIPIENT {
            Ok(Self::Everyone)
        } else {
            Ok(Self::Direct(ParticipantName(raw)))
        }
    }
}

/// Kind of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message, visible to every viewer
    Message,
    /// Addressed message, visible to sender and recipient only
    PrivateMessage,
    /// System-generated join/leave notice
    Status,
}

impl MessageKind {
    /// Parse a client-supplied message type.
    ///
    /// Only `message` and `private_message` are accepted; `status` is
    /// reserved for the system.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValue`] for empty input and
    /// [`ValidationError::InvalidEnum`] for anything outside the allowed set.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let kind = validate::sanitize(raw);
        if kind.is_empty() {
            return Err(ValidationError::EmptyValue("type".to_string()));
        }
        match kind.as_str() {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            other => Err(ValidationError::InvalidEnum(other.to_string())),
        }
    }

    /// Get the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from milliseconds since the epoch.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Milliseconds elapsed from `earlier` to this timestamp.
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-readable clock time of a message, formatted `HH-mm-ss`.
///
/// Immutable once created; recorded at the instant the message enters the
/// log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime(String);

impl ClockTime {
    /// Format the given timestamp as local clock time.
    pub fn from_timestamp(at: Timestamp) -> Self {
        // Out-of-range values cannot come from the system clock, only from
        // corrupt input; render them as a zero clock instead of failing.
        let formatted = chrono::DateTime::from_timestamp_millis(at.value())
            .map(|utc| utc.with_timezone(&chrono::Local).format("%H-%M-%S").to_string())
            .unwrap_or_else(|| "00-00-00".to_string());
        Self(formatted)
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
