//! Handler modules for the HTTP endpoints.

pub mod http;

// Re-export HTTP handlers
pub use http::{health_check, heartbeat, join_room, list_messages, list_participants, post_message};
