//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod error;
pub mod evict_idle;
pub mod heartbeat;
pub mod join_room;
pub mod post_message;
pub mod read_messages;

pub use error::{HeartbeatError, JoinError, PostMessageError};
pub use evict_idle::{
    DEFAULT_STALENESS_MS, DEFAULT_SWEEP_INTERVAL_MS, EvictIdleUseCase, sweep_idle_participants,
};
pub use heartbeat::HeartbeatUseCase;
pub use join_room::JoinRoomUseCase;
pub use post_message::PostMessageUseCase;
pub use read_messages::ReadMessagesUseCase;
