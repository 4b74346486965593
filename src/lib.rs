//! Presence-aware message board server library.
//!
//! Participants join a shared room over HTTP, exchange broadcast and
//! addressed messages, and are evicted by a periodic sweeper when they stop
//! sending heartbeats.

pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use ui::runner::{ServerConfig, app, run_server};
