//! HTTP shell: router, handlers, state, and the server runner.

mod error;
mod handler;
pub mod runner;
mod signal;
pub mod state;

pub use runner::{ServerConfig, app, run_server};
