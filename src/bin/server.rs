//! Presence-aware message board server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin idobata-server -- --port 4000
//! ```

use clap::Parser;

use idobata::{ServerConfig, logger::setup_logger};

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = idobata::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
