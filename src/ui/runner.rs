//! Server configuration, router assembly, and the run loop.

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    domain::BoardRepository,
    infrastructure::repository::{InMemoryBoardRepository, JsonFileBoardRepository},
    ui::{handler, signal, state::AppState},
    usecase::{
        DEFAULT_STALENESS_MS, DEFAULT_SWEEP_INTERVAL_MS, EvictIdleUseCase, sweep_idle_participants,
    },
};

/// Command line configuration for the server binary
#[derive(Debug, Parser)]
#[command(name = "idobata-server", version, about = "Presence-aware message board server")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, default_value_t = 4000)]
    pub port: u16,

    /// Directory for the JSON file store; omit to keep all state in memory
    #[arg(long)]
    pub data_dir: Option<std::path::PathBuf>,

    /// Period of the eviction sweeper, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SWEEP_INTERVAL_MS)]
    pub sweep_interval_ms: u64,

    /// Idle time after which a participant is evicted, in milliseconds
    #[arg(long, default_value_t = DEFAULT_STALENESS_MS)]
    pub staleness_ms: i64,
}

/// Build the application router over the given repository.
///
/// Exposed separately from [`run_server`] so tests can mount the router on
/// an ephemeral listener.
pub fn app(repository: Arc<dyn BoardRepository>) -> Router {
    let state = Arc::new(AppState { repository });

    Router::new()
        .route(
            "/participants",
            post(handler::join_room).get(handler::list_participants),
        )
        .route("/status", post(handler::heartbeat))
        .route(
            "/messages",
            post(handler::post_message).get(handler::list_messages),
        )
        .route("/health", get(handler::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until a shutdown signal arrives.
///
/// Starts the eviction sweeper as an independent task sharing the same
/// repository as the request handlers.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repository: Arc<dyn BoardRepository> = match &config.data_dir {
        Some(dir) => {
            tracing::info!("Using JSON file store at {}", dir.display());
            Arc::new(JsonFileBoardRepository::open(dir).await?)
        }
        None => {
            tracing::info!("Using in-memory store");
            Arc::new(InMemoryBoardRepository::new())
        }
    };

    let evictor = EvictIdleUseCase::new(repository.clone(), config.staleness_ms);
    let sweeper = tokio::spawn(sweep_idle_participants(
        evictor,
        Duration::from_millis(config.sweep_interval_ms),
    ));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app(repository))
        .with_graceful_shutdown(signal::shutdown_signal())
        .await?;

    sweeper.abort();
    Ok(())
}
