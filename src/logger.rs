//! Tracing subscriber setup shared by binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the given binary name (hyphens
/// normalized to underscores) is filtered at `default_level`, with
/// `tower_http` at `info`.
pub fn setup_logger(name: &str, default_level: &str) {
    let target = name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{target}={default_level},tower_http=info")));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
