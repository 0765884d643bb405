// src/logging.rs
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,echobot_api=debug,tower_http=info";

/// Installs the global fmt subscriber; `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
