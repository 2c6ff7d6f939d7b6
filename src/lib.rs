pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod service;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from the environment, falling back to the
/// application default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
