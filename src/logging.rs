//! Tracing subscriber setup for hosts that don't install their own.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "stickyboard=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install a fmt subscriber filtered by `RUST_LOG` (default
/// `stickyboard=info`). Does nothing if a global subscriber already exists.
pub fn init() {
    if let Err(e) = try_init() {
        tracing::debug!("Tracing subscriber already installed: {}", e);
    }
}

pub fn try_init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(true)
        .try_init()
}
