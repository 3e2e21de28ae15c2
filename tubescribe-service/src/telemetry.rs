//! Tracing setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tubescribe_core::error::{Result, ScribeError};

/// Builds the log filter: `RUST_LOG` if set, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global fmt subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(default_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| ScribeError::ConfigError(format!("failed to install tracing subscriber: {e}")))
}
