//! Service configuration loaded from the environment.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use tubescribe_cache::CacheConfig;
use tubescribe_core::constants::{
    DEFAULT_CACHE_ENABLED, DEFAULT_CACHE_MAX_SIZE, DEFAULT_CACHE_TTL_SECONDS,
};
use tubescribe_core::error::{Result, ScribeError};

const ENV_CACHE_ENABLED: &str = "CACHE_ENABLED";
const ENV_CACHE_TTL_SECONDS: &str = "CACHE_TTL_SECONDS";
const ENV_CACHE_MAX_SIZE: &str = "CACHE_MAX_SIZE";
const ENV_CACHE_CLEANUP_INTERVAL_SECONDS: &str = "CACHE_CLEANUP_INTERVAL_SECONDS";
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Service configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Transcript cache settings, fixed for the process lifetime
    pub cache: CacheConfig,
    /// How often the background sweeper drops expired entries; `None` disables it
    pub cleanup_interval: Option<Duration>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            cleanup_interval: None,
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let enabled = lookup(ENV_CACHE_ENABLED)
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(DEFAULT_CACHE_ENABLED);

        let ttl_seconds = parse_var(&lookup, ENV_CACHE_TTL_SECONDS)?
            .unwrap_or(DEFAULT_CACHE_TTL_SECONDS);

        let max_size = parse_var(&lookup, ENV_CACHE_MAX_SIZE)?
            .unwrap_or(DEFAULT_CACHE_MAX_SIZE);

        let cleanup_interval = parse_var::<u64, _>(&lookup, ENV_CACHE_CLEANUP_INTERVAL_SECONDS)?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let log_level = lookup(ENV_LOG_LEVEL)
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.into());

        Ok(Self {
            cache: CacheConfig {
                enabled,
                ttl_seconds,
                max_size,
            },
            cleanup_interval,
            log_level,
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| ScribeError::ConfigError(format!("{name}={raw:?}: {e}"))),
    }
}
