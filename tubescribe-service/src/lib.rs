//! # Tubescribe Service
//!
//! The request path in front of the transcript cache: check the cache, fetch
//! from the upstream on a miss, store the result, and render it.
//!
//! ## Operations
//!
//! - [`TranscriptService::transcript`] - raw caption snippets
//! - [`TranscriptService::captions`] - captions joined into one string
//! - [`TranscriptService::timestamps`] - `m:ss - text` lines
//! - [`TranscriptService::cache_stats`] / [`clear_cache`](TranscriptService::clear_cache) /
//!   [`cleanup_expired`](TranscriptService::cleanup_expired) - cache operations
//!
//! ## Example
//!
//! ```rust,ignore
//! use tubescribe_service::{ServiceConfig, TranscriptService};
//!
//! let config = ServiceConfig::from_env()?;
//! tubescribe_service::telemetry::init_tracing(&config.log_level)?;
//!
//! let service = TranscriptService::from_config(MyFetcher::new(), &config);
//! let _sweeper = service.spawn_sweeper(&config);
//! let text = service.captions("dQw4w9WgXcQ", &["en"]).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
pub mod render;
mod service;
mod sweeper;
pub mod telemetry;

pub use config::ServiceConfig;
pub use service::TranscriptService;
pub use sweeper::spawn_expiry_sweeper;

pub use tubescribe_cache::{CacheConfig, CacheStats, TranscriptCache};
