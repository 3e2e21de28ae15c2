//! # Tubescribe Cache
//!
//! Bounded in-memory transcript cache with least-recently-used eviction and
//! lazy TTL expiry. Sits in front of a [`TranscriptFetcher`] so repeated
//! requests for the same video and languages skip the upstream.
//!
//! The cache never calls the fetcher itself; callers check the cache, fetch on
//! a miss, then store the result.
//!
//! [`TranscriptFetcher`]: tubescribe_core::TranscriptFetcher

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod cache;
mod clock;

pub use cache::{CacheConfig, CacheKey, CacheStats, TranscriptCache};
pub use clock::{Clock, ManualClock, SystemClock};
