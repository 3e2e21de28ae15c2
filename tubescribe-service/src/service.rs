//! Cache-fronted transcript lookups.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use tubescribe_cache::{CacheStats, TranscriptCache};
use tubescribe_core::error::{Result, ScribeError};
use tubescribe_core::traits::TranscriptFetcher;
use tubescribe_core::types::{preferred_languages, Transcript};

use crate::config::ServiceConfig;
use crate::render;
use crate::sweeper::spawn_expiry_sweeper;

/// Transcript lookups backed by a shared [`TranscriptCache`].
///
/// Flow for every request:
/// 1. Return the cached transcript for `(video_id, languages)` if present
/// 2. Otherwise fetch from the upstream in the caller's language order
/// 3. Cache the successful result and return it
///
/// Fetch errors are returned unchanged and never cached. Concurrent misses on
/// the same key each fetch; the later `set` overwrites the earlier one.
pub struct TranscriptService<F> {
    fetcher: F,
    cache: Arc<TranscriptCache>,
}

impl<F: TranscriptFetcher> TranscriptService<F> {
    /// Creates a service sharing an existing cache.
    pub fn new(fetcher: F, cache: Arc<TranscriptCache>) -> Self {
        Self { fetcher, cache }
    }

    /// Creates a service with a fresh cache built from `config`.
    pub fn from_config(fetcher: F, config: &ServiceConfig) -> Self {
        info!(
            enabled = config.cache.enabled,
            ttl_seconds = config.cache.ttl_seconds,
            max_size = config.cache.max_size,
            "Initializing transcript cache"
        );
        Self::new(fetcher, Arc::new(TranscriptCache::new(config.cache.clone())))
    }

    /// Returns the shared cache.
    pub fn cache(&self) -> &Arc<TranscriptCache> {
        &self.cache
    }

    /// Starts the background sweeper if `config` asks for one.
    pub fn spawn_sweeper(&self, config: &ServiceConfig) -> Option<JoinHandle<()>> {
        config
            .cleanup_interval
            .map(|every| spawn_expiry_sweeper(self.cache.clone(), every))
    }

    /// Returns the transcript for a video.
    #[instrument(skip(self, languages))]
    pub async fn transcript<S>(&self, video_id: &str, languages: &[S]) -> Result<Transcript>
    where
        S: AsRef<str> + Sync,
    {
        if video_id.trim().is_empty() {
            return Err(ScribeError::MissingVideoId);
        }

        if let Some(transcript) = self.cache.get(video_id, languages) {
            debug!(video_id, "Cache hit");
            return Ok(transcript);
        }

        debug!(video_id, "Cache miss, fetching");

        let preferred = preferred_languages(languages);
        let transcript = self.fetcher.fetch(video_id, &preferred).await?;

        self.cache.set(video_id, transcript.clone(), languages);

        info!(video_id, snippets = transcript.len(), "Fetched transcript");

        Ok(transcript)
    }

    /// Returns the captions as one space-separated string.
    pub async fn captions<S>(&self, video_id: &str, languages: &[S]) -> Result<String>
    where
        S: AsRef<str> + Sync,
    {
        let transcript = self.transcript(video_id, languages).await?;
        Ok(render::plain_text(&transcript))
    }

    /// Returns one `m:ss - text` line per caption.
    pub async fn timestamps<S>(&self, video_id: &str, languages: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let transcript = self.transcript(video_id, languages).await?;
        Ok(render::timestamp_lines(&transcript))
    }

    /// Returns cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drops every cached transcript.
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Transcript cache cleared");
    }

    /// Drops expired transcripts and returns how many were removed.
    pub fn cleanup_expired(&self) -> usize {
        self.cache.cleanup_expired()
    }
}
