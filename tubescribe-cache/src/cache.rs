//! In-memory LRU cache with TTL expiry for transcripts.

use std::sync::Arc;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use tubescribe_core::constants::{
    DEFAULT_CACHE_ENABLED, DEFAULT_CACHE_MAX_SIZE, DEFAULT_CACHE_TTL_SECONDS,
};
use tubescribe_core::types::{LanguageSet, Transcript};

use crate::clock::{Clock, SystemClock};

/// Cache key: a video plus the normalized language set it was fetched for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Video identifier
    pub video_id: String,
    /// Sorted, de-duplicated languages
    pub languages: LanguageSet,
}

impl CacheKey {
    /// Builds the canonical key for a request.
    pub fn new<S: AsRef<str>>(video_id: &str, languages: &[S]) -> Self {
        Self {
            video_id: video_id.to_owned(),
            languages: LanguageSet::from_requested(languages),
        }
    }
}

struct CacheEntry<P> {
    payload: P,
    inserted_at: Instant,
}

/// Cache configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// When false every read misses and every write is dropped
    pub enabled: bool,
    /// Maximum entry age in seconds
    pub ttl_seconds: u64,
    /// Maximum number of entries
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_CACHE_ENABLED,
            ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            max_size: DEFAULT_CACHE_MAX_SIZE,
        }
    }
}

impl CacheConfig {
    /// Configuration with caching turned off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }
}

/// Bounded transcript cache.
///
/// Entries are ordered by recency of use; a successful `get` or any `set`
/// moves the entry to the most-recently-used end, and eviction takes from the
/// other end. Expiry is lazy: an entry past its TTL is dropped when a `get`
/// touches it or when [`cleanup_expired`](Self::cleanup_expired) runs, and
/// until then still counts towards [`size`](Self::size).
///
/// A single mutex guards the structure, so every operation is atomic with
/// respect to the others. Nothing here awaits or performs I/O.
pub struct TranscriptCache<P = Transcript> {
    entries: Mutex<LruCache<CacheKey, CacheEntry<P>>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl<P: Clone> TranscriptCache<P> {
    /// Creates a cache backed by the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        // Capacity is enforced in `set` so that `max_size == 0` behaves as an
        // always-empty cache instead of being rejected.
        Self {
            entries: Mutex::new(LruCache::unbounded()),
            config,
            clock,
        }
    }

    /// Returns the configuration the cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn is_expired(&self, entry: &CacheEntry<P>, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) > self.config.ttl()
    }

    /// Gets a cached transcript.
    ///
    /// Returns `None` when disabled, absent, or expired. An expired entry is
    /// removed; a live one is promoted to most-recently-used.
    pub fn get<S: AsRef<str>>(&self, video_id: &str, languages: &[S]) -> Option<P> {
        if !self.config.enabled {
            return None;
        }

        let key = CacheKey::new(video_id, languages);
        let mut entries = self.entries.lock();
        let now = self.clock.now();

        let expired = match entries.peek(&key) {
            Some(entry) => self.is_expired(entry, now),
            None => {
                trace!(video_id, languages = %key.languages, "Cache miss");
                return None;
            }
        };

        if expired {
            entries.pop(&key);
            debug!(video_id, languages = %key.languages, "Cache entry expired");
            return None;
        }

        trace!(video_id, languages = %key.languages, "Cache hit");
        entries.get(&key).map(|entry| entry.payload.clone())
    }

    /// Caches a transcript, replacing any previous entry for the same key.
    ///
    /// Evicts least-recently-used entries until there is room for one more.
    pub fn set<S: AsRef<str>>(&self, video_id: &str, payload: P, languages: &[S]) {
        if !self.config.enabled {
            return;
        }

        let key = CacheKey::new(video_id, languages);
        let mut entries = self.entries.lock();
        let now = self.clock.now();

        entries.pop(&key);

        let mut evicted = 0usize;
        while entries.len() >= self.config.max_size {
            if entries.pop_lru().is_none() {
                break;
            }
            evicted += 1;
        }
        if evicted > 0 {
            debug!(evicted, capacity = self.config.max_size, "Evicted least-recently-used entries");
        }

        if self.config.max_size == 0 {
            trace!(video_id, "Cache capacity is zero, entry not retained");
            return;
        }

        entries.put(
            key,
            CacheEntry {
                payload,
                inserted_at: now,
            },
        );
    }

    /// Clears all cached entries, whether or not the cache is enabled.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Returns the number of stored entries, including expired ones not yet
    /// removed.
    pub fn size(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Removes all expired entries and returns how many were dropped.
    ///
    /// Always 0 when disabled.
    pub fn cleanup_expired(&self) -> usize {
        if !self.config.enabled {
            return 0;
        }

        let mut entries = self.entries.lock();
        let now = self.clock.now();

        let expired: Vec<CacheKey> = entries
            .iter()
            .filter(|(_, entry)| self.is_expired(entry, now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            entries.pop(key);
        }

        if !expired.is_empty() {
            debug!(removed = expired.len(), remaining = entries.len(), "Removed expired entries");
        }

        expired.len()
    }

    /// Returns cache statistics without touching recency or removing anything.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let now = self.clock.now();
        let expired = entries
            .iter()
            .filter(|(_, entry)| self.is_expired(entry, now))
            .count();

        CacheStats {
            enabled: self.config.enabled,
            size: entries.len(),
            max_size: self.config.max_size,
            ttl_seconds: self.config.ttl_seconds,
            expired_entries: expired,
        }
    }
}

impl<P: Clone> Default for TranscriptCache<P> {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

/// Cache statistics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Whether caching is enabled
    pub enabled: bool,
    /// Stored entries (including expired ones not yet removed)
    pub size: usize,
    /// Maximum capacity
    pub max_size: usize,
    /// Entry time-to-live in seconds
    pub ttl_seconds: u64,
    /// Stored entries already past their TTL
    pub expired_entries: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use test_case::test_case;
    use tubescribe_core::types::TranscriptSnippet;

    const NO_LANGUAGES: &[&str] = &[];

    fn transcript(text: &str) -> Transcript {
        vec![
            TranscriptSnippet::new(text, 0.0, 1.5),
            TranscriptSnippet::new(format!("{text} again"), 1.5, 2.0),
        ]
    }

    fn config(max_size: usize, ttl_seconds: u64) -> CacheConfig {
        CacheConfig {
            enabled: true,
            ttl_seconds,
            max_size,
        }
    }

    fn cache_with(config: CacheConfig) -> (TranscriptCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        let cache = TranscriptCache::with_clock(config, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let (cache, _) = cache_with(CacheConfig::default());
        let payload = transcript("hello");

        assert!(cache.get("abc", NO_LANGUAGES).is_none());

        cache.set("abc", payload.clone(), &["en"]);

        assert_eq!(cache.get("abc", &["en"]), Some(payload));
    }

    #[test]
    fn test_cache_language_order_independent() {
        let (cache, _) = cache_with(CacheConfig::default());
        let payload = transcript("hola");

        cache.set("abc", payload.clone(), &["es", "en"]);

        assert_eq!(cache.get("abc", &["en", "es"]), Some(payload));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_cache_default_language() {
        let (cache, _) = cache_with(CacheConfig::default());
        let payload = transcript("hello");

        cache.set("abc", payload.clone(), NO_LANGUAGES);

        assert_eq!(cache.get("abc", &["en"]), Some(payload.clone()));

        cache.set("xyz", payload.clone(), &["en"]);
        assert_eq!(cache.get("xyz", NO_LANGUAGES), Some(payload));
    }

    #[test]
    fn test_cache_languages_distinguish_entries() {
        let (cache, _) = cache_with(CacheConfig::default());

        cache.set("abc", transcript("english"), &["en"]);

        assert!(cache.get("abc", &["es"]).is_none());
        assert!(cache.get("abc", &["en", "es"]).is_none());
    }

    #[test]
    fn test_cache_ttl_expiration() {
        let (cache, clock) = cache_with(config(10, 1));

        cache.set("abc", transcript("hello"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(2));

        assert_eq!(cache.size(), 1);
        assert!(cache.get("abc", NO_LANGUAGES).is_none());
        assert_eq!(cache.size(), 0);
    }

    #[test_case(5, Duration::from_secs(5), true ; "age equal to ttl still hits")]
    #[test_case(5, Duration::from_millis(5001), false ; "age past ttl misses")]
    #[test_case(0, Duration::ZERO, true ; "zero ttl hits with no delay")]
    #[test_case(0, Duration::from_millis(1), false ; "zero ttl expires on any delay")]
    fn test_cache_ttl_boundary(ttl_seconds: u64, age: Duration, hit: bool) {
        let (cache, clock) = cache_with(config(10, ttl_seconds));

        cache.set("abc", transcript("hello"), NO_LANGUAGES);
        clock.advance(age);

        assert_eq!(cache.get("abc", NO_LANGUAGES).is_some(), hit);
        assert_eq!(cache.size(), usize::from(hit));
    }

    #[test]
    fn test_cache_lru_eviction() {
        let (cache, _) = cache_with(config(2, 3600));

        cache.set("A", transcript("a"), NO_LANGUAGES);
        cache.set("B", transcript("b"), NO_LANGUAGES);
        cache.set("C", transcript("c"), NO_LANGUAGES);

        assert_eq!(cache.size(), 2);
        assert!(cache.get("A", NO_LANGUAGES).is_none());
        assert!(cache.get("B", NO_LANGUAGES).is_some());
        assert!(cache.get("C", NO_LANGUAGES).is_some());
    }

    #[test]
    fn test_cache_get_promotes_entry() {
        let (cache, _) = cache_with(config(2, 3600));

        cache.set("A", transcript("a"), NO_LANGUAGES);
        cache.set("B", transcript("b"), NO_LANGUAGES);
        assert!(cache.get("A", NO_LANGUAGES).is_some());
        cache.set("C", transcript("c"), NO_LANGUAGES);

        assert!(cache.get("B", NO_LANGUAGES).is_none());
        assert!(cache.get("A", NO_LANGUAGES).is_some());
        assert!(cache.get("C", NO_LANGUAGES).is_some());
    }

    #[test]
    fn test_cache_reset_refreshes_position_and_timestamp() {
        let (cache, clock) = cache_with(config(2, 10));

        cache.set("A", transcript("a1"), NO_LANGUAGES);
        cache.set("B", transcript("b"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(8));

        // Re-setting A makes B the eviction candidate and restarts A's TTL.
        cache.set("A", transcript("a2"), NO_LANGUAGES);
        assert_eq!(cache.size(), 2);

        cache.set("C", transcript("c"), NO_LANGUAGES);
        assert!(cache.get("B", NO_LANGUAGES).is_none());

        clock.advance(Duration::from_secs(8));
        assert_eq!(cache.get("A", NO_LANGUAGES), Some(transcript("a2")));
    }

    #[test]
    fn test_cache_disabled() {
        let (cache, _) = cache_with(CacheConfig::disabled());

        cache.set("abc", transcript("hello"), &["en"]);

        assert!(cache.get("abc", &["en"]).is_none());
        assert_eq!(cache.size(), 0);
        assert_eq!(cache.cleanup_expired(), 0);
    }

    #[test]
    fn test_cache_clear() {
        let (cache, _) = cache_with(CacheConfig::default());
        cache.set("A", transcript("a"), NO_LANGUAGES);
        cache.set("B", transcript("b"), &["es"]);
        cache.set("C", transcript("c"), &["fr", "en"]);

        cache.clear();

        assert_eq!(cache.size(), 0);
        assert!(cache.is_empty());
        assert!(cache.get("A", NO_LANGUAGES).is_none());
        assert!(cache.get("B", &["es"]).is_none());
        assert!(cache.get("C", &["en", "fr"]).is_none());
    }

    #[test]
    fn test_cache_clear_when_disabled() {
        let (cache, _) = cache_with(CacheConfig::disabled());
        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_cache_cleanup_expired() {
        let (cache, clock) = cache_with(config(10, 10));

        cache.set("A", transcript("a"), NO_LANGUAGES);
        cache.set("B", transcript("b"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(6));
        cache.set("C", transcript("c"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(6));

        assert_eq!(cache.size(), 3);
        assert_eq!(cache.cleanup_expired(), 2);
        assert_eq!(cache.size(), 1);
        assert!(cache.get("C", NO_LANGUAGES).is_some());
        assert_eq!(cache.cleanup_expired(), 0);
    }

    #[test]
    fn test_cache_set_does_not_sweep_other_keys() {
        let (cache, clock) = cache_with(config(10, 1));

        cache.set("A", transcript("a"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(2));
        cache.set("B", transcript("b"), NO_LANGUAGES);

        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_cache_zero_capacity() {
        let (cache, _) = cache_with(config(0, 3600));

        cache.set("abc", transcript("hello"), NO_LANGUAGES);

        assert_eq!(cache.size(), 0);
        assert!(cache.get("abc", NO_LANGUAGES).is_none());
    }

    #[test]
    fn test_cache_stats() {
        let (cache, clock) = cache_with(config(3, 5));
        cache.set("A", transcript("a"), NO_LANGUAGES);
        clock.advance(Duration::from_secs(6));
        cache.set("B", transcript("b"), NO_LANGUAGES);

        let stats = cache.stats();
        assert_eq!(
            stats,
            CacheStats {
                enabled: true,
                size: 2,
                max_size: 3,
                ttl_seconds: 5,
                expired_entries: 1,
            }
        );
        // Reading stats removes nothing.
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_cache_stats_do_not_promote() {
        let (cache, _) = cache_with(config(2, 3600));
        cache.set("A", transcript("a"), NO_LANGUAGES);
        cache.set("B", transcript("b"), NO_LANGUAGES);

        let _ = cache.stats();
        cache.set("C", transcript("c"), NO_LANGUAGES);

        assert!(cache.get("A", NO_LANGUAGES).is_none());
    }

    #[test]
    fn test_cache_generic_payload() {
        let cache: TranscriptCache<u32> = TranscriptCache::new(CacheConfig::default());
        cache.set("abc", 42, &["en"]);
        assert_eq!(cache.get("abc", &["en"]), Some(42));
    }

    #[test]
    fn test_cache_concurrent_sets_respect_capacity() {
        let cache: TranscriptCache<usize> = TranscriptCache::new(config(16, 3600));

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let cache = &cache;
                scope.spawn(move || {
                    for i in 0..200 {
                        let id = format!("video-{worker}-{i}");
                        cache.set(&id, i, &["en"]);
                        let _ = cache.get(&id, &["en"]);
                        assert!(cache.size() <= 16);
                    }
                });
            }
        });

        assert_eq!(cache.size(), 16);
    }
}
