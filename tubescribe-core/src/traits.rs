//! Common traits for Tubescribe.
//!
//! These traits define the seams to external collaborators so the cache and
//! service can be exercised without a network.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Transcript;

// ═══════════════════════════════════════════════════════════════════════════════
// FETCHER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for retrieving transcripts from the upstream captions source.
///
/// Implementations might use:
/// - The YouTube timed-text endpoints (production)
/// - A proxy-aware HTTP client (for IP-blocked deployments)
/// - Canned transcripts (for testing)
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetches the transcript for `video_id`.
    ///
    /// `languages` is in preference order and never empty; the first language
    /// the upstream can serve wins.
    async fn fetch(&self, video_id: &str, languages: &[String]) -> Result<Transcript>;
}
