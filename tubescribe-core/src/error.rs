//! Error types for Tubescribe.
//!
//! Cache operations are infallible; these errors cover the request path around
//! the cache (input validation, upstream fetches) and configuration loading.

use thiserror::Error;

/// Result type alias using `ScribeError`.
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Main error type for Tubescribe operations.
#[derive(Debug, Error)]
pub enum ScribeError {
    // ═══════════════════════════════════════════════════════════════════════════
    // REQUEST ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// No video identifier was supplied.
    #[error("No URL or ID provided")]
    MissingVideoId,

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The upstream source has no transcript for the video in any requested language.
    #[error("No transcript available for '{video_id}': {reason}")]
    TranscriptUnavailable {
        /// Requested video
        video_id: String,
        /// Upstream explanation
        reason: String,
    },

    /// The upstream fetch failed.
    #[error("Transcript fetch failed: {0}")]
    FetchFailed(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ScribeError {
    /// Returns true if this error is recoverable (a later fetch may succeed).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScribeError::FetchFailed(_))
    }
}
