//! Service-wide constants for Tubescribe.

// ═══════════════════════════════════════════════════════════════════════════════
// LANGUAGES
// ═══════════════════════════════════════════════════════════════════════════════

/// Language used when a caller does not request any.
pub const DEFAULT_LANGUAGE: &str = "en";

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Whether the transcript cache is enabled when not configured.
pub const DEFAULT_CACHE_ENABLED: bool = true;

/// Default transcript time-to-live (one hour).
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Default maximum number of cached transcripts.
pub const DEFAULT_CACHE_MAX_SIZE: usize = 1000;

// ═══════════════════════════════════════════════════════════════════════════════
// RENDERING
// ═══════════════════════════════════════════════════════════════════════════════

/// Plain-text captions returned for a transcript with no snippets.
pub const NO_CAPTIONS_MESSAGE: &str = "No captions found for video";
