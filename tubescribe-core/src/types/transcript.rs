//! Transcript types returned by the upstream captions source.

use serde::{Deserialize, Serialize};

/// A single caption line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSnippet {
    /// Caption text
    pub text: String,
    /// Start offset in seconds
    pub start: f64,
    /// Display duration in seconds
    pub duration: f64,
}

impl TranscriptSnippet {
    /// Creates a new snippet.
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// Start offset truncated to whole seconds.
    ///
    /// Negative or non-finite offsets clamp to zero.
    pub fn start_seconds(&self) -> u64 {
        if self.start.is_finite() && self.start > 0.0 {
            self.start as u64
        } else {
            0
        }
    }
}

/// Ordered caption snippets for one video.
pub type Transcript = Vec<TranscriptSnippet>;
