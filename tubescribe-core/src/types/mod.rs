//! Domain types for Tubescribe.
//!
//! - [`TranscriptSnippet`]: one caption line with its timing
//! - [`Transcript`]: the ordered snippets for a video
//! - [`LanguageSet`]: order-independent language selection used in cache keys

mod language;
mod transcript;

pub use language::*;
pub use transcript::*;
