//! # Tubescribe Core
//!
//! Core types, errors, and traits shared by the Tubescribe crates.
//!
//! - **Types**: caption snippets, transcripts, and normalized language sets
//! - **Errors**: the workspace-wide [`ScribeError`]
//! - **Constants**: defaults inherited by configuration and rendering
//! - **Traits**: the [`TranscriptFetcher`] seam for upstream caption sources
//!
//! ## Example
//!
//! ```rust
//! use tubescribe_core::{LanguageSet, TranscriptSnippet};
//!
//! let langs = LanguageSet::from_requested(["es", "en"]);
//! assert_eq!(langs.as_slice(), ["en", "es"]);
//!
//! let snippet = TranscriptSnippet::new("hello", 1.5, 2.0);
//! assert_eq!(snippet.text, "hello");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

pub use constants::*;
pub use error::{Result, ScribeError};
pub use traits::*;
pub use types::*;
