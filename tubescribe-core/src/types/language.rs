//! Language selection.
//!
//! Callers request captions as a preference-ordered list of ISO 639-1 codes.
//! The upstream fetch honours that order, but two requests naming the same
//! languages in a different order are served by the same cached transcript.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LANGUAGE;

/// Sorted, de-duplicated set of language codes.
///
/// Never empty: an empty request normalizes to `["en"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct LanguageSet(Vec<String>);

impl LanguageSet {
    /// Normalizes a requested language list.
    pub fn from_requested<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes: Vec<String> = languages
            .into_iter()
            .map(|code| code.as_ref().to_owned())
            .collect();

        if codes.is_empty() {
            return Self::default();
        }

        codes.sort();
        codes.dedup();
        Self(codes)
    }

    /// Returns the codes in sorted order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct languages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        Self(vec![DEFAULT_LANGUAGE.to_owned()])
    }
}

impl From<Vec<String>> for LanguageSet {
    fn from(languages: Vec<String>) -> Self {
        Self::from_requested(languages)
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Returns the languages to ask the upstream for, in the caller's preference
/// order, defaulting to `["en"]`.
pub fn preferred_languages<I, S>(languages: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let preferred: Vec<String> = languages
        .into_iter()
        .map(|code| code.as_ref().to_owned())
        .collect();

    if preferred.is_empty() {
        vec![DEFAULT_LANGUAGE.to_owned()]
    } else {
        preferred
    }
}
