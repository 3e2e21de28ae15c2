//! Plain-text renderings of a transcript.

use tubescribe_core::constants::NO_CAPTIONS_MESSAGE;
use tubescribe_core::types::TranscriptSnippet;

/// Joins snippet texts with single spaces.
///
/// An empty transcript renders as [`NO_CAPTIONS_MESSAGE`].
pub fn plain_text(transcript: &[TranscriptSnippet]) -> String {
    if transcript.is_empty() {
        return NO_CAPTIONS_MESSAGE.to_owned();
    }

    transcript
        .iter()
        .map(|snippet| snippet.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats one snippet as `m:ss - text`.
pub fn timestamp_line(snippet: &TranscriptSnippet) -> String {
    let start = snippet.start_seconds();
    format!("{}:{:02} - {}", start / 60, start % 60, snippet.text)
}

/// Formats every snippet with [`timestamp_line`].
pub fn timestamp_lines(transcript: &[TranscriptSnippet]) -> Vec<String> {
    transcript.iter().map(timestamp_line).collect()
}
