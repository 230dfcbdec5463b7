//! Sentence segmentation.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into candidate sentences.
///
/// Each line is a separate passage; passages are split on Unicode sentence
/// boundaries (UAX #29). Sentences are trimmed and empty ones dropped.
pub fn segment(text: &str) -> Vec<String> {
    text.split('\n')
        .flat_map(|passage| passage.unicode_sentences())
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}
