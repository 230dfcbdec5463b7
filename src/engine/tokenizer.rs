//! Shared tokenizer for document, sentence, and query text.

use std::collections::{BTreeSet, HashSet};

use unicode_segmentation::UnicodeSegmentation;

use crate::index::TermFrequencies;

/// English stop words to exclude from tokenization, contraction forms included.
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Deterministic tokenizer producing lowercase word tokens.
///
/// Text is split on Unicode word boundaries. A token is kept only if it contains at
/// least one alphabetic character and is not a stop word, so punctuation and bare
/// numbers are dropped.
pub struct Tokenizer {
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    /// Create a new tokenizer with the default stop word list.
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenize text into lowercase terms, in order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .unicode_words()
            // Typographic apostrophes would otherwise slip past the contraction stop words.
            .map(|word| word.replace('\u{2019}', "'"))
            .filter(|word| word.chars().any(char::is_alphabetic))
            .filter(|word| !self.stop_words.contains(word.as_str()))
            .collect()
    }

    /// Tokenize and return term frequencies.
    pub fn term_frequencies(&self, text: &str) -> TermFrequencies {
        TermFrequencies::from_tokens(self.tokenize(text))
    }

    /// Tokenize a query into a set of distinct terms.
    pub fn query_terms(&self, text: &str) -> BTreeSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    /// Whether a lowercase word is on the stop list.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
