//! Per-document term frequency table.

use std::collections::HashMap;

/// Term frequency table for a single document or sentence.
/// Built once from a token sequence so membership and count lookups avoid linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    /// term → number of occurrences.
    counts: HashMap<String, u32>,
    /// Total number of tokens, duplicates included.
    total: u32,
}

impl TermFrequencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ordered token sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut freqs = Self::new();
        for token in tokens {
            freqs.add(token.into());
        }
        freqs
    }

    /// Record one occurrence of a term.
    pub fn add(&mut self, term: String) {
        *self.counts.entry(term).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of a term (0 if absent).
    pub fn count(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Whether the term occurs at least once.
    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Total token count (document length).
    pub fn len(&self) -> u32 {
        self.total
    }

    /// Whether no tokens were recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct terms.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Distinct terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}
