//! Insertion-ordered collection of tokenized documents.

use std::collections::HashMap;

use super::TermFrequencies;

/// Ordered mapping from a key (file name or sentence text) to its term frequencies.
///
/// Iteration follows first-insertion order. Rankers sort stably over this order, so it
/// is also the tie-break between equal scores. Re-inserting a key replaces its
/// frequencies but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    entries: Vec<(String, TermFrequencies)>,
    /// key → position in `entries`.
    positions: HashMap<String, usize>,
}

impl DocumentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document. Returns the previous frequencies if the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        freqs: TermFrequencies,
    ) -> Option<TermFrequencies> {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, freqs)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, freqs));
                None
            }
        }
    }

    /// Look up a document by key.
    pub fn get(&self, key: &str) -> Option<&TermFrequencies> {
        self.positions.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (key, frequencies) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermFrequencies)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, TermFrequencies)> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = (K, TermFrequencies)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, freqs) in iter {
            set.insert(key, freqs);
        }
        set
    }
}
