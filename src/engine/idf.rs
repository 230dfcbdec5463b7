//! Inverse document frequency weights.

use std::collections::HashMap;

use crate::index::DocumentSet;
use crate::types::{QaError, QaResult};

/// Word → IDF weight, built over one document set.
///
/// Every word occurring in at least one document of the set has an entry and no
/// other word does. Weights are `ln(N / df)`, so they are never negative.
#[derive(Debug, Clone, Default)]
pub struct IdfTable {
    weights: HashMap<String, f64>,
    /// Number of documents the table was built over.
    doc_count: usize,
}

impl IdfTable {
    /// Build a table directly from weights.
    pub fn from_weights<I, S>(weights: I, doc_count: usize) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            weights: weights.into_iter().map(|(w, v)| (w.into(), v)).collect(),
            doc_count,
        }
    }

    /// Weight of a word, if it occurred in any document.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.weights.get(word).copied()
    }

    /// Whether the word occurred in any document.
    pub fn contains(&self, word: &str) -> bool {
        self.weights.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no words.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Number of documents the weights were computed over.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// (word, weight) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &v)| (w.as_str(), v))
    }
}

/// Compute IDF weights over a set of tokenized documents.
///
/// Document frequency counts presence, not multiplicity. Fails on an empty set.
pub fn compute_idfs(documents: &DocumentSet) -> QaResult<IdfTable> {
    if documents.is_empty() {
        return Err(QaError::EmptyDocumentSet);
    }

    let mut doc_freqs: HashMap<&str, usize> = HashMap::new();
    for (_, freqs) in documents.iter() {
        for term in freqs.terms() {
            *doc_freqs.entry(term).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    let weights: HashMap<String, f64> = doc_freqs
        .into_iter()
        .map(|(term, df)| (term.to_string(), (n / df as f64).ln()))
        .collect();

    log::debug!(
        "computed {} idf weights over {} documents",
        weights.len(),
        documents.len()
    );

    Ok(IdfTable {
        weights,
        doc_count: documents.len(),
    })
}
