//! Two-stage ranking: TF-IDF over documents, then IDF sum and query density over sentences.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::engine::idf::IdfTable;
use crate::index::{DocumentSet, TermFrequencies};
use crate::types::{QaError, QaResult};

/// Score of a single sentence against a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    /// Sum of IDF weights of distinct matching query words.
    pub score: f64,
    /// Fraction of the sentence's tokens that are query words.
    pub density: f64,
}

impl SentenceScore {
    /// Descending order: higher score first, then higher density.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.density.total_cmp(&self.density))
    }
}

fn idf_of(idfs: &IdfTable, word: &str) -> QaResult<f64> {
    idfs.get(word).ok_or_else(|| QaError::InconsistentIdf(word.to_string()))
}

/// Summed TF-IDF of query words in one document.
///
/// Query words absent from the document contribute nothing and are never looked up.
pub fn file_score(
    query: &BTreeSet<String>,
    freqs: &TermFrequencies,
    idfs: &IdfTable,
) -> QaResult<f64> {
    let mut score = 0.0;
    for word in query {
        let tf = freqs.count(word);
        if tf > 0 {
            score += tf as f64 * idf_of(idfs, word)?;
        }
    }
    Ok(score)
}

/// Matching-word IDF sum and query term density for one sentence.
pub fn sentence_score(
    query: &BTreeSet<String>,
    freqs: &TermFrequencies,
    idfs: &IdfTable,
) -> QaResult<SentenceScore> {
    let mut score = 0.0;
    let mut matched: u32 = 0;
    for word in query {
        let tf = freqs.count(word);
        if tf > 0 {
            score += idf_of(idfs, word)?;
            matched += tf;
        }
    }
    Ok(SentenceScore {
        score,
        density: matched as f64 / freqs.len() as f64,
    })
}

/// Return the `n` documents ranked highest by summed TF-IDF.
///
/// Equal scores keep the set's insertion order.
pub fn top_files(
    query: &BTreeSet<String>,
    files: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> QaResult<Vec<String>> {
    let mut scored: Vec<(&str, f64)> = Vec::with_capacity(files.len());
    for (name, freqs) in files.iter() {
        scored.push((name, file_score(query, freqs, idfs)?));
    }

    // `sort_by` is stable, which gives the insertion-order tie-break.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);

    if let Some((best, score)) = scored.first() {
        log::debug!("top file {best:?} scored {score:.4}");
    }

    Ok(scored.into_iter().map(|(name, _)| name.to_string()).collect())
}

/// Return the `n` sentences ranked highest by matching-word IDF, ties broken by density.
///
/// Every sentence must have at least one token.
pub fn top_sentences(
    query: &BTreeSet<String>,
    sentences: &DocumentSet,
    idfs: &IdfTable,
    n: usize,
) -> QaResult<Vec<String>> {
    let mut scored: Vec<(&str, SentenceScore)> = Vec::with_capacity(sentences.len());
    for (text, freqs) in sentences.iter() {
        if freqs.is_empty() {
            return Err(QaError::EmptySentence(text.to_string()));
        }
        scored.push((text, sentence_score(query, freqs, idfs)?));
    }

    scored.sort_by(|a, b| a.1.rank_cmp(&b.1));
    scored.truncate(n);

    Ok(scored.into_iter().map(|(text, _)| text.to_string()).collect())
}
