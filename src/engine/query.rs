//! Question answering pipeline: documents first, then sentences within them.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::RetrievalConfig;
use crate::corpus::Corpus;
use crate::engine::idf::{compute_idfs, IdfTable};
use crate::engine::ranking::{top_files, top_sentences};
use crate::engine::segmenter::segment;
use crate::engine::tokenizer::Tokenizer;
use crate::index::DocumentSet;
use crate::types::QaResult;

/// A corpus with its document-level tokens and IDF weights, ready for queries.
pub struct IndexedCorpus {
    corpus: Corpus,
    files: DocumentSet,
    idfs: IdfTable,
}

impl IndexedCorpus {
    /// Tokenized documents, in corpus order.
    pub fn files(&self) -> &DocumentSet {
        &self.files
    }

    /// Document-level IDF weights.
    pub fn idfs(&self) -> &IdfTable {
        &self.idfs
    }
}

/// Result of answering one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Distinct normalized query words.
    pub query_terms: Vec<String>,
    /// Top-ranked documents, best first.
    pub files: Vec<String>,
    /// Top-ranked sentences from those documents, best first.
    /// Empty when none of the documents contain a sentence with tokens.
    pub sentences: Vec<String>,
}

/// Runs the two-stage retrieval.
pub struct QueryEngine {
    config: RetrievalConfig,
    tokenizer: Tokenizer,
}

impl QueryEngine {
    /// Create an engine with the given result sizes.
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Tokenizer shared by documents, sentences and queries.
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize every document and compute document-level IDF weights.
    pub fn index(&self, corpus: Corpus) -> QaResult<IndexedCorpus> {
        let files: DocumentSet = corpus
            .iter()
            .map(|(id, text)| (id, self.tokenizer.term_frequencies(text)))
            .collect();
        let idfs = compute_idfs(&files)?;
        Ok(IndexedCorpus {
            corpus,
            files,
            idfs,
        })
    }

    /// Collect the sentences of the given documents that have at least one token.
    ///
    /// Documents are visited in the given order; a sentence repeated later keeps the
    /// position of its first occurrence.
    pub fn sentence_pool(&self, indexed: &IndexedCorpus, files: &[String]) -> DocumentSet {
        let mut sentences = DocumentSet::new();
        for name in files {
            let Some(text) = indexed.corpus.get(name) else {
                log::warn!("ranked file {name:?} missing from corpus");
                continue;
            };
            for sentence in segment(text) {
                let freqs = self.tokenizer.term_frequencies(&sentence);
                if !freqs.is_empty() {
                    sentences.insert(sentence, freqs);
                }
            }
        }
        sentences
    }

    /// Answer a free-text query against an indexed corpus.
    pub fn answer(&self, indexed: &IndexedCorpus, query_text: &str) -> QaResult<Answer> {
        let query: BTreeSet<String> = self.tokenizer.query_terms(query_text);
        if query.is_empty() {
            log::warn!("query {query_text:?} has no searchable words");
        }

        let files = top_files(
            &query,
            &indexed.files,
            &indexed.idfs,
            self.config.file_matches,
        )?;

        let pool = self.sentence_pool(indexed, &files);
        log::debug!(
            "sentence pool has {} sentences from {} files",
            pool.len(),
            files.len()
        );

        let sentences = if pool.is_empty() {
            log::warn!("no sentences with searchable words in {files:?}");
            Vec::new()
        } else {
            let idfs = compute_idfs(&pool)?;
            top_sentences(&query, &pool, &idfs, self.config.sentence_matches)?
        };

        Ok(Answer {
            query_terms: query.into_iter().collect(),
            files,
            sentences,
        })
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}
