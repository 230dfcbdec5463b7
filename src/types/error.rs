//! Error types for retrieval and ranking.

use std::path::PathBuf;

/// All errors that can occur in tfidf-qa operations.
#[derive(thiserror::Error, Debug)]
pub enum QaError {
    #[error("Cannot compute IDF weights over an empty document set")]
    EmptyDocumentSet,

    #[error("Sentence has no tokens: {0:?}")]
    EmptySentence(String),

    #[error("Word {0:?} occurs in a scored document but has no IDF weight")]
    InconsistentIdf(String),

    #[error("No .txt files found in corpus directory {0}")]
    EmptyCorpus(PathBuf),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type QaResult<T> = Result<T, QaError>;
