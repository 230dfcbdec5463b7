//! TF-IDF question answering over a directory of text documents.
//!
//! A query is answered in two stages: documents are ranked by summed TF-IDF, then the
//! sentences of the best documents are ranked by the IDF of matching query words,
//! with query term density breaking ties.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod index;
pub mod types;

pub use config::RetrievalConfig;
pub use corpus::Corpus;
pub use engine::{
    compute_idfs, file_score, segment, sentence_score, top_files, top_sentences, Answer,
    IdfTable, IndexedCorpus, QueryEngine, SentenceScore, Tokenizer,
};
pub use index::{DocumentSet, TermFrequencies};
pub use types::{QaError, QaResult};
