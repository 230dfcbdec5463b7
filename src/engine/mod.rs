//! Retrieval engine: tokenization, IDF weighting, ranking and the query pipeline.

pub mod idf;
pub mod query;
pub mod ranking;
pub mod segmenter;
pub mod tokenizer;

pub use idf::{compute_idfs, IdfTable};
pub use query::{Answer, IndexedCorpus, QueryEngine};
pub use ranking::{file_score, sentence_score, top_files, top_sentences, SentenceScore};
pub use segmenter::segment;
pub use tokenizer::Tokenizer;
