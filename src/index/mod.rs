//! Index structures for scoring. Each is built once per granularity and read-only afterwards.

pub mod document_set;
pub mod term_frequencies;

pub use document_set::DocumentSet;
pub use term_frequencies::TermFrequencies;
