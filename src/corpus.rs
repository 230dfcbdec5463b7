//! Raw document corpus.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::types::{QaError, QaResult};

/// Document identifier → raw text, ordered by identifier.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: BTreeMap<String, String>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `.txt` file directly inside `dir`, keyed by file name.
    ///
    /// Symlinks are followed. Subdirectories are not searched. Files that are not valid
    /// UTF-8 fail the load; file names that are not valid UTF-8 are skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> QaResult<Self> {
        let dir = dir.as_ref();
        let mut corpus = Self::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                log::debug!("skipping non-text file {}", path.display());
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                log::warn!("skipping file with non UTF-8 name {}", path.display());
                continue;
            };
            let text = fs::read_to_string(&path)?;
            corpus.insert(name, text);
        }

        if corpus.is_empty() {
            return Err(QaError::EmptyCorpus(dir.to_path_buf()));
        }

        log::info!("loaded {} documents from {}", corpus.len(), dir.display());
        Ok(corpus)
    }

    /// Add or replace a document.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    /// Raw text of a document.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.documents.get(id).map(String::as_str)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// (identifier, text) pairs ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}
