//! Retrieval configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{QaError, QaResult};

/// How many results each ranking stage keeps.
///
/// Loaded from TOML:
///
/// ```toml
/// file_matches = 1
/// sentence_matches = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetrievalConfig {
    /// Documents whose sentences enter the sentence pool.
    pub file_matches: usize,
    /// Sentences returned as the answer.
    pub sentence_matches: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            file_matches: 1,
            sentence_matches: 1,
        }
    }
}

impl RetrievalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> QaResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| QaError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> QaResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Both result sizes must be at least 1.
    pub fn validate(&self) -> QaResult<()> {
        if self.file_matches == 0 {
            return Err(QaError::InvalidConfig(
                "file_matches must be at least 1".to_string(),
            ));
        }
        if self.sentence_matches == 0 {
            return Err(QaError::InvalidConfig(
                "sentence_matches must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
