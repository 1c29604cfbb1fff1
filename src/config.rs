//! Engine configuration via `lexidb.toml`
//!
//! The config file carries the stop-word list so deployments can tune it
//! without recompiling. Load with [`SearchConfig::from_file`] and hand the
//! result to [`SearchEngine::from_config`].
//!
//! [`SearchEngine::from_config`]: crate::SearchEngine::from_config

use crate::error::{Error, Result};
use crate::tokenizer::StopWords;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "lexidb.toml";

/// Engine configuration loaded from `lexidb.toml`.
///
/// # Example
///
/// ```toml
/// # Words removed from documents and queries before indexing
/// stop_words = ["and", "in", "on"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Words removed from documents and queries before indexing.
    /// Empty by default: every word is indexed.
    #[serde(default)]
    pub stop_words: Vec<String>,
}

impl SearchConfig {
    /// Parse a config from TOML text.
    ///
    /// Stop words are validated eagerly, so a bad list fails here instead of
    /// at engine construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML and
    /// [`Error::InvalidStopWord`] for a stop word with a control character.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SearchConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        StopWords::new(&config.stop_words)?;
        Ok(config)
    }

    /// Read and parse a config from a file path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed, and
    /// [`Error::InvalidStopWord`] for a stop word with a control character.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Serialize this config to TOML and write it to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            Error::Config(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# lexidb engine configuration
#
# Words removed from documents and queries before indexing.
# An empty list (the default) indexes every word.
stop_words = []
"#
    }
}
