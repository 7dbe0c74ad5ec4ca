//! Search configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunables for [`Searcher`](super::Searcher).
///
/// Loadable from TOML; missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SearchConfig {
    /// Stop scanning siblings once a move reaches the best possible value
    /// for the side to move.
    early_exit: bool,

    /// Count expanded nodes and cut-offs.
    collect_stats: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            early_exit: true,
            collect_stats: true,
        }
    }
}

impl SearchConfig {
    /// Exhaustive search: every sibling is expanded.
    pub fn exhaustive() -> Self {
        Self::default().with_early_exit(false)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            early_exit = config.early_exit,
            collect_stats = config.collect_stats,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(*config.early_exit());
        assert!(*config.collect_stats());
        assert!(!*SearchConfig::exhaustive().early_exit());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SearchConfig::from_toml_str("early_exit = false\n").unwrap();
        assert!(!*config.early_exit());
        assert!(*config.collect_stats());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SearchConfig::from_toml_str("early_exit = \"sometimes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "collect_stats = false").unwrap();

        let config = SearchConfig::from_file(file.path()).unwrap();
        assert_eq!(config, SearchConfig::default().with_collect_stats(false));
    }

    #[test]
    fn test_missing_file() {
        let err = SearchConfig::from_file("/nonexistent/search.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }
}
