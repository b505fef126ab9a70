//! Configuration file parser for the `podfeed` command.
//!
//! The config file is optional: a missing or empty file yields
//! `Config::default()`. Unknown keys are accepted by serde but logged as
//! warnings, since they are usually typos.
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::feed::ElementFilter;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// One element the parser should never look at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkipElement {
    /// Namespace URI; omitted means "in any namespace".
    #[serde(default)]
    pub namespace: Option<String>,
    pub name: String,
}

/// Top-level configuration.
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Namespace URIs whose elements are skipped without dispatch.
    pub skip_namespaces: Vec<String>,

    /// Individual elements skipped without dispatch.
    pub skip_elements: Vec<SkipElement>,

    /// Number of files parsed concurrently by the CLI.
    pub jobs: usize,

    /// Print unmapped-element statistics even without `--stats`.
    pub report_unmapped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_namespaces: Vec::new(),
            skip_elements: Vec::new(),
            jobs: 4,
            report_unmapped: false,
        }
    }
}

impl Config {
    /// SEC-014: Maximum config file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    /// Load configuration from a TOML file.
    ///
    /// - Missing file → `Ok(Config::default())`
    /// - Empty file → `Ok(Config::default())`
    /// - Invalid TOML → `Err(ConfigError::Parse)` with line number info
    /// - Unknown keys → accepted, logged as warning
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        // SEC-014: Check file size before reading
        match std::fs::metadata(path) {
            Ok(meta) if meta.len() > Self::MAX_FILE_SIZE => {
                return Err(ConfigError::TooLarge(format!(
                    "Config file is {} bytes (max {} bytes)",
                    meta.len(),
                    Self::MAX_FILE_SIZE
                )));
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
            Ok(_) => {}
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file disappeared, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::Io(e)),
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            let known_keys = ["skip_namespaces", "skip_elements", "jobs", "report_unmapped"];
            for key in raw.keys() {
                if !known_keys.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let config: Config = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            skip_namespaces = config.skip_namespaces.len(),
            skip_elements = config.skip_elements.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// The element filter described by the skip keys.
    pub fn filter(&self) -> SkipList {
        SkipList {
            namespaces: self.skip_namespaces.iter().map(String::as_str).map(fold).collect(),
            elements: self
                .skip_elements
                .iter()
                .map(|element| (element.namespace.as_deref().map(fold), element.name.clone()))
                .collect(),
        }
    }
}

fn fold(uri: &str) -> String {
    uri.trim().to_lowercase()
}

/// [`ElementFilter`] built from [`Config`].
///
/// Namespace URIs compare case-insensitively, local names exactly.
#[derive(Debug, Clone, Default)]
pub struct SkipList {
    namespaces: HashSet<String>,
    elements: HashSet<(Option<String>, String)>,
}

impl SkipList {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty() && self.elements.is_empty()
    }
}

impl ElementFilter for SkipList {
    fn skip(&self, namespace: Option<&str>, local_name: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        let folded = namespace.map(fold);
        if folded.as_ref().is_some_and(|ns| self.namespaces.contains(ns)) {
            return true;
        }
        self.elements.contains(&(None, local_name.to_string()))
            || (folded.is_some() && self.elements.contains(&(folded, local_name.to_string())))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(test: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("podfeed_config_test_{test}"));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.skip_namespaces.is_empty());
        assert!(config.skip_elements.is_empty());
        assert_eq!(config.jobs, 4);
        assert!(!config.report_unmapped);
        assert!(config.filter().is_empty());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let path = Path::new("/tmp/podfeed_test_nonexistent_config.toml");
        let config = Config::load(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_file_returns_default() {
        let path = write_config("empty", "   \n  \n  ");
        let config = Config::load(&path).unwrap();
        assert_eq!(config, Config::default());
        cleanup(&path);
    }

    #[test]
    fn test_full_config() {
        let path = write_config(
            "full",
            r#"
skip_namespaces = ["http://search.yahoo.com/mrss/"]
jobs = 8
report_unmapped = true

[[skip_elements]]
name = "docs"

[[skip_elements]]
namespace = "http://www.itunes.com/dtds/podcast-1.0.dtd"
name = "block"
"#,
        );

        let config = Config::load(&path).unwrap();
        assert_eq!(config.jobs, 8);
        assert!(config.report_unmapped);
        assert_eq!(config.skip_namespaces.len(), 1);
        assert_eq!(
            config.skip_elements[1],
            SkipElement {
                namespace: Some("http://www.itunes.com/dtds/podcast-1.0.dtd".to_string()),
                name: "block".to_string(),
            }
        );
        cleanup(&path);
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing() {
        let path = write_config("partial", "jobs = 2\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.jobs, 2);
        assert!(config.skip_namespaces.is_empty());
        cleanup(&path);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let path = write_config("invalid", "this is not [valid toml");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Invalid TOML"));
        cleanup(&path);
    }

    #[test]
    fn test_wrong_type_returns_error() {
        let path = write_config("wrongtype", "jobs = \"many\"\n");
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
        cleanup(&path);
    }

    #[test]
    fn test_unknown_keys_accepted() {
        let path = write_config("unknown", "jobs = 3\ntotally_fake_key = 1\n");
        assert_eq!(Config::load(&path).unwrap().jobs, 3);
        cleanup(&path);
    }

    // SEC-014: File size limit
    #[test]
    fn test_too_large_file_rejected() {
        let path = write_config("too_large", &"#".repeat(1_048_577));
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::TooLarge(_)));
        assert!(err.to_string().contains("too large"));
        cleanup(&path);
    }

    #[test]
    fn test_skip_list_matching() {
        let config = Config {
            skip_namespaces: vec!["HTTP://SEARCH.YAHOO.COM/MRSS/ ".to_string()],
            skip_elements: vec![
                SkipElement {
                    namespace: None,
                    name: "docs".to_string(),
                },
                SkipElement {
                    namespace: Some("http://www.itunes.com/dtds/podcast-1.0.dtd".to_string()),
                    name: "block".to_string(),
                },
            ],
            ..Config::default()
        };
        let filter = config.filter();

        assert!(filter.skip(Some("http://search.yahoo.com/mrss/"), "content"));
        assert!(filter.skip(None, "docs"));
        assert!(filter.skip(Some("urn:any"), "docs"));
        assert!(filter.skip(Some("http://www.itunes.com/dtds/podcast-1.0.dtd"), "block"));
        assert!(!filter.skip(None, "block"));
        assert!(!filter.skip(Some("http://www.itunes.com/dtds/podcast-1.0.dtd"), "explicit"));
    }
}
