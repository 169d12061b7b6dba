//! Scan configuration.
//!
//! The exclusion policy and the set of scannable extensions are data, not
//! walker logic, so deployments can extend them without touching the walk.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CodemapError, Result};

/// How many lines of a block the stored snippet keeps.
const DEFAULT_SNIPPET_LINES: usize = 10;

/// Configuration for a repository scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Entry base names skipped entirely (directories and files alike).
    /// Dot-prefixed names are always skipped, independent of this list.
    pub excluded_names: Vec<String>,
    /// File extensions handed to the file scanner. Everything else is a
    /// plain skip, not an error.
    pub source_extensions: Vec<String>,
    /// Upper bound on stored snippet length, in lines.
    pub snippet_lines: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded_names: vec![
                "__pycache__".to_string(),
                "node_modules".to_string(),
                ".git".to_string(),
                "__init__.py".to_string(),
            ],
            source_extensions: vec!["py".to_string()],
            snippet_lines: DEFAULT_SNIPPET_LINES,
        }
    }
}

impl ScanConfig {
    /// Load a config from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CodemapError::Config(e.to_string()))
    }

    /// Should this directory entry be skipped outright?
    pub fn is_excluded(&self, name: &str) -> bool {
        name.starts_with('.') || self.excluded_names.iter().any(|n| n == name)
    }

    /// Does this file name carry a scannable source extension?
    pub fn is_source_file(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.source_extensions.iter().any(|s| s == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_exclusions() {
        let config = ScanConfig::default();
        assert!(config.is_excluded("__pycache__"));
        assert!(config.is_excluded("node_modules"));
        assert!(config.is_excluded("__init__.py"));
        assert!(!config.is_excluded("main.py"));
    }

    #[test]
    fn test_dot_prefix_always_excluded() {
        let config = ScanConfig {
            excluded_names: vec![],
            ..ScanConfig::default()
        };
        assert!(config.is_excluded(".git"));
        assert!(config.is_excluded(".hidden"));
        assert!(config.is_excluded(".env"));
    }

    #[test]
    fn test_source_file_detection() {
        let config = ScanConfig::default();
        assert!(config.is_source_file("app.py"));
        assert!(!config.is_source_file("notes.txt"));
        assert!(!config.is_source_file("Makefile"));
        assert!(!config.is_source_file("py"));
    }

    #[test]
    fn test_load_partial_toml_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "excluded_names = [\"vendor\"]").unwrap();

        let config = ScanConfig::load(file.path()).unwrap();
        assert!(config.is_excluded("vendor"));
        assert!(!config.is_excluded("__pycache__"));
        assert_eq!(config.source_extensions, vec!["py".to_string()]);
        assert_eq!(config.snippet_lines, 10);
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "excluded_names = not-a-list").unwrap();

        let result = ScanConfig::load(file.path());
        assert!(matches!(result, Err(CodemapError::Config(_))));
    }
}
