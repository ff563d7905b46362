// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for accessibilitybot

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// HTML document to analyze, relative to the working root
    #[serde(default = "default_html_file")]
    pub html_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_file: default_html_file(),
        }
    }
}

fn default_html_file() -> PathBuf {
    PathBuf::from("index.html")
}

/// Load configuration from a TOML file, falling back to defaults when absent
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccessibilityError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.html_file, PathBuf::from("index.html"));
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/accessibilitybot.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_toml_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("accessibilitybot.toml");
        std::fs::write(&path, "html_file = \"site/home.html\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.html_file, PathBuf::from("site/home.html"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "html_file = [").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, AccessibilityError::Config(_)));
    }
}
