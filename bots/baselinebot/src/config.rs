// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for baselinebot

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// HTML document to analyze, relative to the working root
    #[serde(default = "default_html_file")]
    pub html_file: PathBuf,

    /// Assets directory to walk, relative to the working root
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Where the metrics document is written, relative to the working root
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Optimization suggestion thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Limits above which an optimization opportunity is reported
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// External resources referenced by the page
    #[serde(default = "default_max_external_resources")]
    pub max_external_resources: usize,

    /// Total assets size in KB
    #[serde(default = "default_max_assets_kb")]
    pub max_assets_kb: f64,

    /// Script tags referenced by the page
    #[serde(default = "default_max_scripts")]
    pub max_scripts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_file: default_html_file(),
            assets_dir: default_assets_dir(),
            output_file: default_output_file(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_external_resources: default_max_external_resources(),
            max_assets_kb: default_max_assets_kb(),
            max_scripts: default_max_scripts(),
        }
    }
}

fn default_html_file() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("baseline-analysis.json")
}

fn default_max_external_resources() -> usize {
    3
}

fn default_max_assets_kb() -> f64 {
    1000.0
}

fn default_max_scripts() -> usize {
    5
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
