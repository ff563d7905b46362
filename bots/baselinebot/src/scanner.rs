// SPDX-License-Identifier: PMPL-1.0-or-later
//! Runs the baseline analysis below a working root and persists the result.

use crate::assets::analyze_assets_directory;
use crate::config::Config;
use crate::error::Result;
use crate::html::analyze_html_file;
use crate::performance::generate_performance_report;
use crate::report::{write_analysis, BaselineAnalysis};
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one run
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Analysis finished and the JSON document was written
    Completed(BaselineAnalysis),
    /// The HTML document does not exist; nothing was written
    MissingDocument(PathBuf),
}

/// Analyze the page and assets without writing anything
pub fn analyze(root: &Path, config: &Config) -> Result<Option<BaselineAnalysis>> {
    let html_path = root.join(&config.html_file);
    if !html_path.exists() {
        info!("No document at {}", html_path.display());
        return Ok(None);
    }

    info!("Analyzing {}", html_path.display());
    let html_metrics = analyze_html_file(&html_path)?;
    let assets_info = analyze_assets_directory(root, &config.assets_dir)?;
    let performance_report =
        generate_performance_report(&html_metrics, &assets_info, &config.thresholds);

    Ok(Some(BaselineAnalysis {
        html_metrics,
        assets_info,
        performance_report,
    }))
}

/// Analyze and write the JSON document to the configured output file
pub fn run(root: &Path, config: &Config) -> Result<RunOutcome> {
    match analyze(root, config)? {
        Some(analysis) => {
            write_analysis(&analysis, &root.join(&config.output_file))?;
            Ok(RunOutcome::Completed(analysis))
        }
        None => Ok(RunOutcome::MissingDocument(config.html_file.clone())),
    }
}
