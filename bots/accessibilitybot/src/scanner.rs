// SPDX-License-Identifier: PMPL-1.0-or-later
//! Locates the document under the working root and runs the analysis.

use crate::config::Config;
use crate::error::Result;
use crate::report::AccessibilityReport;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The document was read and analyzed
    Analyzed(AccessibilityReport),
    /// The document does not exist; nothing else was done
    MissingDocument(PathBuf),
}

/// Scan the configured document below `root`
pub fn scan(root: &Path, config: &Config) -> Result<ScanOutcome> {
    let path = root.join(&config.html_file);

    if !path.exists() {
        info!("No document at {}", path.display());
        return Ok(ScanOutcome::MissingDocument(config.html_file.clone()));
    }

    scan_file(&path).map(ScanOutcome::Analyzed)
}

/// Analyze a single HTML file
pub fn scan_file(path: &Path) -> Result<AccessibilityReport> {
    info!("Analyzing {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let report = AccessibilityReport::analyze(&content);
    info!(
        issues = report.issues.len(),
        recommendations = report.recommendations.len(),
        score = report.score,
        "Analysis complete"
    );
    Ok(report)
}
