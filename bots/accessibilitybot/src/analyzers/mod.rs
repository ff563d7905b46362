// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heuristic accessibility checks.
//!
//! Each check looks at the raw document text with regular expressions and
//! contributes at most one finding per rule. Checks are independent; the
//! order they run in only fixes the order of lines in the report.

pub mod alt_text;
pub mod contrast;
pub mod document;
pub mod forms;
pub mod keyboard;
pub mod semantic;

use crate::findings::{Finding, FindingSet};
use tracing::debug;

pub use keyboard::{analyze_keyboard_navigation, KeyboardReport};

/// Trait implemented by all document checks
pub trait Check: Send + Sync {
    /// Human-readable name of this check
    fn name(&self) -> &str;

    /// Short description of what this check looks for
    fn description(&self) -> &str;

    /// Inspect the document text and return findings
    fn check(&self, html: &str) -> Vec<Finding>;
}

/// Checks in report order
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(alt_text::AltTextCheck),
        Box::new(forms::FormLabelCheck),
        Box::new(semantic::HeadingHierarchyCheck),
        Box::new(document::DocumentCheck),
        Box::new(contrast::ContrastCheck),
    ]
}

/// Classify a document into issues and recommendations
pub fn check_accessibility_issues(html: &str) -> FindingSet {
    let mut findings = FindingSet::new();

    for check in all_checks() {
        let found = check.check(html);
        debug!(check = check.name(), count = found.len(), "check complete");
        for finding in found {
            findings.add(finding);
        }
    }

    findings
}
