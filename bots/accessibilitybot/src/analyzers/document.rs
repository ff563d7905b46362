// SPDX-License-Identifier: PMPL-1.0-or-later
//! Document-level flags
//!
//! Plain substring checks over the whole document: page language, viewport
//! meta, skip links and focus handling. They do not look at where the text
//! occurs, so a mention in a comment or script satisfies them.

use crate::analyzers::Check;
use crate::findings::Finding;

/// Document-wide substring checks
pub struct DocumentCheck;

impl Check for DocumentCheck {
    fn name(&self) -> &str {
        "Document Check"
    }

    fn description(&self) -> &str {
        "Looks for lang, viewport, skip links and focus management"
    }

    fn check(&self, html: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let lower = html.to_lowercase();

        if !html.contains("lang=") {
            findings.push(Finding::issue(
                "doc-missing-lang",
                "Missing lang attribute on html element",
            ));
        }

        if !html.contains("viewport") {
            findings.push(Finding::issue(
                "doc-missing-viewport",
                "Missing viewport meta tag",
            ));
        }

        if !lower.contains("skip") {
            findings.push(Finding::recommendation(
                "doc-skip-link",
                "Consider adding skip links for keyboard navigation",
            ));
        }

        if !lower.contains("focus") {
            findings.push(Finding::recommendation(
                "doc-focus-management",
                "Consider implementing proper focus management",
            ));
        }

        findings
    }
}
