// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy check
//!
//! Collects heading levels in document order. The outline should open with
//! an `<h1>` and never jump down more than one level at a time.

use crate::analyzers::Check;
use crate::findings::Finding;
use regex::Regex;
use std::sync::LazyLock;

static HEADING_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<h([1-6])").expect("valid regex"));

/// Heading order check
pub struct HeadingHierarchyCheck;

impl Check for HeadingHierarchyCheck {
    fn name(&self) -> &str {
        "Heading Hierarchy Check"
    }

    fn description(&self) -> &str {
        "Checks that headings start at h1 and do not skip levels"
    }

    fn check(&self, html: &str) -> Vec<Finding> {
        let levels = heading_levels(html);
        let mut findings = Vec::new();

        let Some(&first) = levels.first() else {
            return findings;
        };

        if first != 1 {
            findings.push(Finding::issue(
                "heading-no-h1-start",
                "Page doesn't start with h1 - heading hierarchy issue",
            ));
        }

        if levels.windows(2).any(|pair| pair[1] > pair[0] + 1) {
            findings.push(Finding::issue(
                "heading-skipped-level",
                "Skipped heading levels detected - hierarchy issue",
            ));
        }

        findings
    }
}

/// Heading levels in the order they appear
pub fn heading_levels(html: &str) -> Vec<u8> {
    HEADING_OPEN
        .captures_iter(html)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}
