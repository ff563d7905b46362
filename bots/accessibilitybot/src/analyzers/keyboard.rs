// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard navigation pass
//!
//! Runs separately from the document checks. It counts interactive elements
//! and looks at how `tabindex` is used:
//! - Interactive elements with no tabindex anywhere: verify the natural order
//! - Negative tabindex values remove elements from the tab sequence

use crate::findings::Finding;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Patterns whose match counts are summed into the interactive total.
/// An element matching more than one pattern is counted once per pattern.
static INTERACTIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"<button", r"<a[^>]+href", r"<input", r"<select", r"<textarea"]
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

static NEGATIVE_TABINDEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"tabindex=["']?-\d+["']?"#).expect("valid regex")
});

/// Result of the keyboard navigation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardReport {
    /// Buttons, links with href, inputs, selects and textareas
    pub interactive_elements: usize,
    /// Navigation findings
    pub issues: Vec<Finding>,
}

/// Count interactive elements and inspect tabindex usage
pub fn analyze_keyboard_navigation(html: &str) -> KeyboardReport {
    let interactive_elements = count_interactive_elements(html);
    let mut issues = Vec::new();

    let tabindex_count = html.matches("tabindex=").count();
    if tabindex_count == 0 && interactive_elements > 0 {
        issues.push(Finding::navigation(
            "kbd-no-tabindex",
            "No explicit tabindex found - ensure natural tab order is logical",
        ));
    }

    let negative = NEGATIVE_TABINDEX.find_iter(html).count();
    if negative > 0 {
        issues.push(Finding::navigation(
            "kbd-negative-tabindex",
            format!("Found {} negative tabindex values - use carefully", negative),
        ));
    }

    KeyboardReport {
        interactive_elements,
        issues,
    }
}

fn count_interactive_elements(html: &str) -> usize {
    INTERACTIVE_PATTERNS
        .iter()
        .map(|re| re.find_iter(html).count())
        .sum()
}
