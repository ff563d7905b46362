// SPDX-License-Identifier: PMPL-1.0-or-later
//! Raw accessibility counters printed in the metrics summary.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ALT_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alt=["'][^"']*["']"#).expect("valid regex"));

static SEMANTIC_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(header|nav|main|section|article|aside|footer|h[1-6])").expect("valid regex")
});

/// Counts of accessibility-related markup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub alt_text_attributes: usize,
    pub form_labels: usize,
    pub semantic_elements: usize,
}

impl SummaryMetrics {
    pub fn collect(html: &str) -> Self {
        Self {
            alt_text_attributes: ALT_ATTRIBUTE.find_iter(html).count(),
            form_labels: html.matches("<label").count(),
            semantic_elements: SEMANTIC_ELEMENT.find_iter(html).count(),
        }
    }
}
