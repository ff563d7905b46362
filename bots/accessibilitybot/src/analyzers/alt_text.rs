// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text check
//!
//! - Every `<img>` tag should carry an `alt` attribute somewhere in its tag text
//! - `alt=""` is legitimate for decorative images, but worth a second look

use crate::analyzers::Check;
use crate::findings::Finding;
use regex::Regex;
use std::sync::LazyLock;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<img[^>]*>").expect("valid regex"));

const EMPTY_ALT: &str = r#"alt="""#;

/// Check for images without alternative text
pub struct AltTextCheck;

impl Check for AltTextCheck {
    fn name(&self) -> &str {
        "Alt Text Check"
    }

    fn description(&self) -> &str {
        "Counts <img> tags without alt and images with empty alt text"
    }

    fn check(&self, html: &str) -> Vec<Finding> {
        let mut findings = Vec::new();

        let missing = IMG_TAG
            .find_iter(html)
            .filter(|m| !m.as_str().contains("alt="))
            .count();
        if missing > 0 {
            findings.push(Finding::issue(
                "img-missing-alt",
                format!("Found {} images without alt text", missing),
            ));
        }

        let empty = html.matches(EMPTY_ALT).count();
        if empty > 0 {
            findings.push(Finding::recommendation(
                "img-empty-alt",
                format!(
                    "Found {} images with empty alt text - verify these are decorative",
                    empty
                ),
            ));
        }

        findings
    }
}
