// SPDX-License-Identifier: PMPL-1.0-or-later
//! HTML structure metrics.
//!
//! Referenced resources are pulled out of `<link>`, `<script>` and `<img>`
//! tags with regular expressions; anything starting with `http` is treated
//! as an external resource. Meta tags are kept verbatim.

use crate::error::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static LINK_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<link[^>]+href=["']([^"']+)["'][^>]*>"#).expect("valid regex")
});

static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<script[^>]+src=["']([^"']+)["'][^>]*>"#).expect("valid regex")
});

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<img[^>]+src=["']([^"']+)["'][^>]*>"#).expect("valid regex")
});

static META_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<meta[^>]+>").expect("valid regex"));

static ALT_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"alt=["'][^"']*["']"#).expect("valid regex"));

static ARIA_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"aria-[a-zA-Z-]+=["'][^"']*["']"#).expect("valid regex")
});

static SEMANTIC_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(header|nav|main|section|article|aside|footer)").expect("valid regex")
});

static LABEL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<label[^>]*>").expect("valid regex"));

/// Structural metrics of one HTML document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HtmlMetrics {
    /// Size on disk in bytes
    pub file_size: u64,
    pub line_count: usize,
    /// Unicode scalar values
    pub char_count: usize,
    /// Stylesheet and script references starting with `http`
    pub external_resources: Vec<String>,
    pub images: Vec<String>,
    pub scripts: Vec<String>,
    /// Every `<link href>`, not only `rel="stylesheet"`
    pub stylesheets: Vec<String>,
    pub meta_tags: Vec<String>,
    pub accessibility_features: AccessibilityFeatures,
}

/// Accessibility markup counts, facts only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityFeatures {
    pub alt_text_count: usize,
    pub aria_labels: usize,
    pub semantic_elements: usize,
    pub form_labels: usize,
}

impl HtmlMetrics {
    /// Scripts served from the same origin
    pub fn local_scripts(&self) -> usize {
        self.scripts.iter().filter(|s| !is_external(s)).count()
    }

    /// Stylesheets served from the same origin
    pub fn local_stylesheets(&self) -> usize {
        self.stylesheets.iter().filter(|s| !is_external(s)).count()
    }
}

/// Whether a referenced path is fetched off-origin
pub fn is_external(reference: &str) -> bool {
    reference.starts_with("http")
}

/// Read and analyze an HTML file
pub fn analyze_html_file(path: &Path) -> Result<HtmlMetrics> {
    let content = std::fs::read_to_string(path)?;
    let file_size = std::fs::metadata(path)?.len();
    let metrics = analyze_html(&content, file_size);

    debug!(
        file = %path.display(),
        external = metrics.external_resources.len(),
        scripts = metrics.scripts.len(),
        images = metrics.images.len(),
        "HTML analyzed"
    );
    Ok(metrics)
}

/// Extract metrics from document text
///
/// Line endings are folded to `\n` first, so a CRLF file reports the same
/// `char_count` as its LF twin.
pub fn analyze_html(content: &str, file_size: u64) -> HtmlMetrics {
    let content = normalize_newlines(content);
    let content = content.as_ref();
    let mut metrics = HtmlMetrics {
        file_size,
        line_count: count_lines(content),
        char_count: content.chars().count(),
        ..HtmlMetrics::default()
    };

    for caps in LINK_HREF.captures_iter(content) {
        let href = caps[1].to_string();
        if is_external(&href) {
            metrics.external_resources.push(href.clone());
        }
        metrics.stylesheets.push(href);
    }

    for caps in SCRIPT_SRC.captures_iter(content) {
        let src = caps[1].to_string();
        if is_external(&src) {
            metrics.external_resources.push(src.clone());
        }
        metrics.scripts.push(src);
    }

    metrics.images = IMG_SRC
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect();

    metrics.meta_tags = META_TAG
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect();

    metrics.accessibility_features = AccessibilityFeatures {
        alt_text_count: ALT_ATTRIBUTE.find_iter(content).count(),
        aria_labels: ARIA_ATTRIBUTE.find_iter(content).count(),
        semantic_elements: SEMANTIC_ELEMENT.find_iter(content).count(),
        form_labels: LABEL_TAG.find_iter(content).count(),
    };

    metrics
}

/// Rewrite `\r\n` and lone `\r` as `\n`
pub fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if !content.contains('\r') {
        return Cow::Borrowed(content);
    }
    Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Characters that end a line besides `\r`
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Count lines
///
/// `\r\n` and every Unicode line boundary (`\n`, `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL, LS and PS) end a line. A
/// final terminator does not open an extra empty line.
pub fn count_lines(content: &str) -> usize {
    let mut lines = 0;
    let mut at_line_start = true;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            lines += 1;
            at_line_start = true;
        } else if is_line_break(c) {
            lines += 1;
            at_line_start = true;
        } else {
            at_line_start = false;
        }
    }

    if !at_line_start {
        lines += 1;
    }
    lines
}
