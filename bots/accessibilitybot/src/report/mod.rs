// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report assembly and rendering.
//!
//! Supports two output formats:
//! - Text: the emoji-prefixed console report
//! - JSON: the same report as structured data

use crate::analyzers::{self, KeyboardReport};
use crate::findings::Finding;
use crate::metrics::SummaryMetrics;
use crate::score::{accessibility_score, Verdict, MAX_SCORE};
use serde::{Deserialize, Serialize};
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

/// Everything one run learns about a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub issues: Vec<Finding>,
    pub recommendations: Vec<Finding>,
    pub keyboard: KeyboardReport,
    pub metrics: SummaryMetrics,
    pub score: u32,
    pub verdict: Verdict,
}

impl AccessibilityReport {
    /// Run every check and the keyboard pass over a document
    pub fn analyze(html: &str) -> Self {
        let findings = analyzers::check_accessibility_issues(html);
        let keyboard = analyzers::analyze_keyboard_navigation(html);
        let metrics = SummaryMetrics::collect(html);
        let score = accessibility_score(findings.issues.len(), keyboard.issues.len());

        Self {
            issues: findings.issues,
            recommendations: findings.recommendations,
            keyboard,
            metrics,
            score,
            verdict: Verdict::from_score(score),
        }
    }
}

/// Generate a report in the requested format
pub fn generate_report(report: &AccessibilityReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(report),
        OutputFormat::Json => generate_json_report(report),
    }
}

fn header() -> String {
    format!("♿ Basic Accessibility Analysis\n{}\n", "=".repeat(RULE_WIDTH))
}

/// Text printed when the document to analyze does not exist
pub fn missing_document_report(html_file: &Path) -> String {
    format!("{}❌ {} not found\n", header(), html_file.display())
}

/// Generate the console report
fn generate_text_report(report: &AccessibilityReport) -> String {
    let mut output = header();

    output.push_str("🔍 Accessibility Issues Found:\n");
    if report.issues.is_empty() {
        output.push_str("  ✅ No major accessibility issues detected\n");
    }
    for issue in &report.issues {
        output.push_str(&format!("  ❌ {}\n", issue));
    }

    output.push_str("\n💡 Recommendations:\n");
    if report.recommendations.is_empty() {
        output.push_str("  ✅ No specific recommendations\n");
    }
    for rec in &report.recommendations {
        output.push_str(&format!("  💡 {}\n", rec));
    }

    output.push_str("\n⌨️ Keyboard Navigation Analysis:\n");
    output.push_str(&format!(
        "  ✅ Interactive elements found: {}\n",
        report.keyboard.interactive_elements
    ));
    if report.keyboard.issues.is_empty() {
        output.push_str("  ✅ No keyboard navigation issues detected\n");
    }
    for issue in &report.keyboard.issues {
        output.push_str(&format!("  ⚠️ {}\n", issue));
    }

    output.push_str("\n📊 Accessibility Metrics Summary:\n");
    output.push_str(&format!("  ✅ Alt text attributes: {}\n", report.metrics.alt_text_attributes));
    output.push_str(&format!("  ✅ Form labels: {}\n", report.metrics.form_labels));
    output.push_str(&format!("  ✅ Semantic HTML elements: {}\n", report.metrics.semantic_elements));

    output.push_str(&format!(
        "\n🎯 Estimated Accessibility Score: {}/{}\n",
        report.score, MAX_SCORE
    ));
    output.push_str(&format!("  {}\n", report.verdict.message()));

    output.push_str("\n✅ Basic accessibility analysis complete!\n");
    output.push_str("💡 For comprehensive testing, use tools like axe-core, WAVE, or Lighthouse\n");

    output
}

/// Generate JSON report
fn generate_json_report(report: &AccessibilityReport) -> String {
    match serde_json::to_string_pretty(report) {
        Ok(json) => json + "\n",
        Err(e) => format!("{{\"error\": \"Failed to serialize report: {}\"}}\n", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html lang="en"><head><meta name="viewport"></head>
<body><h2>Hi</h2><img src="a.png"><button>Go</button></body></html>"#;

    #[test]
    fn test_analyze_scores_findings() {
        let report = AccessibilityReport::analyze(PAGE);
        // missing alt + no h1 start
        assert_eq!(report.issues.len(), 2);
        // no tabindex with one button
        assert_eq!(report.keyboard.issues.len(), 1);
        assert_eq!(report.score, 75);
        assert_eq!(report.verdict, Verdict::Good);
    }

    #[test]
    fn test_text_report_sections() {
        let report = AccessibilityReport::analyze(PAGE);
        let text = generate_report(&report, OutputFormat::Text);

        assert!(text.starts_with("♿ Basic Accessibility Analysis\n=================================================="));
        assert!(text.contains("  ❌ Found 1 images without alt text\n"));
        assert!(text.contains("  💡 Consider adding skip links for keyboard navigation\n"));
        assert!(text.contains("  ✅ Interactive elements found: 1\n"));
        assert!(text.contains("  ⚠️ No explicit tabindex found - ensure natural tab order is logical\n"));
        assert!(text.contains("\n🎯 Estimated Accessibility Score: 75/100\n  🟡 Good accessibility, with room for improvement\n"));
        assert!(text.ends_with("💡 For comprehensive testing, use tools like axe-core, WAVE, or Lighthouse\n"));
    }

    #[test]
    fn test_text_report_placeholders() {
        let report = AccessibilityReport {
            issues: Vec::new(),
            recommendations: Vec::new(),
            keyboard: KeyboardReport::default(),
            metrics: SummaryMetrics::default(),
            score: 100,
            verdict: Verdict::Excellent,
        };
        let text = generate_report(&report, OutputFormat::Text);
        assert!(text.contains("  ✅ No major accessibility issues detected\n"));
        assert!(text.contains("  ✅ No specific recommendations\n"));
        assert!(text.contains("  ✅ No keyboard navigation issues detected\n"));
        assert!(text.contains("  🟢 Excellent accessibility foundation!\n"));
    }

    #[test]
    fn test_json_report() {
        let report = AccessibilityReport::analyze(PAGE);
        let json = generate_report(&report, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["score"], 75);
        assert_eq!(parsed["verdict"], "good");
        assert_eq!(parsed["issues"][0]["rule_id"], "img-missing-alt");
        assert_eq!(parsed["keyboard"]["interactive_elements"], 1);
    }

    #[test]
    fn test_missing_document_report() {
        let text = missing_document_report(Path::new("index.html"));
        assert!(text.ends_with("❌ index.html not found\n"));
    }
}
