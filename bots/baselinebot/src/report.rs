// SPDX-License-Identifier: PMPL-1.0-or-later
//! Baseline analysis document and its console rendering.

use crate::assets::{AssetsInfo, CONSOLE_IMAGE_EXTENSIONS};
use crate::error::Result;
use crate::html::HtmlMetrics;
use crate::performance::PerformanceReport;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 50;

/// Full metrics document, serialized to the JSON output file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineAnalysis {
    pub html_metrics: HtmlMetrics,
    pub assets_info: AssetsInfo,
    pub performance_report: PerformanceReport,
}

/// Serialize with two-space indentation
pub fn to_json(analysis: &BaselineAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Write the document, replacing whatever was at `path`
pub fn write_analysis(analysis: &BaselineAnalysis, path: &Path) -> Result<()> {
    let json = to_json(analysis)?;
    std::fs::write(path, json)?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn header() -> String {
    format!("🔍 Website Baseline Analyzer\n{}\n", "=".repeat(RULE_WIDTH))
}

/// Text printed when the document to analyze does not exist
pub fn missing_document_report(html_file: &Path) -> String {
    format!("{}❌ {} not found\n", header(), html_file.display())
}

/// Console report for a completed analysis
pub fn generate_text_report(
    analysis: &BaselineAnalysis,
    html_file: &Path,
    output_file: &Path,
) -> String {
    let html = &analysis.html_metrics;
    let assets = &analysis.assets_info;
    let mut output = header();

    output.push_str(&format!("📄 Analyzing {}...\n", html_file.display()));
    output.push_str(&format!("  ✅ File size: {:.2} KB\n", html.file_size as f64 / 1024.0));
    output.push_str(&format!("  ✅ Lines of code: {}\n", html.line_count));
    output.push_str(&format!("  ✅ External resources: {}\n", html.external_resources.len()));
    output.push_str(&format!("  ✅ Local scripts: {}\n", html.local_scripts()));
    output.push_str(&format!("  ✅ Images referenced: {}\n", html.images.len()));

    output.push_str("\n📁 Analyzing assets directory...\n");
    output.push_str(&format!("  ✅ Total assets size: {:.2} KB\n", assets.total_size as f64 / 1024.0));
    output.push_str(&format!("  ✅ CSS files: {}\n", assets.count(".css")));
    output.push_str(&format!("  ✅ JS files: {}\n", assets.count(".js")));
    output.push_str(&format!("  ✅ Image files: {}\n", assets.count_any(CONSOLE_IMAGE_EXTENSIONS)));

    output.push_str("\n📊 Generating detailed report...\n");
    output.push_str(&format!("  ✅ Detailed analysis saved to {}\n", output_file.display()));

    let features = &html.accessibility_features;
    output.push_str("\n♿ Accessibility Features Found:\n");
    output.push_str(&format!("  ✅ Alt text attributes: {}\n", features.alt_text_count));
    output.push_str(&format!("  ✅ ARIA attributes: {}\n", features.aria_labels));
    output.push_str(&format!("  ✅ Semantic elements: {}\n", features.semantic_elements));
    output.push_str(&format!("  ✅ Form labels: {}\n", features.form_labels));

    output.push_str("\n🌐 External Dependencies:\n");
    for resource in &html.external_resources {
        output.push_str(&format!("  📡 {}\n", resource));
    }

    let opportunities = &analysis.performance_report.optimization_opportunities;
    if !opportunities.is_empty() {
        output.push_str("\n⚡ Optimization Opportunities:\n");
        for opportunity in opportunities {
            output.push_str(&format!("  💡 {}\n", opportunity));
        }
    }

    output.push_str("\n✅ Baseline analysis complete!\n");
    output.push_str("📄 See 'audit-baseline.md' for detailed report\n");
    output.push_str(&format!("📊 See '{}' for raw metrics\n", output_file.display()));

    output
}
