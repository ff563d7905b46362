// SPDX-License-Identifier: PMPL-1.0-or-later
//! Performance report derived from the HTML and assets metrics.

use crate::assets::{size_kb, AssetsInfo};
use crate::config::Thresholds;
use crate::html::HtmlMetrics;
use serde::{Deserialize, Serialize};

/// Page-level summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlAnalysis {
    pub file_size_kb: f64,
    pub line_count: usize,
    pub external_dependencies: usize,
    pub local_scripts: usize,
    pub local_stylesheets: usize,
    pub total_images: usize,
}

/// Assets-level summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsAnalysis {
    pub total_size_kb: f64,
    pub css_files: usize,
    pub js_files: usize,
    pub image_files: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub html_analysis: HtmlAnalysis,
    pub assets_analysis: AssetsAnalysis,
    pub external_dependencies: Vec<String>,
    pub optimization_opportunities: Vec<String>,
}

/// Combine page and assets metrics and collect optimization suggestions
pub fn generate_performance_report(
    html: &HtmlMetrics,
    assets: &AssetsInfo,
    thresholds: &Thresholds,
) -> PerformanceReport {
    let html_analysis = HtmlAnalysis {
        file_size_kb: size_kb(html.file_size),
        line_count: html.line_count,
        external_dependencies: html.external_resources.len(),
        local_scripts: html.local_scripts(),
        local_stylesheets: html.local_stylesheets(),
        total_images: html.images.len(),
    };

    let assets_analysis = AssetsAnalysis {
        total_size_kb: size_kb(assets.total_size),
        css_files: assets.count(".css"),
        js_files: assets.count(".js"),
        image_files: assets.image_files(),
    };

    let mut optimization_opportunities = Vec::new();

    if html.external_resources.len() > thresholds.max_external_resources {
        optimization_opportunities.push("Consider reducing external dependencies".to_string());
    }

    if assets_analysis.total_size_kb > thresholds.max_assets_kb {
        optimization_opportunities
            .push("Assets directory is large, consider optimization".to_string());
    }

    if html.scripts.len() > thresholds.max_scripts {
        optimization_opportunities.push("Many script files - consider bundling".to_string());
    }

    PerformanceReport {
        html_analysis,
        assets_analysis,
        external_dependencies: html.external_resources.clone(),
        optimization_opportunities,
    }
}
