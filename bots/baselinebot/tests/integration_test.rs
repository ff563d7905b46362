// SPDX-License-Identifier: PMPL-1.0-or-later
//! Integration tests for baselinebot

use baselinebot::config::Config;
use baselinebot::report::generate_text_report;
use baselinebot::scanner::{self, RunOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="stylesheet" href="http://cdn.example/a.css">
  <link rel="stylesheet" href="assets/css/site.css">
  <script src="local.js"></script>
</head>
<body>
  <header><nav aria-label="Primary"></nav></header>
  <main>
    <img src="assets/img/b.png" alt="Logo">
    <label for="q">Search</label><input id="q">
  </main>
</body>
</html>
"#;

/// Create a site root with index.html and an assets tree
fn create_site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(root.join("index.html"), PAGE).unwrap();
    fs::create_dir_all(root.join("assets/css")).unwrap();
    fs::create_dir_all(root.join("assets/img")).unwrap();
    fs::write(root.join("assets/css/a.css"), vec![b'a'; 100]).unwrap();
    fs::write(root.join("assets/img/b.png"), vec![0u8; 2000]).unwrap();

    dir
}

fn completed(outcome: RunOutcome) -> baselinebot::report::BaselineAnalysis {
    match outcome {
        RunOutcome::Completed(analysis) => analysis,
        other => panic!("expected completed run, got {:?}", other),
    }
}

#[test]
fn test_external_link_and_local_script() {
    let site = create_site();
    let analysis = completed(scanner::run(site.path(), &Config::default()).unwrap());

    assert_eq!(
        analysis.html_metrics.external_resources,
        vec!["http://cdn.example/a.css"]
    );
    assert_eq!(analysis.performance_report.html_analysis.local_scripts, 1);
    assert_eq!(analysis.performance_report.html_analysis.local_stylesheets, 1);
    assert_eq!(analysis.html_metrics.meta_tags.len(), 2);
}

#[test]
fn test_assets_sizes() {
    let site = create_site();
    let analysis = completed(scanner::run(site.path(), &Config::default()).unwrap());

    assert_eq!(analysis.assets_info.total_size, 2100);
    let png = &analysis.assets_info.file_types[".png"];
    assert_eq!(png.len(), 1);
    assert_eq!(png[0].size_kb, 1.95);
    assert_eq!(png[0].path, "assets/img/b.png");
    assert_eq!(analysis.performance_report.assets_analysis.image_files, 1);
    assert_eq!(analysis.performance_report.assets_analysis.css_files, 1);
}

#[test]
fn test_json_document_written() {
    let site = create_site();
    scanner::run(site.path(), &Config::default()).unwrap();

    let json = fs::read_to_string(site.path().join("baseline-analysis.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["assets_info"]["total_size"], 2100);
    assert_eq!(parsed["assets_info"]["file_types"][".png"][0]["size_kb"], 1.95);
    assert_eq!(parsed["html_metrics"]["accessibility_features"]["aria_labels"], 1);
    assert_eq!(parsed["html_metrics"]["accessibility_features"]["semantic_elements"], 3);
    assert_eq!(
        parsed["performance_report"]["external_dependencies"][0],
        "http://cdn.example/a.css"
    );
    assert!(json.contains("\n  \"assets_info\": {\n    \"total_size\": 2100,"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let site = create_site();
    let output = site.path().join("baseline-analysis.json");

    scanner::run(site.path(), &Config::default()).unwrap();
    let first = fs::read(&output).unwrap();
    scanner::run(site.path(), &Config::default()).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_previous_output_overwritten() {
    let site = create_site();
    let output = site.path().join("baseline-analysis.json");
    fs::write(&output, "{\"stale\": true, \"padding\": \"".to_string() + &"x".repeat(100_000) + "\"}").unwrap();

    scanner::run(site.path(), &Config::default()).unwrap();
    let json = fs::read_to_string(&output).unwrap();
    assert!(!json.contains("stale"));
    serde_json::from_str::<serde_json::Value>(&json).expect("valid JSON after overwrite");
}

#[test]
fn test_missing_index_html() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();

    let outcome = scanner::run(dir.path(), &Config::default()).unwrap();
    assert_eq!(outcome, RunOutcome::MissingDocument(PathBuf::from("index.html")));
    assert!(!dir.path().join("baseline-analysis.json").exists());
}

#[test]
fn test_missing_assets_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), PAGE).unwrap();

    let analysis = completed(scanner::run(dir.path(), &Config::default()).unwrap());
    assert_eq!(analysis.assets_info.total_size, 0);
    assert!(analysis.assets_info.file_types.is_empty());
    assert_eq!(analysis.performance_report.assets_analysis.total_size_kb, 0.0);
}

#[test]
fn test_custom_output_file() {
    let site = create_site();
    let config = Config {
        output_file: PathBuf::from("snapshot.json"),
        ..Config::default()
    };

    scanner::run(site.path(), &config).unwrap();
    assert!(site.path().join("snapshot.json").exists());
    assert!(!site.path().join("baseline-analysis.json").exists());
}

#[test]
fn test_optimization_opportunities() {
    let dir = TempDir::new().unwrap();
    let scripts: String = (0..6)
        .map(|i| format!("<script src=\"https://cdn.example/{}.js\"></script>\n", i))
        .collect();
    fs::write(dir.path().join("index.html"), scripts).unwrap();

    let analysis = completed(scanner::run(dir.path(), &Config::default()).unwrap());
    assert_eq!(
        analysis.performance_report.optimization_opportunities,
        vec![
            "Consider reducing external dependencies",
            "Many script files - consider bundling",
        ]
    );

    let text = generate_text_report(&analysis, Path::new("index.html"), Path::new("baseline-analysis.json"));
    assert!(text.contains("\n⚡ Optimization Opportunities:\n  💡 Consider reducing external dependencies\n"));
}

#[test]
fn test_text_report_golden() {
    let site = create_site();
    let analysis = completed(scanner::run(site.path(), &Config::default()).unwrap());
    let size = PAGE.len() as f64 / 1024.0;

    let expected = format!(
        "\
🔍 Website Baseline Analyzer
==================================================
📄 Analyzing index.html...
  ✅ File size: {:.2} KB
  ✅ Lines of code: 17
  ✅ External resources: 1
  ✅ Local scripts: 1
  ✅ Images referenced: 1

📁 Analyzing assets directory...
  ✅ Total assets size: 2.05 KB
  ✅ CSS files: 1
  ✅ JS files: 0
  ✅ Image files: 1

📊 Generating detailed report...
  ✅ Detailed analysis saved to baseline-analysis.json

♿ Accessibility Features Found:
  ✅ Alt text attributes: 1
  ✅ ARIA attributes: 1
  ✅ Semantic elements: 3
  ✅ Form labels: 1

🌐 External Dependencies:
  📡 http://cdn.example/a.css

✅ Baseline analysis complete!
📄 See 'audit-baseline.md' for detailed report
📊 See 'baseline-analysis.json' for raw metrics
",
        size
    );

    let text = generate_text_report(&analysis, Path::new("index.html"), Path::new("baseline-analysis.json"));
    assert_eq!(text, expected);
}

#[test]
fn test_crlf_document_counts_like_lf() {
    let crlf = TempDir::new().unwrap();
    fs::write(crlf.path().join("index.html"), "<p>a</p>\r\n<p>b</p>\x0c<p>c</p>\r\n").unwrap();
    let lf = TempDir::new().unwrap();
    fs::write(lf.path().join("index.html"), "<p>a</p>\n<p>b</p>\x0c<p>c</p>\n").unwrap();

    let crlf = completed(scanner::run(crlf.path(), &Config::default()).unwrap());
    let lf = completed(scanner::run(lf.path(), &Config::default()).unwrap());

    assert_eq!(crlf.html_metrics.file_size, 29);
    assert_eq!(crlf.html_metrics.char_count, 27);
    assert_eq!(crlf.html_metrics.line_count, 3);
    assert_eq!(crlf.html_metrics.char_count, lf.html_metrics.char_count);
    assert_eq!(crlf.html_metrics.line_count, lf.html_metrics.line_count);
}
