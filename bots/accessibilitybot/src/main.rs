// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibilitybot CLI

use accessibilitybot::cli::Cli;
use accessibilitybot::config::{load_config, Config};
use accessibilitybot::report::{generate_report, missing_document_report};
use accessibilitybot::scanner::{self, ScanOutcome};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("accessibilitybot=debug")
    } else {
        EnvFilter::new("accessibilitybot=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match cli.config {
        Some(ref path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(html_file) = cli.html_file {
        config.html_file = html_file;
    }

    let report = match scanner::scan(&cli.dir, &config)? {
        ScanOutcome::Analyzed(report) => report,
        ScanOutcome::MissingDocument(path) => {
            print!("{}", missing_document_report(&path));
            return Ok(());
        }
    };

    let rendered = generate_report(&report, cli.format.into());
    write_output(&rendered, cli.output.as_deref())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)
                .with_context(|| format!("writing report to {}", p.display()))?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
