// SPDX-License-Identifier: PMPL-1.0-or-later
//! Baselinebot CLI

use anyhow::Context;
use baselinebot::cli::Cli;
use baselinebot::config::{load_config, Config};
use baselinebot::report::{generate_text_report, missing_document_report};
use baselinebot::scanner::{self, RunOutcome};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("baselinebot=debug")
    } else {
        EnvFilter::new("baselinebot=warn")
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
    if let Some(output) = cli.output {
        config.output_file = output;
    }

    let outcome = scanner::run(&cli.dir, &config)
        .with_context(|| format!("analyzing {}", cli.dir.display()))?;

    match outcome {
        RunOutcome::Completed(analysis) => {
            print!(
                "{}",
                generate_text_report(&analysis, &config.html_file, &config.output_file)
            );
        }
        RunOutcome::MissingDocument(path) => {
            print!("{}", missing_document_report(&path));
        }
    }

    Ok(())
}
