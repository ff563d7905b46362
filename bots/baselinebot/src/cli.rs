// SPDX-License-Identifier: PMPL-1.0-or-later
//! Command-line arguments for baselinebot.

use clap::Parser;
use std::path::PathBuf;

/// Website baseline analyzer
#[derive(Parser, Debug)]
#[command(name = "baselinebot")]
#[command(version)]
#[command(about = "Structural and performance baseline of index.html and its assets")]
pub struct Cli {
    /// Working root containing index.html and assets/
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON output file, relative to the working root
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
