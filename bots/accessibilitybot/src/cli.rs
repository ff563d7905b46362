// SPDX-License-Identifier: PMPL-1.0-or-later
//! Command-line arguments for accessibilitybot.
//!
//! Every flag is optional; with none the tool analyzes `./index.html` and
//! prints the text report.

use clap::Parser;
use std::path::PathBuf;

/// Basic accessibility analysis of index.html
#[derive(Parser, Debug)]
#[command(name = "accessibilitybot")]
#[command(version)]
#[command(about = "Heuristic accessibility analysis of a single HTML page")]
pub struct Cli {
    /// Working root containing the HTML document
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// HTML document to analyze, relative to the working root
    #[arg(long)]
    pub html_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: FormatArg,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
}

impl From<FormatArg> for crate::report::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => crate::report::OutputFormat::Text,
            FormatArg::Json => crate::report::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["accessibilitybot"]);
        assert_eq!(cli.dir, PathBuf::from("."));
        assert_eq!(cli.format, FormatArg::Text);
        assert!(cli.config.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_json_to_file() {
        let cli = Cli::parse_from(["accessibilitybot", "--format", "json", "-o", "a11y.json"]);
        assert_eq!(cli.format, FormatArg::Json);
        assert_eq!(cli.output, Some(PathBuf::from("a11y.json")));
    }

    #[test]
    fn test_html_file_override() {
        let cli = Cli::parse_from(["accessibilitybot", "--html-file", "site/home.html"]);
        assert_eq!(cli.html_file, Some(PathBuf::from("site/home.html")));
        assert!(Cli::parse_from(["accessibilitybot"]).html_file.is_none());
    }
}
