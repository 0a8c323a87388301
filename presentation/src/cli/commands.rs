//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for evaluation results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with every finding and status
    Full,
    /// Per-team one-line summary
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for hiring-panel
#[derive(Parser, Debug)]
#[command(name = "hiring-panel")]
#[command(author, version, about = "Applicant evaluation through structured multi-agent debate")]
#[command(long_about = r#"
hiring-panel evaluates a job applicant by running two independent debates:
a strengths team and a weaknesses team. In each team, two proposers
(personal and experience dimension) extract findings from the applicant
summary, a challenger argues against them, and a coordinator drives the
exchange until the challenger accepts every proposal or the turn budget
runs out.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./panel.toml        Project-level config
3. ~/.config/hiring-panel/config.toml   Global config

Example:
  hiring-panel "Ten years as sous-chef, led a brigade of eight."
  hiring-panel --summary-file applicant.txt --output json
  hiring-panel --budget 6 --timeout-secs 60 "Line cook, 3 years."
"#)]
pub struct Cli {
    /// The applicant summary to evaluate (or use --summary-file)
    pub summary: Option<String>,

    /// Read the applicant summary from a file
    #[arg(long, value_name = "PATH")]
    pub summary_file: Option<PathBuf>,

    /// Model CLI command used for generation calls
    #[arg(long, value_name = "COMMAND")]
    pub model_command: Option<String>,

    /// Turn budget per team session
    #[arg(long, value_name = "N")]
    pub budget: Option<usize>,

    /// Retries per turn after malformed output or timeout
    #[arg(long, value_name = "N")]
    pub max_retries: Option<usize>,

    /// Timeout in seconds for a single generation call
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_summary() {
        let cli = Cli::parse_from(["hiring-panel", "Ten years on the line."]);
        assert_eq!(cli.summary.as_deref(), Some("Ten years on the line."));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parses_overrides() {
        let cli = Cli::parse_from([
            "hiring-panel",
            "--budget",
            "6",
            "--timeout-secs",
            "30",
            "--output",
            "json",
            "-vv",
            "summary",
        ]);
        assert_eq!(cli.budget, Some(6));
        assert_eq!(cli.timeout_secs, Some(30));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.output, OutputFormat::Json));
    }
}
