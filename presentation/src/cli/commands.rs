//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for run results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with placement instructions
    Text,
    /// A single JSON document on stdout
    Json,
}

impl From<OutputFormat> for planqr_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => planqr_domain::OutputFormat::Text,
            OutputFormat::Json => planqr_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for planqr
#[derive(Parser, Debug)]
#[command(name = "planqr")]
#[command(author, version, about = "Verification QR codes for plan sheets")]
#[command(long_about = r#"
planqr looks up the latest version of a plan in the cockpit service and
writes a QR code pointing at that version's verification page. Place the
image in the plan's title block; anyone scanning a printout can then see
whether it is still current.

Without PROJECT_NUMBER and PLAN_TITLE you are prompted for both.

Configuration files are loaded from (in priority order):
1. PLANQR_* environment variables   e.g. PLANQR_SERVICE__BASE_URL
2. --config <path>                  Explicit config file
3. ./planqr.toml                    Project-level config
4. ~/.config/planqr/config.toml     Global config

Example:
  planqr 25-001 "Grundriss Erdgeschoss"
  planqr 25-001 "Schnitt A-A" --layout "A3 Plankopf" --output-dir ./qr
  planqr --check abc123
"#)]
pub struct Cli {
    /// Project number, e.g. 25-001
    pub project_number: Option<String>,

    /// Plan title, e.g. "Grundriss Erdgeschoss"
    pub plan_title: Option<String>,

    /// Layout the QR code is meant for (passed on to placement)
    #[arg(short, long, value_name = "HINT")]
    pub layout: Option<String>,

    /// Check whether a scanned version id is still current, then exit
    #[arg(long, value_name = "VERSION_ID", conflicts_with_all = ["project_number", "plan_title", "layout"])]
    pub check: Option<String>,

    /// Output format (default from config, else text)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory for the generated image
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Cockpit base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

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

impl Cli {
    /// Both positionals given: the query comes from the command line.
    pub fn query_args(&self) -> Option<(&str, &str)> {
        match (&self.project_number, &self.plan_title) {
            (Some(p), Some(t)) => Some((p.as_str(), t.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positionals_form_query() {
        let cli = Cli::parse_from(["planqr", "25-001", "Grundriss Erdgeschoss", "-vv"]);
        assert_eq!(cli.query_args(), Some(("25-001", "Grundriss Erdgeschoss")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_single_positional_means_prompt() {
        let cli = Cli::parse_from(["planqr", "25-001"]);
        assert!(cli.query_args().is_none());
    }

    #[test]
    fn test_check_conflicts_with_query() {
        let result = Cli::try_parse_from(["planqr", "25-001", "Schnitt", "--check", "abc123"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["planqr", "--timeout", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_output() {
        let cli = Cli::parse_from(["planqr", "--check", "abc123", "-o", "json"]);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.check.as_deref(), Some("abc123"));
    }
}
