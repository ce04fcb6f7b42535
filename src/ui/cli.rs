// Command-line interface definitions and parsing for resumeboard

use crate::config::CliConfig;
use crate::core::constants::{output_formats, report_formats};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // Input
    /// Analysis result JSON written by an analysis engine (default: built-in sample)
    #[arg(short = 'i', long, value_name = "FILE", help_heading = "Input")]
    pub input: Option<String>,

    // Output & Verbosity
    /// Suppress terminal output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Reports
    /// Generate HTML dashboard
    #[arg(long, value_name = "PATH", help_heading = "Reports")]
    pub html_dashboard: Option<String>,

    /// Write an exported report
    #[arg(long, value_name = "PATH", help_heading = "Reports")]
    pub report: Option<String>,

    /// Exported report format
    #[arg(long, value_name = "FORMAT", value_parser = report_formats::ALL, help_heading = "Reports")]
    pub report_format: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments directly to CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        input: cli.input.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        html_dashboard_path: cli.html_dashboard.clone(),
        report_path: cli.report.clone(),
        report_format: cli.report_format.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
