use clap::{CommandFactory, Parser};
use resumeboard::config::{CliConfig, Config};
use resumeboard::core::constants::{output_formats, report_formats};
use resumeboard::core::error::{Result, ResumeBoardError};
use resumeboard::engine::{AnalysisEngine, JsonFileEngine, SampleEngine};
use resumeboard::reporting::dashboard::palette_size;
use resumeboard::reporting::logging;
use resumeboard::reporting::{DashboardData, HtmlDashboard, ReportFormat, write_report};
use resumeboard::transform::DashboardView;
use resumeboard::ui::completion::print_completions;
use resumeboard::ui::output;
use resumeboard::ui::{Cli, Commands, cli_to_config};

fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_resumeboard(&cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if let ResumeBoardError::Validation(ref err) = e {
                logging::log_validation_failure(err);
            }
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Load, transform and render one analysis
fn run_resumeboard(cli: &Cli) -> Result<()> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    let verbose = config.verbose.unwrap_or(false);
    logging::init_logger(verbose, cli_config.quiet);
    logging::log_config_info(&config);

    let engine = select_engine(&cli_config);
    let result = engine.analyze()?;
    logging::log_analysis_loaded(engine.name(), &result);

    let style = config.style();
    let view = DashboardView::build(&result, palette_size(&style))?;
    logging::log_view_built(&view);

    if !cli_config.quiet {
        let output_format = config
            .output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT);
        output::display_summary(&view, &style, output_format)?;
    }

    if let Some(ref dashboard_path) = config.html_dashboard_path {
        let data = DashboardData::new(view.clone(), style.clone(), config.title());
        HtmlDashboard::generate_dashboard(&data, dashboard_path).inspect_err(|e| {
            logging::log_error("Failed to generate HTML dashboard", Some(e));
        })?;
        logging::log_report_written("HTML dashboard", dashboard_path);
    }

    if let Some(ref report_path) = config.report_path {
        let format: ReportFormat = config
            .report_format
            .as_deref()
            .unwrap_or(report_formats::DEFAULT)
            .parse()?;
        write_report(&result, &view, format, report_path)?;
        logging::log_report_written(&format!("{format} report"), report_path);
    }

    Ok(())
}

/// Load configuration from file or standard locations and merge with CLI config
fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

fn select_engine(cli_config: &CliConfig) -> Box<dyn AnalysisEngine> {
    match cli_config.input {
        Some(ref path) => Box::new(JsonFileEngine::new(path)),
        None => Box::new(SampleEngine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli_config(args: &[&str]) -> CliConfig {
        let mut argv = vec!["resumeboard"];
        argv.extend_from_slice(args);
        cli_to_config(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_handle_completion_commands_none() {
        let cli = Cli::try_parse_from(["resumeboard"]).unwrap();
        assert_eq!(handle_completion_commands(&cli), None);
    }

    #[test]
    fn test_load_and_merge_config_no_config_flag() {
        let config = load_and_merge_config(&cli_config(&["--no-config", "--format", "json"])).unwrap();
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert_eq!(config.html_dashboard_path, None);
    }

    #[test]
    fn test_load_and_merge_config_with_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"output_format = \"minimal\"\ntitle = \"Candidate\"")
            .unwrap();
        let path = file.path().to_str().unwrap();

        let config = load_and_merge_config(&cli_config(&["--config", path])).unwrap();
        assert_eq!(config.output_format.as_deref(), Some("minimal"));
        assert_eq!(config.title(), "Candidate");

        // CLI wins over the file
        let config =
            load_and_merge_config(&cli_config(&["--config", path, "--format", "text"])).unwrap();
        assert_eq!(config.output_format.as_deref(), Some("text"));
    }

    #[test]
    fn test_load_and_merge_config_invalid_file() {
        let result = load_and_merge_config(&cli_config(&["--config", "/nonexistent.toml"]));
        assert!(matches!(result, Err(ResumeBoardError::Config(_))));
    }

    #[test]
    fn test_select_engine() {
        assert_eq!(select_engine(&cli_config(&[])).name(), "sample");
        assert_eq!(
            select_engine(&cli_config(&["--input", "analysis.json"])).name(),
            "json-file"
        );
    }
}
