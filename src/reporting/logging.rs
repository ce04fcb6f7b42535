use crate::config::Config;
use crate::core::error::ValidationError;
use crate::model::AnalysisResult;
use crate::transform::DashboardView;
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // A second initialization in the same process is a no-op
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let style = config.style();
    let output_format = config.output_format.as_deref().unwrap_or("text");
    let report_format = config.report_format.as_deref().unwrap_or("json");

    info!("Configuration: format={output_format}, report_format={report_format}");
    info!(
        "Style: palette={} colors, {} metric styles, default={}",
        style.palette.len(),
        style.metric_styles.len(),
        style.default_style
    );
    if let Some(ref path) = config.html_dashboard_path {
        debug!("  dashboard -> {path}");
    }
    if let Some(ref path) = config.report_path {
        debug!("  report -> {path}");
    }
}

/// Log a freshly produced analysis result
pub fn log_analysis_loaded(engine: &str, result: &AnalysisResult) {
    info!(
        "Loaded analysis from {engine} engine: resume={}, communication={}, readability={}",
        result.resume_score(),
        result.communication_score(),
        result.readability_score()
    );
    debug!(
        "  {} metrics, {} radar axes, {} categories",
        result.metrics().len(),
        result.radar().len(),
        result.categories().len()
    );
}

/// Log the shape of a built dashboard view
pub fn log_view_built(view: &DashboardView) {
    info!(
        "Built dashboard view: {} cards, {} metrics, {} slices",
        view.summary_cards.len(),
        view.metric_cards.len(),
        view.category_slices.len()
    );
    for slice in &view.category_slices {
        debug!(
            "  {} -> {}% (color {})",
            slice.category_name, slice.percent, slice.color_index
        );
    }
}

/// Log a rejected analysis result
pub fn log_validation_failure(err: &ValidationError) {
    warn!("❌ Analysis result rejected: {err}");
}

/// Log a written output file
pub fn log_report_written<P: AsRef<Path>>(kind: &str, path: P) {
    info!("✅ Wrote {kind} to {}", path.as_ref().display());
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnalysisEngine, SampleEngine};
    use std::io;

    #[test]
    fn test_logger_initialization_is_repeatable() {
        init_logger(true, false);
        init_logger(false, true);
        init_logger(false, false);
    }

    #[test]
    fn test_log_config_info() {
        log_config_info(&Config::default());
        log_config_info(&Config {
            html_dashboard_path: Some("dashboard.html".to_string()),
            report_path: Some("report.json".to_string()),
            palette: Some(vec!["#000000".to_string()]),
            ..Default::default()
        });
    }

    #[test]
    fn test_log_analysis_and_view() {
        let result = SampleEngine.analyze().unwrap();
        log_analysis_loaded("sample", &result);
        log_view_built(&DashboardView::build(&result, 5).unwrap());
    }

    #[test]
    fn test_log_failures_and_outputs() {
        log_validation_failure(&ValidationError::EmptyDistribution);
        log_report_written("dashboard", "dashboard.html");
        log_error("Test error", None);
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        log_error("With source", Some(&io_error));
        log_warning("Test warning");
    }
}
