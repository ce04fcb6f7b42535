//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

pub mod style;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{config_files, output_formats, report_formats, style as defaults};
use crate::core::error::{Result, ResumeBoardError};
use crate::reporting::logging;

pub use style::StyleConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Terminal output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Write the HTML dashboard to this path
    pub html_dashboard_path: Option<String>,

    /// Write the exported report to this path
    pub report_path: Option<String>,

    /// Exported report format (json, text)
    pub report_format: Option<String>,

    /// Chart colors, indexed by slice position modulo length
    pub palette: Option<Vec<String>>,

    /// Style token per metric label
    pub metric_styles: Option<BTreeMap<String, String>>,

    /// Style token for metrics missing from `metric_styles`
    pub default_style: Option<String>,

    /// Dashboard page title
    pub title: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            html_dashboard_path: None,
            report_path: None,
            report_format: Some(report_formats::DEFAULT.to_string()),
            palette: None, // Built-in palette
            metric_styles: None,
            default_style: None,
            title: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ResumeBoardError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            ResumeBoardError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        let candidates = (0..=config_files::PARENT_SEARCH_DEPTH).map(|depth| {
            PathBuf::from(format!("{}{}", "../".repeat(depth), config_files::FILE_NAME))
        });
        Self::load_first_valid(candidates)
    }

    /// Load the first existing and valid config among `candidates`.
    ///
    /// Files that exist but fail to load are skipped with a warning.
    fn load_first_valid<I: IntoIterator<Item = PathBuf>>(candidates: I) -> Self {
        for path in candidates {
            if !path.is_file() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return config,
                Err(e) => logging::log_warning(&format!(
                    "Skipping config file '{}': {e}",
                    path.display()
                )),
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if let Some(ref dashboard_path) = cli_config.html_dashboard_path {
            self.html_dashboard_path = Some(dashboard_path.clone());
        }
        if let Some(ref report_path) = cli_config.report_path {
            self.report_path = Some(report_path.clone());
        }
        if let Some(ref report_format) = cli_config.report_format {
            self.report_format = Some(report_format.clone());
        }
    }

    /// Palette, metric styles and default style token with built-in fallbacks
    pub fn style(&self) -> StyleConfig {
        let mut style = StyleConfig::default();
        if let Some(ref palette) = self.palette {
            style.palette = palette.clone();
        }
        if let Some(ref metric_styles) = self.metric_styles {
            style.metric_styles.extend(
                metric_styles
                    .iter()
                    .map(|(label, token)| (label.clone(), token.clone())),
            );
        }
        if let Some(ref default_style) = self.default_style {
            style.default_style = default_style.clone();
        }
        style
    }

    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or(crate::core::constants::titles::DASHBOARD)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(ResumeBoardError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref format) = self.report_format
            && !report_formats::ALL.contains(&format.as_str())
        {
            return Err(ResumeBoardError::Config(format!(
                "Invalid report format '{format}'. Expected one of: {}.",
                report_formats::ALL.join(", ")
            )));
        }

        if let Some(ref palette) = self.palette {
            if palette.is_empty() {
                return Err(ResumeBoardError::Config(format!(
                    "Palette cannot be empty. Remove the key to use the built-in {} colors.",
                    defaults::DEFAULT_PALETTE.len()
                )));
            }
            if let Some(position) = palette.iter().position(|c| c.trim().is_empty()) {
                return Err(ResumeBoardError::Config(format!(
                    "Palette color #{} is blank.",
                    position + 1
                )));
            }
        }

        if let Some(ref styles) = self.metric_styles
            && let Some((label, _)) = styles.iter().find(|(_, token)| token.trim().is_empty())
        {
            return Err(ResumeBoardError::Config(format!(
                "Style token for metric '{label}' cannot be empty."
            )));
        }

        if let Some(ref token) = self.default_style
            && token.trim().is_empty()
        {
            return Err(ResumeBoardError::Config(
                "Default style token cannot be empty.".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub input: Option<String>,               // --input
    pub quiet: bool,                         // --quiet
    pub verbose: bool,                       // --verbose
    pub output_format: Option<String>,       // --format
    pub html_dashboard_path: Option<String>, // --html-dashboard
    pub report_path: Option<String>,         // --report
    pub report_format: Option<String>,       // --report-format
    pub config_file: Option<String>,         // --config
    pub no_config: bool,                     // --no-config
}
