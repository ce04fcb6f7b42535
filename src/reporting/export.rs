//! Report export
//!
//! Serializes a review and its dashboard view into a downloadable report,
//! either as a JSON document or as a sectioned plain-text summary.

use serde::Serialize;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::constants::report_formats;
use crate::core::error::{Result, ResumeBoardError};
use crate::model::AnalysisResult;
use crate::transform::DashboardView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for ReportFormat {
    type Err = ResumeBoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            report_formats::JSON => Ok(Self::Json),
            report_formats::TEXT => Ok(Self::Text),
            other => Err(ResumeBoardError::InvalidArgument(format!(
                "Unknown report format '{other}'. Expected one of: {}.",
                report_formats::ALL.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "{}", report_formats::JSON),
            Self::Text => write!(f, "{}", report_formats::TEXT),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    result: &'a AnalysisResult,
    view: &'a DashboardView,
}

/// Render the report as a string
pub fn export_report(
    result: &AnalysisResult,
    view: &DashboardView,
    format: ReportFormat,
) -> Result<String> {
    result.validate()?;

    match format {
        ReportFormat::Json => {
            let report = JsonReport {
                generated_at: chrono::Local::now().to_rfc3339(),
                result,
                view,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        ReportFormat::Text => Ok(text_report(view)),
    }
}

/// Render the report and write it to `path`
pub fn write_report<P: AsRef<Path>>(
    result: &AnalysisResult,
    view: &DashboardView,
    format: ReportFormat,
    path: P,
) -> Result<()> {
    let content = export_report(result, view, format)?;
    fs::write(path.as_ref(), content)?;
    Ok(())
}

fn text_report(view: &DashboardView) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "RESUME ANALYSIS REPORT");
    let _ = writeln!(out, "======================");
    for card in &view.summary_cards {
        let _ = writeln!(out, "{}: {} / {}", card.title, card.score, card.max_score);
    }

    let _ = writeln!(out, "\nMETRICS");
    for card in &view.metric_cards {
        match card.percent {
            Some(percent) => {
                let _ = writeln!(out, "  {}: {} ({percent}%)", card.label, card.value);
            }
            None => {
                let _ = writeln!(out, "  {}: {}", card.label, card.value);
            }
        }
    }

    let _ = writeln!(out, "\nKEY METRICS COMPARISON");
    for point in &view.radar_series {
        let _ = writeln!(out, "  {}: {}", point.axis_name, point.score);
    }

    let _ = writeln!(out, "\nSKILL CATEGORY DISTRIBUTION");
    for slice in &view.category_slices {
        let _ = writeln!(out, "  {}: {}%", slice.category_name, slice.percent);
    }

    for (section, entries) in view.feedback.iter() {
        let _ = writeln!(out, "\n{}", section.title().to_uppercase());
        if entries.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for entry in entries {
            let _ = writeln!(out, "  - {entry}");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnalysisEngine, SampleEngine};

    fn sample() -> (AnalysisResult, DashboardView) {
        let result = SampleEngine.analyze().unwrap();
        let view = DashboardView::build(&result, 5).unwrap();
        (result, view)
    }

    #[test]
    fn test_report_format_parsing() {
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!(matches!(
            "pdf".parse::<ReportFormat>(),
            Err(ResumeBoardError::InvalidArgument(_))
        ));
        assert_eq!(ReportFormat::default().to_string(), "json");
    }

    #[test]
    fn test_json_report_contains_result_and_view() {
        let (result, view) = sample();
        let report = export_report(&result, &view, ReportFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["result"]["resume_score"], 87);
        assert_eq!(json["view"]["summary_cards"][1]["title"], "Communication");
        assert_eq!(json["view"]["feedback"]["improvements"].as_array().unwrap().len(), 3);
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_json_report_result_parses_back() {
        let (result, view) = sample();
        let report = export_report(&result, &view, ReportFormat::Json).unwrap();

        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        let reparsed: AnalysisResult = serde_json::from_value(json["result"].clone()).unwrap();
        assert_eq!(reparsed, result);
    }

    #[test]
    fn test_text_report_sections() {
        let (result, view) = sample();
        let report = export_report(&result, &view, ReportFormat::Text).unwrap();

        assert!(report.contains("Resume Score: 87 / 100"));
        assert!(report.contains("ATS Compatibility: Yes (92%)"));
        assert!(report.contains("Action Verbs Used: 18"));
        assert!(report.contains("Technical: 40%"));
        assert!(report.contains("EXTRACTED BULLET POINTS"));
        assert!(report.contains("  - Address minor grammar issues."));
    }

    #[test]
    fn test_write_report() {
        let (result, view) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        write_report(&result, &view, ReportFormat::Text, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("RESUME ANALYSIS REPORT"));
    }
}
