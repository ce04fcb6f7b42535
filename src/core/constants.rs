//! Application-wide constants.
//!
//! Score bounds, default styling and the fixed titles used by the
//! presentation layer live here so the transform and rendering code
//! never carry literal values.

/// Score bounds shared by headline scores, radar axes and metric percents
pub mod scores {
    /// Highest valid score; also the `max_score` shown on summary cards
    pub const MAX_SCORE: u32 = 100;
    /// Category slice percents always add up to this value
    pub const PERCENT_TOTAL: u32 = 100;
}

/// Radar profile constraints
pub mod radar {
    /// A radar with fewer axes is degenerate
    pub const MIN_AXES: usize = 3;
}

/// Fixed titles of the dashboard sections
pub mod titles {
    pub const RESUME_SCORE: &str = "Resume Score";
    pub const COMMUNICATION: &str = "Communication";
    pub const READABILITY: &str = "Readability";

    pub const HIGHLIGHTS: &str = "Extracted Bullet Points";
    pub const STRENGTHS: &str = "Strengths";
    pub const IMPROVEMENTS: &str = "Suggested Improvements";

    pub const RADAR_CHART: &str = "Key Metrics Comparison";
    pub const CATEGORY_CHART: &str = "Skill Category Distribution";

    pub const DASHBOARD: &str = "Resume Analysis Dashboard";
}

/// Default styling injected into the renderer
pub mod style {
    /// Category colors, assigned by position modulo the palette length
    pub const DEFAULT_PALETTE: [&str; 5] = ["#a78bfa", "#f472b6", "#38bdf8", "#facc15", "#34d399"];

    /// Style token used for metrics without an explicit mapping
    pub const DEFAULT_STYLE: &str = "neutral";

    /// Metric label to style token mapping of the reference dashboard
    pub const DEFAULT_METRIC_STYLES: [(&str, &str); 7] = [
        ("ATS Compatibility", "success"),
        ("Keyword Match", "info"),
        ("Experience Relevance", "accent"),
        ("Resume Length", "warning"),
        ("Action Verbs Used", "highlight"),
        ("Grammar Issues", "error"),
        ("Read Time", "muted"),
    ];

    /// Score at or above which a score is rendered as good
    pub const GOOD_SCORE: u32 = 80;
    /// Score at or above which a score is rendered as fair
    pub const FAIR_SCORE: u32 = 60;
}

/// Output format constants
pub mod output_formats {
    /// Text output format - colorful sectioned summary
    pub const TEXT: &str = "text";
    /// JSON output format - structured view models for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one plain line per score, metric and slice
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Report export formats
pub mod report_formats {
    pub const JSON: &str = "json";
    pub const TEXT: &str = "text";

    pub const DEFAULT: &str = JSON;

    pub const ALL: [&str; 2] = [JSON, TEXT];
}

/// Configuration file discovery
pub mod config_files {
    /// Config file name looked up in the working directory and its parents
    pub const FILE_NAME: &str = ".resumeboard.toml";
    /// How many parent directories are searched
    pub const PARENT_SEARCH_DEPTH: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats() {
        assert_eq!(output_formats::DEFAULT, output_formats::TEXT);
        assert!(output_formats::ALL.contains(&output_formats::JSON));
        assert!(output_formats::ALL.contains(&output_formats::MINIMAL));
    }

    #[test]
    fn test_report_formats() {
        assert!(report_formats::ALL.contains(&report_formats::DEFAULT));
    }

    #[test]
    fn test_score_bounds() {
        assert_eq!(scores::PERCENT_TOTAL, 100);
        assert!(style::FAIR_SCORE < style::GOOD_SCORE);
        assert!(style::GOOD_SCORE <= scores::MAX_SCORE);
    }

    #[test]
    fn test_default_palette_not_empty() {
        assert!(!style::DEFAULT_PALETTE.is_empty());
        assert!(style::DEFAULT_PALETTE.iter().all(|c| c.starts_with('#')));
    }

    #[test]
    fn test_default_metric_styles_unique_labels() {
        let mut labels: Vec<&str> = style::DEFAULT_METRIC_STYLES.iter().map(|(l, _)| *l).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), style::DEFAULT_METRIC_STYLES.len());
    }
}
