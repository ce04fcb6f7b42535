use crate::config::StyleConfig;
use crate::core::constants::{scores, style, titles};
use crate::transform::{CategorySlice, DashboardView, MetricCard, SummaryCard};
use serde::Serialize;
use std::fs;
use std::io;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";
}

/// Everything the renderer needs for one page
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// View models produced by the transforms
    pub view: DashboardView,
    /// Palette and metric style tokens
    pub style: StyleConfig,
    /// Page heading
    pub title: String,
    /// Timestamp when the dashboard was generated
    pub timestamp: String,
}

impl DashboardData {
    pub fn new(view: DashboardView, style: StyleConfig, title: impl Into<String>) -> Self {
        Self {
            view,
            style,
            title: title.into(),
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {}", e),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {}", e),
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(_) => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

impl From<DashboardError> for crate::core::error::ResumeBoardError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::FileWrite(err) => Self::Io(err),
            DashboardError::Serialization(msg) => Self::InvalidArgument(msg),
        }
    }
}

/// Series handed to Chart.js
#[derive(Serialize)]
struct ChartSeries<'a> {
    labels: Vec<&'a str>,
    values: Vec<u32>,
    colors: Vec<&'a str>,
}

/// HTML dashboard generator for analysis results
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard(
        data: &DashboardData,
        output_path: &str,
    ) -> Result<(), DashboardError> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, html_content)?;
        Ok(())
    }

    /// Generate the complete HTML document content
    pub fn generate_html_content(data: &DashboardData) -> Result<String, DashboardError> {
        let body_content = Self::generate_body_content(data)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - resumeboard</title>
    <script src="{}"></script>
    <style>{}</style>
</head>
<body>
    {}
    <script>{}</script>
</body>
</html>"#,
            html_escape(&data.title),
            dashboard_constants::CHART_JS_CDN,
            Self::generate_css(),
            body_content,
            Self::generate_javascript()
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --bg-color: #181f2a;
            --card-bg: #232b3b;
            --text-primary: #ffffff;
            --text-secondary: #9ca3af;
            --success-color: #4ade80;
            --info-color: #60a5fa;
            --accent-color: #c084fc;
            --warning-color: #facc15;
            --highlight-color: #fb923c;
            --error-color: #f87171;
            --muted-color: #f472b6;
            --neutral-color: #d1d5db;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
        .header { text-align: center; margin-bottom: 2rem; }
        .header p { color: var(--text-secondary); }

        .summary-grid, .metrics-grid, .charts-grid, .feedback-grid {
            display: grid;
            gap: 1.5rem;
            margin-bottom: 2rem;
        }
        .summary-grid { grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
        .metrics-grid { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
        .charts-grid { grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); }
        .feedback-grid { grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); }

        .card {
            background: var(--card-bg);
            border-radius: 0.75rem;
            padding: 1.5rem;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
        }

        .summary-card { display: flex; flex-direction: column; align-items: center; }
        .summary-title { font-size: 1.5rem; font-weight: 600; }
        .summary-score { font-size: 2.5rem; font-weight: 700; color: var(--info-color); }
        .summary-max { color: var(--text-secondary); }

        .metric-card { display: flex; flex-direction: column; gap: 0.25rem; }
        .metric-label { color: var(--text-secondary); font-size: 0.9rem; }
        .metric-value { font-size: 1.5rem; font-weight: 700; }
        .metric-percent { color: var(--text-secondary); font-size: 0.85rem; }

        .metric-card.success .metric-value { color: var(--success-color); }
        .metric-card.info .metric-value { color: var(--info-color); }
        .metric-card.accent .metric-value { color: var(--accent-color); }
        .metric-card.warning .metric-value { color: var(--warning-color); }
        .metric-card.highlight .metric-value { color: var(--highlight-color); }
        .metric-card.error .metric-value { color: var(--error-color); }
        .metric-card.muted .metric-value { color: var(--muted-color); }
        .metric-card.neutral .metric-value { color: var(--neutral-color); }

        .chart-title, .section-title { font-size: 1.1rem; font-weight: 600; margin-bottom: 1rem; }
        .legend { list-style: none; margin-top: 1rem; }
        .legend-swatch {
            display: inline-block;
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 50%;
            margin-right: 0.5rem;
        }

        .feedback-list { padding-left: 1.25rem; }
        .feedback-list li { margin-bottom: 0.5rem; }
        .feedback-empty { color: var(--text-secondary); font-style: italic; }
        "#
    }

    /// Generate the main body content of the dashboard
    fn generate_body_content(data: &DashboardData) -> Result<String, DashboardError> {
        let header_section = Self::generate_header_section(&data.title, &data.timestamp);
        let summary_section = Self::generate_summary_section(&data.view.summary_cards);
        let metrics_section = Self::generate_metrics_section(&data.view.metric_cards, &data.style);
        let charts_section = Self::generate_charts_section(data)?;
        let feedback_section = Self::generate_feedback_section(data);

        Ok(format!(
            r#"
            <div class="container">
                {}
                {}
                {}
                {}
                {}
            </div>
            "#,
            header_section, summary_section, metrics_section, charts_section, feedback_section
        ))
    }

    fn generate_header_section(title: &str, timestamp: &str) -> String {
        format!(
            r#"
            <div class="header">
                <h1>{}</h1>
                <p>Generated on {} by resumeboard</p>
            </div>
            "#,
            html_escape(title),
            timestamp
        )
    }

    fn generate_summary_section(cards: &[SummaryCard]) -> String {
        let cards_html = cards
            .iter()
            .map(|card| {
                format!(
                    r#"
                    <div class="card summary-card">
                        <span class="summary-title">{}</span>
                        <span class="summary-score">{}</span>
                        <span class="summary-max">/ {}</span>
                    </div>
                    "#,
                    html_escape(&card.title),
                    card.score,
                    card.max_score
                )
            })
            .collect::<Vec<_>>()
            .join("");

        format!(r#"<div class="summary-grid">{}</div>"#, cards_html)
    }

    fn generate_metrics_section(cards: &[MetricCard], style: &StyleConfig) -> String {
        let cards_html = cards
            .iter()
            .map(|card| {
                let percent_html = card
                    .percent
                    .map(|p| format!(r#"<span class="metric-percent">{p}%</span>"#))
                    .unwrap_or_default();

                format!(
                    r#"
                    <div class="card metric-card {}">
                        <span class="metric-label">{}</span>
                        <span class="metric-value">{}</span>
                        {}
                    </div>
                    "#,
                    html_escape(style.style_for(&card.label)),
                    html_escape(&card.label),
                    html_escape(&card.value.to_string()),
                    percent_html
                )
            })
            .collect::<Vec<_>>()
            .join("");

        format!(r#"<div class="metrics-grid">{}</div>"#, cards_html)
    }

    /// Radar and pie charts, with their series embedded as JSON
    fn generate_charts_section(data: &DashboardData) -> Result<String, DashboardError> {
        let radar = ChartSeries {
            labels: data
                .view
                .radar_series
                .iter()
                .map(|p| p.axis_name.as_str())
                .collect(),
            values: data.view.radar_series.iter().map(|p| p.score).collect(),
            colors: vec![data.style.color_for(0)],
        };
        let categories = ChartSeries {
            labels: data
                .view
                .category_slices
                .iter()
                .map(|s| s.category_name.as_str())
                .collect(),
            values: data.view.category_slices.iter().map(|s| s.percent).collect(),
            colors: data
                .view
                .category_slices
                .iter()
                .map(|s| data.style.color_for(s.color_index))
                .collect(),
        };

        Ok(format!(
            r#"
            <div class="charts-grid">
                <div class="card">
                    <h3 class="chart-title">{}</h3>
                    <canvas id="radarChart" width="400" height="300"></canvas>
                </div>
                <div class="card">
                    <h3 class="chart-title">{}</h3>
                    <canvas id="categoryChart" width="400" height="300"></canvas>
                    {}
                </div>
            </div>

            <script>
                window.radarData = {};
                window.categoryData = {};
                window.maxScore = {};
            </script>
            "#,
            titles::RADAR_CHART,
            titles::CATEGORY_CHART,
            Self::generate_legend(&data.view.category_slices, &data.style),
            script_json(&radar)?,
            script_json(&categories)?,
            scores::MAX_SCORE
        ))
    }

    fn generate_legend(slices: &[CategorySlice], style: &StyleConfig) -> String {
        let items = slices
            .iter()
            .map(|slice| {
                format!(
                    r#"<li><span class="legend-swatch" style="background: {}"></span>{} ({}%)</li>"#,
                    html_escape(style.color_for(slice.color_index)),
                    html_escape(&slice.category_name),
                    slice.percent
                )
            })
            .collect::<Vec<_>>()
            .join("");

        format!(r#"<ul class="legend">{}</ul>"#, items)
    }

    /// Three feedback sections; an empty one still renders, with an empty list
    fn generate_feedback_section(data: &DashboardData) -> String {
        let sections_html = data
            .view
            .feedback
            .iter()
            .map(|(section, entries)| {
                let items = entries
                    .iter()
                    .map(|entry| format!("<li>{}</li>", html_escape(entry)))
                    .collect::<Vec<_>>()
                    .join("");
                let empty_note = if entries.is_empty() {
                    r#"<p class="feedback-empty">Nothing to report.</p>"#
                } else {
                    ""
                };

                format!(
                    r#"
                    <div class="card feedback-card" id="{}">
                        <h3 class="section-title">{}</h3>
                        <ul class="feedback-list">{}</ul>
                        {}
                    </div>
                    "#,
                    section.key(),
                    section.title(),
                    items,
                    empty_note
                )
            })
            .collect::<Vec<_>>()
            .join("");

        format!(r#"<div class="feedback-grid">{}</div>"#, sections_html)
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof Chart === 'undefined') {
                return;
            }

            const radarCtx = document.getElementById('radarChart');
            if (radarCtx && window.radarData) {
                new Chart(radarCtx, {
                    type: 'radar',
                    data: {
                        labels: window.radarData.labels,
                        datasets: [{
                            label: 'Score',
                            data: window.radarData.values,
                            borderColor: window.radarData.colors[0],
                            backgroundColor: window.radarData.colors[0] + '99'
                        }]
                    },
                    options: {
                        scales: {
                            r: {
                                min: 0,
                                max: window.maxScore,
                                grid: { color: '#334155' },
                                pointLabels: { color: '#cbd5e1' }
                            }
                        },
                        plugins: { legend: { display: false } }
                    }
                });
            }

            const categoryCtx = document.getElementById('categoryChart');
            if (categoryCtx && window.categoryData) {
                new Chart(categoryCtx, {
                    type: 'pie',
                    data: {
                        labels: window.categoryData.labels,
                        datasets: [{
                            data: window.categoryData.values,
                            backgroundColor: window.categoryData.colors,
                            borderWidth: 2,
                            borderColor: '#232b3b'
                        }]
                    },
                    options: {
                        responsive: true,
                        plugins: { legend: { display: false } }
                    }
                });
            }
        });
        "#
    }
}

/// Serialize a value for embedding inside a `<script>` element
fn script_json<T: Serialize>(value: &T) -> Result<String, DashboardError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|e| DashboardError::Serialization(e.to_string()))
}

/// Escape text for HTML element content and attribute values
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Palette size the renderer colors slices with
pub fn palette_size(style_config: &StyleConfig) -> usize {
    match style_config.palette_size() {
        0 => style::DEFAULT_PALETTE.len(),
        n => n,
    }
}
