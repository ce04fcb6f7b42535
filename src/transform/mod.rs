//! Presentation transforms
//!
//! Pure functions turning a validated `AnalysisResult` into the view
//! models a dashboard renders. Every transform re-validates its input and
//! returns the first violation instead of a partial view.

pub mod cards;
pub mod charts;
pub mod sections;

use serde::Serialize;

use crate::core::error::ValidationError;
use crate::model::AnalysisResult;

// Re-export commonly used items
pub use cards::{MetricCard, SummaryCard, to_metric_cards, to_summary_cards};
pub use charts::{
    CategorySlice, RadarPoint, to_category_slices, to_category_slices_with_palette,
    to_radar_series,
};
pub use sections::{FeedbackSections, to_feedback_sections};

/// Every view model of one dashboard render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub summary_cards: Vec<SummaryCard>,
    pub metric_cards: Vec<MetricCard>,
    pub radar_series: Vec<RadarPoint>,
    pub category_slices: Vec<CategorySlice>,
    pub feedback: FeedbackSections,
}

impl DashboardView {
    /// Run all transforms against `result`, coloring slices with a palette
    /// of `palette_size` entries.
    pub fn build(result: &AnalysisResult, palette_size: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            summary_cards: to_summary_cards(result)?.to_vec(),
            metric_cards: to_metric_cards(result)?,
            radar_series: to_radar_series(result)?,
            category_slices: to_category_slices_with_palette(result, palette_size)?,
            feedback: to_feedback_sections(result)?,
        })
    }
}
