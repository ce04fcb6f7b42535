//! resumeboard: resume analysis dashboards
//!
//! A validated data model for one resume review (headline scores, metric
//! indicators, a radar profile, a skill category distribution and
//! free-text feedback) plus the pure transforms that turn it into
//! renderable view models, an HTML dashboard and exported reports.
//!
//! ```
//! use resumeboard::engine::{AnalysisEngine, SampleEngine};
//! use resumeboard::transform::DashboardView;
//!
//! let result = SampleEngine.analyze().unwrap();
//! let view = DashboardView::build(&result, 5).unwrap();
//! assert_eq!(view.summary_cards[0].score, 87);
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod model;
pub mod reporting;
pub mod transform;
pub mod ui;

// Re-export commonly used items
pub use crate::core::error::{Result, ResumeBoardError, ValidationError};
pub use engine::{AnalysisEngine, JsonFileEngine, SampleEngine};
pub use model::{
    AnalysisResult, CategoryDistribution, DisplayValue, FeedbackLists, MetricValue, RadarProfile,
};
pub use transform::DashboardView;
