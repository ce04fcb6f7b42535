//! Resume analysis data model
//!
//! Validated value types describing one completed resume review. Every
//! constructor checks its invariants, so a value of these types is
//! always renderable.

pub mod categories;
pub mod feedback;
pub mod metric;
pub mod radar;
pub mod record;
pub mod result;

// Re-export commonly used items
pub use categories::{Category, CategoryDistribution};
pub use feedback::{FeedbackLists, FeedbackSection};
pub use metric::{DisplayValue, MetricValue};
pub use radar::{RadarAxis, RadarProfile};
pub use record::AnalysisRecord;
pub use result::{AnalysisResult, AnalysisResultBuilder};
