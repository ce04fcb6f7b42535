//! Rendering and reporting
//!
//! This module handles HTML dashboard generation, report export,
//! and structured logging for the application.

pub mod dashboard;
pub mod export;
pub mod logging;

// Re-export commonly used items
pub use dashboard::{DashboardData, DashboardError, HtmlDashboard};
pub use export::{ReportFormat, export_report, write_report};
