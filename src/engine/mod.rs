//! Analysis engines
//!
//! An engine is whatever produces an `AnalysisResult`: a built-in sample
//! review or a JSON document written by an external analyzer. Reanalysis
//! means calling `analyze` again and replacing the previous result.

pub mod json_file;
pub mod sample;

use crate::core::error::Result;
use crate::model::AnalysisResult;

pub use json_file::JsonFileEngine;
pub use sample::SampleEngine;

/// Source of validated analysis results
pub trait AnalysisEngine {
    /// Short name used in log output
    fn name(&self) -> &str;

    /// Produce a fresh analysis result
    fn analyze(&self) -> Result<AnalysisResult>;
}
