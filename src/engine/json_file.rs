use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, ResumeBoardError};
use crate::engine::AnalysisEngine;
use crate::model::{AnalysisRecord, AnalysisResult};

/// Reads an analysis result written by an external analyzer.
///
/// The document goes through the validating constructors, so a file that
/// breaks any invariant fails with `ResumeBoardError::Validation`.
#[derive(Debug, Clone)]
pub struct JsonFileEngine {
    path: PathBuf,
}

impl JsonFileEngine {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse an analysis document from a JSON string.
    ///
    /// Malformed JSON is a `Json` error; well-formed JSON that breaks an
    /// invariant is a `Validation` error.
    pub fn parse(content: &str) -> Result<AnalysisResult> {
        let record: AnalysisRecord = serde_json::from_str(content)?;
        Ok(AnalysisResult::try_from(record)?)
    }
}

impl AnalysisEngine for JsonFileEngine {
    fn name(&self) -> &str {
        "json-file"
    }

    fn analyze(&self) -> Result<AnalysisResult> {
        if !self.path.exists() {
            return Err(ResumeBoardError::FileNotFound(
                self.path.display().to_string(),
            ));
        }

        debug!("Reading analysis result from {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        Self::parse(&content)
    }
}
