//! Wire form of an analysis result
//!
//! These records mirror the JSON document an external analysis engine
//! writes. They carry no invariants; converting them into the validated
//! model types with `TryFrom` is where every check happens.

use serde::{Deserialize, Serialize};

use crate::core::constants::scores;
use crate::core::error::ValidationError;
use crate::model::metric::DisplayValue;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricRecord {
    pub label: String,
    pub value: DisplayValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarAxisRecord {
    pub axis: String,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedbackRecord {
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub resume_score: i64,
    pub communication_score: i64,
    pub readability_score: i64,
    #[serde(default)]
    pub metrics: Vec<MetricRecord>,
    pub radar: Vec<RadarAxisRecord>,
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub feedback: FeedbackRecord,
}

/// Narrow a wire score to the 0-100 scale
pub(crate) fn checked_score(field: &str, raw: i64) -> Result<u32, ValidationError> {
    u32::try_from(raw)
        .ok()
        .filter(|score| *score <= scores::MAX_SCORE)
        .ok_or_else(|| ValidationError::ScoreOutOfRange {
            field: field.to_string(),
            score: raw,
        })
}

/// Narrow a wire percent to the 0-100 scale
pub(crate) fn checked_percent(label: &str, raw: i64) -> Result<u32, ValidationError> {
    u32::try_from(raw)
        .ok()
        .filter(|percent| *percent <= scores::MAX_SCORE)
        .ok_or_else(|| ValidationError::PercentOutOfRange {
            label: label.to_string(),
            percent: raw,
        })
}
