use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::scores;
use crate::core::error::ValidationError;
use crate::model::record::{MetricRecord, checked_percent};

/// Value shown on a metric card: free text or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for DisplayValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for DisplayValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for DisplayValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A single named measurement of a resume review.
///
/// The label is non-empty and the optional percent lies in 0..=100.
/// Label uniqueness is a property of the list a metric lives in and is
/// checked by [`ensure_unique_labels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetricRecord")]
pub struct MetricValue {
    label: String,
    value: DisplayValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    percent: Option<u32>,
}

impl MetricValue {
    /// Create a new metric, rejecting an empty label, a NaN or infinite
    /// number, or an out-of-range percent.
    ///
    /// # Examples
    /// ```
    /// use resumeboard::model::MetricValue;
    ///
    /// let metric = MetricValue::new("ATS Compatibility", "Yes", Some(92)).unwrap();
    /// assert_eq!(metric.label(), "ATS Compatibility");
    /// assert_eq!(metric.percent(), Some(92));
    ///
    /// assert!(MetricValue::new("", 18, None).is_err());
    /// ```
    pub fn new<L, V>(label: L, value: V, percent: Option<u32>) -> Result<Self, ValidationError>
    where
        L: Into<String>,
        V: Into<DisplayValue>,
    {
        let metric = Self {
            label: label.into(),
            value: value.into(),
            percent,
        };
        metric.validate()?;
        Ok(metric)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &DisplayValue {
        &self.value
    }

    pub fn percent(&self) -> Option<u32> {
        self.percent
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyLabel);
        }
        if let DisplayValue::Decimal(value) = self.value
            && !value.is_finite()
        {
            return Err(ValidationError::NonFiniteValue {
                label: self.label.clone(),
            });
        }
        if let Some(percent) = self.percent
            && percent > scores::MAX_SCORE
        {
            return Err(ValidationError::PercentOutOfRange {
                label: self.label.clone(),
                percent: i64::from(percent),
            });
        }
        Ok(())
    }
}

impl TryFrom<MetricRecord> for MetricValue {
    type Error = ValidationError;

    fn try_from(record: MetricRecord) -> Result<Self, Self::Error> {
        let percent = record
            .percent
            .map(|raw| checked_percent(&record.label, raw))
            .transpose()?;
        Self::new(record.label, record.value, percent)
    }
}

/// Check that no two metrics in a list share a label
pub fn ensure_unique_labels(metrics: &[MetricValue]) -> Result<(), ValidationError> {
    let mut seen = FxHashSet::default();
    for metric in metrics {
        if !seen.insert(metric.label()) {
            return Err(ValidationError::DuplicateLabel(metric.label().to_string()));
        }
    }
    Ok(())
}
