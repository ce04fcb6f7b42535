use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::constants::{radar, scores};
use crate::core::error::ValidationError;
use crate::model::record::{RadarAxisRecord, checked_score};

/// One competency axis of the radar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RadarAxisRecord")]
pub struct RadarAxis {
    #[serde(rename = "axis")]
    name: String,
    score: u32,
}

impl RadarAxis {
    pub fn new<S: Into<String>>(name: S, score: u32) -> Result<Self, ValidationError> {
        let axis = Self {
            name: name.into(),
            score,
        };
        axis.validate()?;
        Ok(axis)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyAxisName);
        }
        if self.score > scores::MAX_SCORE {
            return Err(ValidationError::ScoreOutOfRange {
                field: self.name.clone(),
                score: i64::from(self.score),
            });
        }
        Ok(())
    }
}

impl TryFrom<RadarAxisRecord> for RadarAxis {
    type Error = ValidationError;

    fn try_from(record: RadarAxisRecord) -> Result<Self, Self::Error> {
        let score = checked_score(&record.axis, record.score)?;
        Self::new(record.axis, score)
    }
}

/// Competency scores on a common 0-100 scale, in insertion order.
///
/// Axis order is significant: charts of different resumes are only
/// comparable when their axes are drawn in the same order, so nothing
/// here ever sorts the axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RadarAxis>", into = "Vec<RadarAxis>")]
pub struct RadarProfile {
    axes: Vec<RadarAxis>,
}

impl RadarProfile {
    /// Create a profile from at least three uniquely named axes.
    ///
    /// # Examples
    /// ```
    /// use resumeboard::model::{RadarAxis, RadarProfile};
    ///
    /// let axes = vec![
    ///     RadarAxis::new("Communication", 85).unwrap(),
    ///     RadarAxis::new("Technical", 92).unwrap(),
    ///     RadarAxis::new("Confidence", 82).unwrap(),
    /// ];
    /// let profile = RadarProfile::new(axes).unwrap();
    /// assert_eq!(profile.len(), 3);
    /// ```
    pub fn new(axes: Vec<RadarAxis>) -> Result<Self, ValidationError> {
        let profile = Self { axes };
        profile.validate()?;
        Ok(profile)
    }

    /// Build a profile from `(name, score)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let axes = pairs
            .into_iter()
            .map(|(name, score)| RadarAxis::new(name, score))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(axes)
    }

    pub fn axes(&self) -> &[RadarAxis] {
        &self.axes
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Always false for a validated profile
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.axes.len() < radar::MIN_AXES {
            return Err(ValidationError::TooFewAxes {
                found: self.axes.len(),
                required: radar::MIN_AXES,
            });
        }

        let mut seen = FxHashSet::default();
        for axis in &self.axes {
            axis.validate()?;
            if !seen.insert(axis.name()) {
                return Err(ValidationError::DuplicateAxis(axis.name().to_string()));
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<RadarAxis>> for RadarProfile {
    type Error = ValidationError;

    fn try_from(axes: Vec<RadarAxis>) -> Result<Self, Self::Error> {
        Self::new(axes)
    }
}

impl From<RadarProfile> for Vec<RadarAxis> {
    fn from(profile: RadarProfile) -> Self {
        profile.axes
    }
}
