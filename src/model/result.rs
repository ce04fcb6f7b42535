use serde::{Deserialize, Serialize};

use crate::core::constants::scores;
use crate::core::error::ValidationError;
use crate::model::categories::{Category, CategoryDistribution};
use crate::model::feedback::FeedbackLists;
use crate::model::metric::{MetricValue, ensure_unique_labels};
use crate::model::radar::{RadarAxis, RadarProfile};
use crate::model::record::{AnalysisRecord, checked_score};

/// One completed resume review.
///
/// Built once per analysis run and never mutated afterwards; a re-analysis
/// produces a new value. The three headline scores are bounded
/// independently and are allowed to disagree with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AnalysisRecord")]
pub struct AnalysisResult {
    resume_score: u32,
    communication_score: u32,
    readability_score: u32,
    metrics: Vec<MetricValue>,
    radar: RadarProfile,
    categories: CategoryDistribution,
    feedback: FeedbackLists,
}

/// Builder for creating `AnalysisResult` instances with validation.
#[derive(Debug, Default)]
pub struct AnalysisResultBuilder {
    resume_score: Option<u32>,
    communication_score: Option<u32>,
    readability_score: Option<u32>,
    metrics: Vec<MetricValue>,
    radar: Option<RadarProfile>,
    categories: Option<CategoryDistribution>,
    feedback: FeedbackLists,
}

impl AnalysisResult {
    pub fn new(
        resume_score: u32,
        communication_score: u32,
        readability_score: u32,
        metrics: Vec<MetricValue>,
        radar: RadarProfile,
        categories: CategoryDistribution,
        feedback: FeedbackLists,
    ) -> Result<Self, ValidationError> {
        let result = Self {
            resume_score,
            communication_score,
            readability_score,
            metrics,
            radar,
            categories,
            feedback,
        };
        result.validate()?;
        Ok(result)
    }

    /// Create a builder for constructing AnalysisResult instances.
    pub fn builder() -> AnalysisResultBuilder {
        AnalysisResultBuilder::default()
    }

    pub fn resume_score(&self) -> u32 {
        self.resume_score
    }

    pub fn communication_score(&self) -> u32 {
        self.communication_score
    }

    pub fn readability_score(&self) -> u32 {
        self.readability_score
    }

    pub fn metrics(&self) -> &[MetricValue] {
        &self.metrics
    }

    pub fn radar(&self) -> &RadarProfile {
        &self.radar
    }

    pub fn categories(&self) -> &CategoryDistribution {
        &self.categories
    }

    pub fn feedback(&self) -> &FeedbackLists {
        &self.feedback
    }

    /// Re-check every invariant of the result and its parts.
    ///
    /// Transforms call this before producing any view model so that a
    /// partially valid result never reaches the renderer.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, score) in [
            ("resume_score", self.resume_score),
            ("communication_score", self.communication_score),
            ("readability_score", self.readability_score),
        ] {
            if score > scores::MAX_SCORE {
                return Err(ValidationError::ScoreOutOfRange {
                    field: field.to_string(),
                    score: i64::from(score),
                });
            }
        }

        for metric in &self.metrics {
            metric.validate()?;
        }
        ensure_unique_labels(&self.metrics)?;

        self.radar.validate()?;
        self.categories.validate()?;
        self.feedback.validate()
    }
}

impl TryFrom<AnalysisRecord> for AnalysisResult {
    type Error = ValidationError;

    fn try_from(record: AnalysisRecord) -> Result<Self, Self::Error> {
        let metrics = record
            .metrics
            .into_iter()
            .map(MetricValue::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let axes = record
            .radar
            .into_iter()
            .map(RadarAxis::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = record
            .categories
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(
            checked_score("resume_score", record.resume_score)?,
            checked_score("communication_score", record.communication_score)?,
            checked_score("readability_score", record.readability_score)?,
            metrics,
            RadarProfile::new(axes)?,
            CategoryDistribution::new(categories)?,
            FeedbackLists::try_from(record.feedback)?,
        )
    }
}

impl AnalysisResultBuilder {
    pub fn resume_score(mut self, score: u32) -> Self {
        self.resume_score = Some(score);
        self
    }

    pub fn communication_score(mut self, score: u32) -> Self {
        self.communication_score = Some(score);
        self
    }

    pub fn readability_score(mut self, score: u32) -> Self {
        self.readability_score = Some(score);
        self
    }

    /// Append one metric; metrics keep the order they are added in.
    pub fn metric(mut self, metric: MetricValue) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn metrics(mut self, metrics: Vec<MetricValue>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn radar(mut self, radar: RadarProfile) -> Self {
        self.radar = Some(radar);
        self
    }

    pub fn categories(mut self, categories: CategoryDistribution) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn feedback(mut self, feedback: FeedbackLists) -> Self {
        self.feedback = feedback;
        self
    }

    /// Build the AnalysisResult, validating all required fields.
    pub fn build(self) -> Result<AnalysisResult, ValidationError> {
        let missing = |field: &str| ValidationError::MissingField(field.to_string());

        AnalysisResult::new(
            self.resume_score.ok_or_else(|| missing("resume_score"))?,
            self.communication_score
                .ok_or_else(|| missing("communication_score"))?,
            self.readability_score
                .ok_or_else(|| missing("readability_score"))?,
            self.metrics,
            self.radar.ok_or_else(|| missing("radar"))?,
            self.categories.ok_or_else(|| missing("categories"))?,
            self.feedback,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar() -> RadarProfile {
        RadarProfile::from_pairs([("Communication", 85), ("Technical", 92), ("Confidence", 82)])
            .unwrap()
    }

    fn categories() -> CategoryDistribution {
        CategoryDistribution::from_pairs([("Technical", 40.0), ("Other", 60.0)]).unwrap()
    }

    fn base_builder() -> AnalysisResultBuilder {
        AnalysisResult::builder()
            .resume_score(87)
            .communication_score(85)
            .readability_score(90)
            .radar(radar())
            .categories(categories())
    }

    #[test]
    fn test_builder_creates_result() {
        let result = base_builder()
            .metric(MetricValue::new("Keyword Match", "78%", None).unwrap())
            .build()
            .unwrap();

        assert_eq!(result.resume_score(), 87);
        assert_eq!(result.communication_score(), 85);
        assert_eq!(result.readability_score(), 90);
        assert_eq!(result.metrics().len(), 1);
        assert!(result.feedback().strengths().is_empty());
    }

    #[test]
    fn test_builder_missing_fields() {
        let result = AnalysisResult::builder().radar(radar()).build();
        assert_eq!(
            result,
            Err(ValidationError::MissingField("resume_score".to_string()))
        );

        let result = AnalysisResult::builder()
            .resume_score(1)
            .communication_score(2)
            .readability_score(3)
            .radar(radar())
            .build();
        assert_eq!(
            result,
            Err(ValidationError::MissingField("categories".to_string()))
        );
    }

    #[test]
    fn test_headline_scores_bounded_independently() {
        let result = base_builder().communication_score(101).build();
        assert_eq!(
            result,
            Err(ValidationError::ScoreOutOfRange {
                field: "communication_score".to_string(),
                score: 101
            })
        );

        // Diverging scores are fine
        let result = base_builder()
            .resume_score(0)
            .communication_score(100)
            .readability_score(3)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_metric_labels_rejected() {
        let result = base_builder()
            .metric(MetricValue::new("Read Time", "2 mins", None).unwrap())
            .metric(MetricValue::new("Read Time", "3 mins", None).unwrap())
            .build();
        assert_eq!(
            result,
            Err(ValidationError::DuplicateLabel("Read Time".to_string()))
        );
    }

    #[test]
    fn test_try_from_record_validates_nested_parts() {
        let json = r#"{
            "resume_score": 87,
            "communication_score": 85,
            "readability_score": 90,
            "radar": [{"axis": "A", "score": 1}, {"axis": "B", "score": 2}],
            "categories": [{"name": "Technical", "weight": 1}]
        }"#;
        let record: AnalysisRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            AnalysisResult::try_from(record),
            Err(ValidationError::TooFewAxes {
                found: 2,
                required: 3
            })
        );
    }

    #[test]
    fn test_deserialize_and_serialize_result() {
        let json = r#"{
            "resume_score": 87,
            "communication_score": 85,
            "readability_score": 90,
            "metrics": [{"label": "ATS Compatibility", "value": "Yes", "percent": 92}],
            "radar": [{"axis": "A", "score": 1}, {"axis": "B", "score": 2}, {"axis": "C", "score": 3}],
            "categories": [{"name": "Technical", "weight": 1}],
            "feedback": {"improvements": ["Add more quantifiable achievements."]}
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.metrics()[0].percent(), Some(92));
        assert_eq!(result.feedback().improvements().len(), 1);

        let reparsed: AnalysisResult =
            serde_json::from_str(&serde_json::to_string(&result).unwrap()).unwrap();
        assert_eq!(reparsed, result);
    }
}
