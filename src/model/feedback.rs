use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::titles;
use crate::core::error::ValidationError;
use crate::model::record::FeedbackRecord;

/// The three feedback sections of a review, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackSection {
    Highlights,
    Strengths,
    Improvements,
}

impl FeedbackSection {
    pub const ALL: [FeedbackSection; 3] = [Self::Highlights, Self::Strengths, Self::Improvements];

    /// Key used in serialized output
    pub fn key(self) -> &'static str {
        match self {
            Self::Highlights => "highlights",
            Self::Strengths => "strengths",
            Self::Improvements => "improvements",
        }
    }

    /// Heading shown above the section
    pub fn title(self) -> &'static str {
        match self {
            Self::Highlights => titles::HIGHLIGHTS,
            Self::Strengths => titles::STRENGTHS,
            Self::Improvements => titles::IMPROVEMENTS,
        }
    }
}

impl fmt::Display for FeedbackSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Ordered free-text feedback.
///
/// Entries keep their insertion order and duplicates are allowed; a
/// section may be empty but none of its entries may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FeedbackRecord")]
pub struct FeedbackLists {
    highlights: Vec<String>,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl FeedbackLists {
    pub fn new(
        highlights: Vec<String>,
        strengths: Vec<String>,
        improvements: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let lists = Self {
            highlights,
            strengths,
            improvements,
        };
        lists.validate()?;
        Ok(lists)
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn strengths(&self) -> &[String] {
        &self.strengths
    }

    pub fn improvements(&self) -> &[String] {
        &self.improvements
    }

    pub fn section(&self, section: FeedbackSection) -> &[String] {
        match section {
            FeedbackSection::Highlights => &self.highlights,
            FeedbackSection::Strengths => &self.strengths,
            FeedbackSection::Improvements => &self.improvements,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for section in FeedbackSection::ALL {
            if let Some(index) = self
                .section(section)
                .iter()
                .position(|entry| entry.trim().is_empty())
            {
                return Err(ValidationError::BlankFeedback {
                    section: section.key().to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<FeedbackRecord> for FeedbackLists {
    type Error = ValidationError;

    fn try_from(record: FeedbackRecord) -> Result<Self, Self::Error> {
        Self::new(record.highlights, record.strengths, record.improvements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sections_allowed() {
        let lists = FeedbackLists::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
        for section in FeedbackSection::ALL {
            assert!(lists.section(section).is_empty());
        }
    }

    #[test]
    fn test_blank_entry_rejected() {
        let result = FeedbackLists::new(
            strings(&["Led a team of 5 engineers."]),
            strings(&["Strong technical background.", "   "]),
            Vec::new(),
        );
        assert_eq!(
            result,
            Err(ValidationError::BlankFeedback {
                section: "strengths".to_string(),
                index: 1
            })
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let improvements = strings(&[
            "Address minor grammar issues.",
            "Add more quantifiable achievements.",
            "Address minor grammar issues.",
        ]);
        let lists = FeedbackLists::new(Vec::new(), Vec::new(), improvements.clone()).unwrap();
        assert_eq!(lists.improvements(), improvements.as_slice());
    }

    #[test]
    fn test_section_titles() {
        assert_eq!(FeedbackSection::Highlights.title(), "Extracted Bullet Points");
        assert_eq!(FeedbackSection::Strengths.title(), "Strengths");
        assert_eq!(FeedbackSection::Improvements.title(), "Suggested Improvements");
        assert_eq!(FeedbackSection::Improvements.to_string(), "improvements");
    }

    #[test]
    fn test_deserialize_missing_sections_default_to_empty() {
        let lists: FeedbackLists =
            serde_json::from_str(r#"{"strengths": ["Proactive problem solver."]}"#).unwrap();
        assert!(lists.highlights().is_empty());
        assert_eq!(lists.strengths().len(), 1);
        assert!(lists.improvements().is_empty());

        let json = serde_json::to_string(&lists).unwrap();
        assert!(json.contains(r#""improvements":[]"#));
    }
}
