use serde::Serialize;

use crate::core::error::ValidationError;
use crate::model::{AnalysisResult, FeedbackSection};

/// Feedback lists as handed to the renderer.
///
/// All three keys are always present; an empty section serializes as an
/// empty array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackSections {
    pub highlights: Vec<String>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

impl FeedbackSections {
    pub fn section(&self, section: FeedbackSection) -> &[String] {
        match section {
            FeedbackSection::Highlights => &self.highlights,
            FeedbackSection::Strengths => &self.strengths,
            FeedbackSection::Improvements => &self.improvements,
        }
    }

    /// Sections paired with their headings, in display order
    pub fn iter(&self) -> impl Iterator<Item = (FeedbackSection, &[String])> {
        FeedbackSection::ALL
            .into_iter()
            .map(move |section| (section, self.section(section)))
    }
}

pub fn to_feedback_sections(result: &AnalysisResult) -> Result<FeedbackSections, ValidationError> {
    result.validate()?;

    let feedback = result.feedback();
    Ok(FeedbackSections {
        highlights: feedback.highlights().to_vec(),
        strengths: feedback.strengths().to_vec(),
        improvements: feedback.improvements().to_vec(),
    })
}
