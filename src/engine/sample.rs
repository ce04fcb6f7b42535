use crate::core::error::Result;
use crate::engine::AnalysisEngine;
use crate::model::{
    AnalysisResult, CategoryDistribution, DisplayValue, FeedbackLists, MetricValue,
    RadarProfile,
};

/// Built-in review of a senior engineer's resume, used when no input
/// document is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleEngine;

const METRICS: [(&str, SampleValue, Option<u32>); 7] = [
    ("ATS Compatibility", SampleValue::Text("Yes"), Some(92)),
    ("Keyword Match", SampleValue::Text("78%"), None),
    ("Experience Relevance", SampleValue::Text("80%"), None),
    ("Resume Length", SampleValue::Text("2 pages"), None),
    ("Action Verbs Used", SampleValue::Count(18), None),
    ("Grammar Issues", SampleValue::Count(2), None),
    ("Read Time", SampleValue::Text("2 mins"), None),
];

const RADAR: [(&str, u32); 5] = [
    ("Communication", 85),
    ("Technical", 92),
    ("Problem-Solving", 78),
    ("Cultural Fit", 88),
    ("Confidence", 82),
];

const SKILL_CATEGORIES: [(&str, f64); 5] = [
    ("Technical", 40.0),
    ("Leadership", 20.0),
    ("Communication", 15.0),
    ("Management", 10.0),
    ("Other", 15.0),
];

const HIGHLIGHTS: [&str; 4] = [
    "Led a team of 5 engineers to deliver a SaaS product on time.",
    "Improved system performance by 30% through code optimization.",
    "Collaborated with cross-functional teams to define project requirements.",
    "Mentored junior developers and conducted code reviews.",
];

const STRENGTHS: [&str; 3] = [
    "Strong technical background and leadership experience.",
    "Excellent communication and collaboration skills.",
    "Proactive in identifying and solving problems.",
];

const IMPROVEMENTS: [&str; 3] = [
    "Add more quantifiable achievements.",
    "Reduce resume length to 1 page if possible.",
    "Address minor grammar issues.",
];

#[derive(Debug, Clone, Copy)]
enum SampleValue {
    Text(&'static str),
    Count(i64),
}

impl From<SampleValue> for DisplayValue {
    fn from(value: SampleValue) -> Self {
        match value {
            SampleValue::Text(text) => DisplayValue::from(text),
            SampleValue::Count(count) => DisplayValue::Integer(count),
        }
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl AnalysisEngine for SampleEngine {
    fn name(&self) -> &str {
        "sample"
    }

    fn analyze(&self) -> Result<AnalysisResult> {
        let metrics = METRICS
            .iter()
            .map(|&(label, value, percent)| MetricValue::new(label, value, percent))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let result = AnalysisResult::builder()
            .resume_score(87)
            .communication_score(85)
            .readability_score(90)
            .metrics(metrics)
            .radar(RadarProfile::from_pairs(RADAR)?)
            .categories(CategoryDistribution::from_pairs(SKILL_CATEGORIES)?)
            .feedback(FeedbackLists::new(
                owned(&HIGHLIGHTS),
                owned(&STRENGTHS),
                owned(&IMPROVEMENTS),
            )?)
            .build()?;

        Ok(result)
    }
}
