use serde::Serialize;

use crate::core::constants::{scores, titles};
use crate::core::error::ValidationError;
use crate::model::{AnalysisResult, DisplayValue};

/// Headline score card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: String,
    pub score: u32,
    pub max_score: u32,
}

/// Per-metric indicator card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: DisplayValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<u32>,
}

/// Headline scores in the fixed order resume, communication, readability.
///
/// # Examples
/// ```
/// use resumeboard::engine::{AnalysisEngine, SampleEngine};
/// use resumeboard::transform::to_summary_cards;
///
/// let result = SampleEngine.analyze().unwrap();
/// let cards = to_summary_cards(&result).unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[0].title, "Resume Score");
/// assert_eq!(cards[0].score, 87);
/// ```
pub fn to_summary_cards(result: &AnalysisResult) -> Result<[SummaryCard; 3], ValidationError> {
    result.validate()?;

    let card = |title: &str, score: u32| SummaryCard {
        title: title.to_string(),
        score,
        max_score: scores::MAX_SCORE,
    };

    Ok([
        card(titles::RESUME_SCORE, result.resume_score()),
        card(titles::COMMUNICATION, result.communication_score()),
        card(titles::READABILITY, result.readability_score()),
    ])
}

/// One card per metric, same order, nothing filtered out
pub fn to_metric_cards(result: &AnalysisResult) -> Result<Vec<MetricCard>, ValidationError> {
    result.validate()?;

    Ok(result
        .metrics()
        .iter()
        .map(|metric| MetricCard {
            label: metric.label().to_string(),
            value: metric.value().clone(),
            percent: metric.percent(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryDistribution, MetricValue, RadarProfile};

    fn result_with_metrics(metrics: Vec<MetricValue>) -> AnalysisResult {
        AnalysisResult::builder()
            .resume_score(87)
            .communication_score(85)
            .readability_score(90)
            .metrics(metrics)
            .radar(RadarProfile::from_pairs([("A", 1), ("B", 2), ("C", 3)]).unwrap())
            .categories(CategoryDistribution::from_pairs([("Technical", 1.0)]).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_summary_cards_fixed_order() {
        let cards = to_summary_cards(&result_with_metrics(Vec::new())).unwrap();

        let expected = [("Resume Score", 87), ("Communication", 85), ("Readability", 90)];
        for (card, (title, score)) in cards.iter().zip(expected) {
            assert_eq!(card.title, title);
            assert_eq!(card.score, score);
            assert_eq!(card.max_score, 100);
        }
    }

    #[test]
    fn test_metric_cards_preserve_order_and_count() {
        let labels = [
            "ATS Compatibility",
            "Keyword Match",
            "Experience Relevance",
            "Resume Length",
            "Action Verbs Used",
            "Grammar Issues",
            "Read Time",
        ];
        let metrics = labels
            .iter()
            .map(|label| MetricValue::new(*label, "x", None).unwrap())
            .collect();

        let cards = to_metric_cards(&result_with_metrics(metrics)).unwrap();
        assert_eq!(cards.len(), 7);
        let card_labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(card_labels, labels);
    }

    #[test]
    fn test_metric_card_keeps_value_and_percent() {
        let metrics = vec![
            MetricValue::new("ATS Compatibility", "Yes", Some(92)).unwrap(),
            MetricValue::new("Grammar Issues", 2, None).unwrap(),
        ];
        let cards = to_metric_cards(&result_with_metrics(metrics)).unwrap();

        assert_eq!(cards[0].value, DisplayValue::Text("Yes".to_string()));
        assert_eq!(cards[0].percent, Some(92));
        assert_eq!(cards[1].value, DisplayValue::Integer(2));
        assert_eq!(cards[1].percent, None);
    }

    #[test]
    fn test_empty_metrics_give_no_cards() {
        let cards = to_metric_cards(&result_with_metrics(Vec::new())).unwrap();
        assert!(cards.is_empty());
    }
}
