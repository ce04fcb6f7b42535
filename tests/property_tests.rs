//! Property-based tests for resumeboard using proptest
//!
//! These tests generate random analysis results to check that the
//! presentation transforms hold their guarantees for every valid input.

use proptest::prelude::*;
use resumeboard::model::{
    AnalysisResult, CategoryDistribution, FeedbackLists, MetricValue, RadarProfile,
};
use resumeboard::transform::{
    DashboardView, to_category_slices_with_palette, to_feedback_sections, to_metric_cards,
    to_radar_series, to_summary_cards,
};

/// Distinct, non-blank names in arbitrary order
fn names(count: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Za-z][A-Za-z ]{0,12}", count)
        .prop_flat_map(|set| Just(set.into_iter().collect::<Vec<_>>()).prop_shuffle())
}

fn radar_pairs_strategy() -> impl Strategy<Value = Vec<(String, u32)>> {
    names(3..10).prop_flat_map(|axes| {
        let len = axes.len();
        (Just(axes), prop::collection::vec(0u32..=100, len))
            .prop_map(|(axes, scores)| axes.into_iter().zip(scores).collect())
    })
}

fn radar_strategy() -> impl Strategy<Value = RadarProfile> {
    radar_pairs_strategy().prop_map(|pairs| RadarProfile::from_pairs(pairs).unwrap())
}

fn category_pairs_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    names(1..20)
        .prop_flat_map(|categories| {
            let len = categories.len();
            (Just(categories), prop::collection::vec(0.0f64..1000.0, len))
        })
        .prop_filter("need a positive total", |(_, weights)| {
            weights.iter().sum::<f64>() > 0.0
        })
        .prop_map(|(categories, weights)| categories.into_iter().zip(weights).collect())
}

fn categories_strategy() -> impl Strategy<Value = CategoryDistribution> {
    category_pairs_strategy().prop_map(|pairs| CategoryDistribution::from_pairs(pairs).unwrap())
}

fn result_from_parts(
    radar: Vec<(String, u32)>,
    categories: Vec<(String, f64)>,
) -> AnalysisResult {
    AnalysisResult::builder()
        .resume_score(50)
        .communication_score(50)
        .readability_score(50)
        .radar(RadarProfile::from_pairs(radar).unwrap())
        .categories(CategoryDistribution::from_pairs(categories).unwrap())
        .build()
        .unwrap()
}

fn metrics_strategy() -> impl Strategy<Value = Vec<MetricValue>> {
    names(0..8).prop_flat_map(|labels| {
        let len = labels.len();
        (Just(labels), prop::collection::vec(prop::option::of(0u32..=100), len))
            .prop_map(|(labels, percents)| {
                labels
                    .into_iter()
                    .zip(percents)
                    .enumerate()
                    .map(|(i, (label, percent))| MetricValue::new(label, i as i64, percent).unwrap())
                    .collect()
            })
    })
}

fn feedback_strategy() -> impl Strategy<Value = FeedbackLists> {
    let entries = || prop::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,4}", 0..5);
    (entries(), entries(), entries())
        .prop_map(|(h, s, i)| FeedbackLists::new(h, s, i).unwrap())
}

fn result_strategy() -> impl Strategy<Value = AnalysisResult> {
    (
        0u32..=100,
        0u32..=100,
        0u32..=100,
        metrics_strategy(),
        radar_strategy(),
        categories_strategy(),
        feedback_strategy(),
    )
        .prop_map(|(resume, communication, readability, metrics, radar, categories, feedback)| {
            AnalysisResult::new(
                resume,
                communication,
                readability,
                metrics,
                radar,
                categories,
                feedback,
            )
            .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_category_slices_sum_to_100(
        result in result_strategy(),
        palette_size in 1usize..8,
    ) {
        let slices = to_category_slices_with_palette(&result, palette_size).unwrap();

        prop_assert_eq!(slices.len(), result.categories().len());
        prop_assert_eq!(slices.iter().map(|s| s.percent).sum::<u32>(), 100);
        for (position, slice) in slices.iter().enumerate() {
            prop_assert_eq!(slice.color_index, position % palette_size);
            prop_assert!(slice.color_index < palette_size);
            prop_assert!(slice.percent <= 100);
        }
    }

    #[test]
    fn test_summary_cards_are_three_in_order(result in result_strategy()) {
        let cards = to_summary_cards(&result).unwrap();

        prop_assert_eq!(cards.len(), 3);
        prop_assert_eq!(cards[0].score, result.resume_score());
        prop_assert_eq!(cards[1].score, result.communication_score());
        prop_assert_eq!(cards[2].score, result.readability_score());
        prop_assert!(cards.iter().all(|c| c.max_score == 100));
    }

    #[test]
    fn test_radar_series_preserves_axes(result in result_strategy()) {
        let series = to_radar_series(&result).unwrap();
        let axes = result.radar().axes();

        prop_assert_eq!(series.len(), axes.len());
        for (point, axis) in series.iter().zip(axes) {
            prop_assert_eq!(point.axis_name.as_str(), axis.name());
            prop_assert_eq!(point.score, axis.score());
        }
    }

    #[test]
    fn test_radar_series_follows_insertion_order(
        radar in radar_pairs_strategy(),
        categories in category_pairs_strategy(),
    ) {
        let result = result_from_parts(radar.clone(), categories);
        let series = to_radar_series(&result).unwrap();

        let produced: Vec<(String, u32)> = series
            .into_iter()
            .map(|point| (point.axis_name, point.score))
            .collect();
        prop_assert_eq!(produced, radar);
    }

    #[test]
    fn test_category_slices_follow_insertion_order(
        radar in radar_pairs_strategy(),
        categories in category_pairs_strategy(),
        palette_size in 1usize..8,
    ) {
        let result = result_from_parts(radar, categories.clone());
        let slices = to_category_slices_with_palette(&result, palette_size).unwrap();

        prop_assert_eq!(slices.len(), categories.len());
        for (position, (slice, (name, _))) in slices.iter().zip(&categories).enumerate() {
            prop_assert_eq!(&slice.category_name, name);
            prop_assert_eq!(slice.color_index, position % palette_size);
        }
        prop_assert_eq!(slices.iter().map(|s| s.percent).sum::<u32>(), 100);
    }

    #[test]
    fn test_metric_cards_match_metrics(result in result_strategy()) {
        let cards = to_metric_cards(&result).unwrap();

        prop_assert_eq!(cards.len(), result.metrics().len());
        for (card, metric) in cards.iter().zip(result.metrics()) {
            prop_assert_eq!(card.label.as_str(), metric.label());
            prop_assert_eq!(card.percent, metric.percent());
        }
    }

    #[test]
    fn test_feedback_passes_through(result in result_strategy()) {
        let sections = to_feedback_sections(&result).unwrap();

        prop_assert_eq!(sections.highlights.as_slice(), result.feedback().highlights());
        prop_assert_eq!(sections.strengths.as_slice(), result.feedback().strengths());
        prop_assert_eq!(sections.improvements.as_slice(), result.feedback().improvements());
    }

    #[test]
    fn test_transforms_are_deterministic(result in result_strategy()) {
        let first = DashboardView::build(&result, 5).unwrap();
        let second = DashboardView::build(&result, 5).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_scores_rejected(score in 101u32..10_000) {
        let result = AnalysisResult::builder()
            .resume_score(score)
            .communication_score(50)
            .readability_score(50)
            .radar(RadarProfile::from_pairs([("A", 1), ("B", 2), ("C", 3)]).unwrap())
            .categories(CategoryDistribution::from_pairs([("Other", 1.0)]).unwrap())
            .build();
        prop_assert!(result.is_err());
    }
}
