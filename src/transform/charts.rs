use log::debug;
use serde::Serialize;
use std::cmp::Ordering;

use crate::core::constants::{scores, style};
use crate::core::error::ValidationError;
use crate::model::AnalysisResult;

/// One point of the radar series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub axis_name: String,
    pub score: u32,
}

/// One slice of the category pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub category_name: String,
    pub percent: u32,
    pub color_index: usize,
}

/// Radar axes in insertion order, never re-sorted by score
pub fn to_radar_series(result: &AnalysisResult) -> Result<Vec<RadarPoint>, ValidationError> {
    result.validate()?;

    Ok(result
        .radar()
        .axes()
        .iter()
        .map(|axis| RadarPoint {
            axis_name: axis.name().to_string(),
            score: axis.score(),
        })
        .collect())
}

/// Category slices colored against the default five-color palette
pub fn to_category_slices(result: &AnalysisResult) -> Result<Vec<CategorySlice>, ValidationError> {
    to_category_slices_with_palette(result, style::DEFAULT_PALETTE.len())
}

/// Category slices whose percents add up to exactly 100.
///
/// Each percent is `round(weight / total * 100)`. Whatever the rounding
/// leaves over is absorbed by the largest slice. `color_index` is the
/// slice position modulo `palette_size`.
///
/// # Examples
/// ```
/// use resumeboard::engine::{AnalysisEngine, SampleEngine};
/// use resumeboard::transform::to_category_slices_with_palette;
///
/// let result = SampleEngine.analyze().unwrap();
/// let slices = to_category_slices_with_palette(&result, 3).unwrap();
/// let percents: Vec<u32> = slices.iter().map(|s| s.percent).collect();
/// assert_eq!(percents, [40, 20, 15, 10, 15]);
/// assert_eq!(slices[4].color_index, 1);
/// ```
pub fn to_category_slices_with_palette(
    result: &AnalysisResult,
    palette_size: usize,
) -> Result<Vec<CategorySlice>, ValidationError> {
    result.validate()?;
    if palette_size == 0 {
        return Err(ValidationError::EmptyPalette);
    }

    let distribution = result.categories();
    let weights: Vec<f64> = distribution.categories().iter().map(|c| c.weight()).collect();

    let mut percents: Vec<i64> = distribution
        .normalized_percents()
        .into_iter()
        .map(|p| p.round() as i64)
        .collect();

    let residue = i64::from(scores::PERCENT_TOTAL) - percents.iter().sum::<i64>();
    if residue != 0 {
        debug!("Absorbing rounding residue of {residue} into the largest category");
        absorb_residue(&mut percents, &weights, residue);
    }

    if distribution.len() > palette_size {
        debug!(
            "{} categories share a palette of {palette_size} colors",
            distribution.len()
        );
    }

    Ok(distribution
        .categories()
        .iter()
        .zip(percents)
        .enumerate()
        .map(|(position, (category, percent))| CategorySlice {
            category_name: category.name().to_string(),
            percent: u32::try_from(percent).unwrap_or(0),
            color_index: position % palette_size,
        })
        .collect())
}

/// Push the rounding residue onto the heaviest category.
///
/// Ties go to the category inserted first. A negative residue larger
/// than the heaviest slice (only possible with very many categories)
/// keeps drawing from the next heaviest ones, so no slice goes below zero.
fn absorb_residue(percents: &mut [i64], weights: &[f64], residue: i64) {
    let mut by_weight: Vec<usize> = (0..percents.len()).collect();
    by_weight.sort_by(|&a, &b| weights[b].partial_cmp(&weights[a]).unwrap_or(Ordering::Equal));

    if residue > 0 {
        if let Some(&largest) = by_weight.first() {
            percents[largest] += residue;
        }
        return;
    }

    let mut remaining = -residue;
    for idx in by_weight {
        if remaining == 0 {
            break;
        }
        let taken = remaining.min(percents[idx]);
        percents[idx] -= taken;
        remaining -= taken;
    }
}
