use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::constants::scores;
use crate::core::error::ValidationError;
use crate::model::record::CategoryRecord;

/// A named, weighted share of the skill distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryRecord")]
pub struct Category {
    name: String,
    weight: f64,
}

impl Category {
    pub fn new<S: Into<String>>(name: S, weight: f64) -> Result<Self, ValidationError> {
        let category = Self {
            name: name.into(),
            weight,
        };
        category.validate()?;
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(ValidationError::InvalidWeight {
                category: self.name.clone(),
                weight: self.weight,
            });
        }
        Ok(())
    }
}

impl TryFrom<CategoryRecord> for Category {
    type Error = ValidationError;

    fn try_from(record: CategoryRecord) -> Result<Self, Self::Error> {
        Self::new(record.name, record.weight)
    }
}

/// Weighted categories whose weights add up to a positive total.
///
/// Individual categories may weigh zero; the distribution as a whole may not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryDistribution {
    categories: Vec<Category>,
}

impl CategoryDistribution {
    pub fn new(categories: Vec<Category>) -> Result<Self, ValidationError> {
        let distribution = Self { categories };
        distribution.validate()?;
        Ok(distribution)
    }

    /// Build a distribution from `(name, weight)` pairs
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let categories = pairs
            .into_iter()
            .map(|(name, weight)| Category::new(name, weight))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated distribution
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.categories.iter().map(Category::weight).sum()
    }

    /// Unrounded share of each category, in insertion order
    pub fn normalized_percents(&self) -> Vec<f64> {
        let total = self.total_weight();
        self.categories
            .iter()
            .map(|c| c.weight() / total * f64::from(scores::PERCENT_TOTAL))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.categories.is_empty() {
            return Err(ValidationError::EmptyDistribution);
        }

        let mut seen = FxHashSet::default();
        for category in &self.categories {
            category.validate()?;
            if !seen.insert(category.name()) {
                return Err(ValidationError::DuplicateCategory(
                    category.name().to_string(),
                ));
            }
        }

        let total = self.total_weight();
        if !total.is_finite() {
            return Err(ValidationError::TotalWeightNotFinite);
        }
        if total <= 0.0 {
            return Err(ValidationError::ZeroTotalWeight);
        }
        Ok(())
    }
}

impl TryFrom<Vec<Category>> for CategoryDistribution {
    type Error = ValidationError;

    fn try_from(categories: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(categories)
    }
}

impl From<CategoryDistribution> for Vec<Category> {
    fn from(distribution: CategoryDistribution) -> Self {
        distribution.categories
    }
}
