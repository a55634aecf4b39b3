//! Evaluation results

use greenmeter_types::format_percent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Category;

/// Emissions per category in tons CO2e
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmissionResult {
    values: BTreeMap<Category, f64>,
}

impl EmissionResult {
    pub(crate) fn from_values(values: BTreeMap<Category, f64>) -> Self {
        Self { values }
    }

    /// Emissions for one category; a category without an entry reads as zero
    pub fn get(&self, category: Category) -> f64 {
        self.values.get(&category).copied().unwrap_or_default()
    }

    /// Entries in category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all categories, accumulated in category order
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Fraction of the total per category. Empty when the total is zero or not finite.
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let total = self.total();
        if total == 0.0 || !total.is_finite() {
            return Vec::new();
        }
        self.iter().map(|(c, v)| (c, v / total)).collect()
    }
}

/// Relative reduction from baseline to optimized
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reduction {
    Percent(f64),
    /// Baseline total is zero
    NotApplicable,
}

impl Reduction {
    pub fn between(baseline_total: f64, optimized_total: f64) -> Self {
        if baseline_total == 0.0 {
            return Reduction::NotApplicable;
        }
        let pct = (1.0 - optimized_total / baseline_total) * 100.0;
        if pct.is_finite() {
            Reduction::Percent(pct)
        } else {
            Reduction::NotApplicable
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Reduction::Percent(p) => Some(*p),
            Reduction::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Reduction::Percent(_))
    }
}

impl std::fmt::Display for Reduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reduction::Percent(p) => write!(f, "{}", format_percent(*p)),
            Reduction::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Baseline and optimized values of one category side by side
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryComparison {
    pub category: Category,
    pub baseline: f64,
    pub optimized: f64,
    /// optimized - baseline
    pub change: f64,
}

/// Output of one calculator run. Totals are derived from the per-category
/// results on construction and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    baseline: EmissionResult,
    optimized: EmissionResult,
    baseline_total: f64,
    optimized_total: f64,
    reduction: Reduction,
}

impl Evaluation {
    pub(crate) fn new(baseline: EmissionResult, optimized: EmissionResult) -> Self {
        let baseline_total = baseline.total();
        let optimized_total = optimized.total();
        Self {
            reduction: Reduction::between(baseline_total, optimized_total),
            baseline,
            optimized,
            baseline_total,
            optimized_total,
        }
    }

    pub fn baseline(&self) -> &EmissionResult {
        &self.baseline
    }

    pub fn optimized(&self) -> &EmissionResult {
        &self.optimized
    }

    pub fn baseline_total(&self) -> f64 {
        self.baseline_total
    }

    pub fn optimized_total(&self) -> f64 {
        self.optimized_total
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    pub fn comparisons(&self) -> Vec<CategoryComparison> {
        self.baseline
            .iter()
            .map(|(category, baseline)| {
                let optimized = self.optimized.get(category);
                CategoryComparison {
                    category,
                    baseline,
                    optimized,
                    change: optimized - baseline,
                }
            })
            .collect()
    }

    /// Shares of the optimized scenario, for the breakdown chart
    pub fn optimized_shares(&self) -> Vec<(Category, f64)> {
        self.optimized.shares()
    }
}
