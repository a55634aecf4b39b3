//! Display data for the dashboard: metric strings, pie slices, bar entries
//!
//! Kept free of any UI toolkit so the GUI only has to paint.

use greenmeter_domain::model::{Category, EmissionResult, Evaluation};
use greenmeter_types::format_total;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Qualitative palette for category slices (Tableau 10), one color per category
pub const CATEGORY_PALETTE: [[u8; 3]; Category::ALL.len()] = [
    [0x1f, 0x77, 0xb4],
    [0xff, 0x7f, 0x0e],
    [0x2c, 0xa0, 0x2c],
    [0xd6, 0x27, 0x28],
    [0x94, 0x67, 0xbd],
    [0x8c, 0x56, 0x4b],
    [0xe3, 0x77, 0xc2],
    [0x7f, 0x7f, 0x7f],
    [0xbc, 0xbd, 0x22],
    [0x17, 0xbe, 0xcf],
];

/// Baseline / optimized bar colors
pub const BAR_PALETTE: [[u8; 3]; 2] = [[0x6b, 0xae, 0xd6], [0x08, 0x45, 0x94]];

/// Color of a category, stable across redraws
pub fn category_color(category: Category) -> [u8; 3] {
    let index = Category::ALL
        .iter()
        .position(|c| *c == category)
        .unwrap_or_default();
    CATEGORY_PALETTE[index]
}

/// A headline number
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

pub fn metrics(evaluation: &Evaluation) -> [Metric; 3] {
    [
        Metric {
            label: "Baseline Total (tons CO2e)",
            value: format_total(evaluation.baseline_total()),
        },
        Metric {
            label: "Optimized Total (tons CO2e)",
            value: format_total(evaluation.optimized_total()),
        },
        Metric {
            label: "Reduction (%)",
            value: evaluation.reduction().to_string(),
        },
    ]
}

/// One pie slice. Angles are radians, clockwise from 12 o'clock in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub category: Category,
    pub value: f64,
    pub fraction: f64,
    pub start_angle: f64,
    pub sweep_angle: f64,
}

/// Slices for the categories with positive emissions
pub fn pie_slices(result: &EmissionResult) -> Vec<PieSlice> {
    let positive: Vec<(Category, f64)> = result
        .iter()
        .filter(|(_, v)| v.is_finite() && *v > 0.0)
        .collect();
    let total: f64 = positive.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    positive
        .into_iter()
        .map(|(category, value)| {
            let fraction = value / total;
            let slice = PieSlice {
                category,
                value,
                fraction,
                start_angle: angle,
                sweep_angle: fraction * TAU,
            };
            angle += slice.sweep_angle;
            slice
        })
        .collect()
}

/// One bar of the baseline vs optimized comparison
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: &'static str,
    pub value: f64,
    /// Height relative to the tallest bar, 0..=1
    pub fraction: f64,
    pub color: [u8; 3],
}

pub fn total_bars(evaluation: &Evaluation) -> [BarEntry; 2] {
    let scale = evaluation
        .baseline_total()
        .max(evaluation.optimized_total())
        .max(0.0);
    let fraction = |value: f64| {
        if scale > 0.0 && value.is_finite() {
            (value / scale).clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    [
        BarEntry {
            label: "Baseline",
            value: evaluation.baseline_total(),
            fraction: fraction(evaluation.baseline_total()),
            color: BAR_PALETTE[0],
        },
        BarEntry {
            label: "Optimized",
            value: evaluation.optimized_total(),
            fraction: fraction(evaluation.optimized_total()),
            color: BAR_PALETTE[1],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmeter_domain::model::{ActivityInputs, AdjustmentParameters};
    use greenmeter_domain::service::evaluate;

    fn default_evaluation() -> Evaluation {
        evaluate(&ActivityInputs::default(), &AdjustmentParameters::default())
    }

    #[test]
    fn test_metrics_formatting() {
        let [baseline, optimized, reduction] = metrics(&default_evaluation());
        assert_eq!(baseline.value, "2,780");
        assert_eq!(optimized.value, "2,767");
        assert_eq!(reduction.value, "0.5%");
    }

    #[test]
    fn test_metrics_not_applicable() {
        let evaluation = evaluate(&ActivityInputs::zero(), &AdjustmentParameters::default());
        let [baseline, _, reduction] = metrics(&evaluation);
        assert_eq!(baseline.value, "0");
        assert_eq!(reduction.value, "N/A");
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(default_evaluation().optimized());
        assert_eq!(slices.len(), 10);
        let sweep: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        assert!((sweep - TAU).abs() < 1e-9);
        assert!((slices[0].start_angle + FRAC_PI_2).abs() < 1e-12);

        for pair in slices.windows(2) {
            let end = pair[0].start_angle + pair[0].sweep_angle;
            assert!((pair[1].start_angle - end).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pie_skips_zero_and_negative() {
        let mut inputs = ActivityInputs::zero();
        inputs.cars_km = 1000.0;
        inputs.subcontractors_t = -5.0;
        let evaluation = evaluate(&inputs, &AdjustmentParameters::default());
        let slices = pie_slices(evaluation.optimized());
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].category, Category::Cars);
        assert!((slices[0].fraction - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pie_empty_when_nothing_to_show() {
        let evaluation = evaluate(&ActivityInputs::zero(), &AdjustmentParameters::default());
        assert!(pie_slices(evaluation.optimized()).is_empty());
    }

    #[test]
    fn test_total_bars() {
        let [baseline, optimized] = total_bars(&default_evaluation());
        assert_eq!(baseline.fraction, 1.0);
        assert!(optimized.fraction < 1.0 && optimized.fraction > 0.99);
    }

    #[test]
    fn test_total_bars_zero() {
        let evaluation = evaluate(&ActivityInputs::zero(), &AdjustmentParameters::default());
        let [baseline, optimized] = total_bars(&evaluation);
        assert_eq!(baseline.fraction, 0.0);
        assert_eq!(optimized.fraction, 0.0);
    }

    #[test]
    fn test_category_colors_are_distinct() {
        assert_eq!(category_color(Category::Cars), CATEGORY_PALETTE[0]);
        assert_eq!(category_color(Category::Subcontractors), CATEGORY_PALETTE[9]);

        let mut colors: Vec<[u8; 3]> = Category::ALL.iter().map(|c| category_color(*c)).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), Category::ALL.len());
    }
}
