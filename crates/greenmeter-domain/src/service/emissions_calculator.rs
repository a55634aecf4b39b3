//! Baseline and optimized emission calculation
//!
//! # Formulas
//! - measured category: `activity x factor / 1000`
//! - planes: `hours x factor x load_factor / 1000`
//! - optimized cars: `km x factor x (1 - 0.7 x ev_share) x (1 - km_reduction) / 1000`
//! - subcontractors: passed through in tons CO2e
//!
//! Percentages are given in 0-100 and divided by 100 here.

use std::collections::BTreeMap;

use crate::model::{
    ActivityInputs, AdjustmentParameters, Category, EmissionFactorTable, EmissionResult,
    Evaluation, STANDARD_FACTORS,
};

/// Factor values are per kg; results are reported in tons
pub const KG_PER_TON: f64 = 1000.0;

/// EVs emit 70% less than gasoline cars
pub const EV_EMISSION_REDUCTION: f64 = 0.7;

/// Evaluate both scenarios against the reference factor table
pub fn evaluate(inputs: &ActivityInputs, params: &AdjustmentParameters) -> Evaluation {
    evaluate_with_factors(&STANDARD_FACTORS, inputs, params)
}

pub fn evaluate_with_factors(
    factors: &EmissionFactorTable,
    inputs: &ActivityInputs,
    params: &AdjustmentParameters,
) -> Evaluation {
    let baseline: BTreeMap<Category, f64> = Category::ALL
        .iter()
        .map(|&category| (category, baseline_emissions(factors, category, inputs, params)))
        .collect();

    let mut optimized = baseline.clone();
    if let Some(factor) = factors.factor(Category::Cars) {
        optimized.insert(
            Category::Cars,
            optimized_car_emissions(inputs.cars_km, factor, params),
        );
    }

    Evaluation::new(
        EmissionResult::from_values(baseline),
        EmissionResult::from_values(optimized),
    )
}

fn baseline_emissions(
    factors: &EmissionFactorTable,
    category: Category,
    inputs: &ActivityInputs,
    params: &AdjustmentParameters,
) -> f64 {
    let activity = inputs.get(category);
    match factors.factor(category) {
        None => activity,
        Some(factor) if category == Category::Planes => {
            (activity * factor * (params.load_factor_pct / 100.0)) / KG_PER_TON
        }
        Some(factor) => (activity * factor) / KG_PER_TON,
    }
}

fn optimized_car_emissions(cars_km: f64, factor: f64, params: &AdjustmentParameters) -> f64 {
    (cars_km
        * factor
        * (1.0 - EV_EMISSION_REDUCTION * (params.ev_share_pct / 100.0))
        * (1.0 - params.km_reduction_pct / 100.0))
        / KG_PER_TON
}
