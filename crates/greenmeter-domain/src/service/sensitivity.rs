//! One-lever sensitivity sweep

use greenmeter_types::{Error, Result};
use serde::Serialize;

use crate::model::{ActivityInputs, AdjustmentParameters, Lever, Reduction};
use crate::service::emissions_calculator::evaluate;

/// Result of evaluating one lever setting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Lever value in percent
    pub value: f64,
    pub baseline_total: f64,
    pub optimized_total: f64,
    pub reduction: Reduction,
}

/// Smallest accepted step; bounds a sweep to at most 10,001 points
pub const MIN_SWEEP_STEP: f64 = 0.01;

/// Accept a sweep step in [MIN_SWEEP_STEP, 100]
pub fn check_step(step: f64) -> Result<f64> {
    if (MIN_SWEEP_STEP..=100.0).contains(&step) {
        Ok(step)
    } else {
        Err(Error::InvalidInput(format!(
            "sweep step must be between {} and 100, got {}",
            MIN_SWEEP_STEP, step
        )))
    }
}

/// Evaluate `lever` at 0, step, 2*step, ... and finally 100, holding the other
/// levers at their values in `params`. Each point is a full, independent evaluation.
pub fn sweep(
    inputs: &ActivityInputs,
    params: &AdjustmentParameters,
    lever: Lever,
    step: f64,
) -> Result<Vec<SweepPoint>> {
    let step = check_step(step)?;

    let steps = (100.0 / step).floor() as usize;
    let mut values: Vec<f64> = (0..=steps).map(|i| (i as f64 * step).min(100.0)).collect();
    if values.last().is_some_and(|last| 100.0 - last > 1e-9) {
        values.push(100.0);
    }

    let points = values
        .into_iter()
        .map(|value| {
            let eval = evaluate(inputs, &params.with(lever, value));
            SweepPoint {
                value,
                baseline_total: eval.baseline_total(),
                optimized_total: eval.optimized_total(),
                reduction: eval.reduction(),
            }
        })
        .collect();

    Ok(points)
}
