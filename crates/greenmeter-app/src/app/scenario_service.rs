//! Scenario Service - resolve inputs and run the calculator
//!
//! Inputs are layered, later sources winning:
//! 1. Built-in defaults
//! 2. Config file
//! 3. Scenario file (TOML)
//! 4. Explicit overrides (CLI flags)

use greenmeter_domain::model::{
    check_percent, ActivityInputs, AdjustmentParameters, Category, Evaluation, Lever,
};
use greenmeter_domain::service::evaluate;
use greenmeter_infra::Scenario;
use greenmeter_types::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;

/// Options for resolving a scenario
#[derive(Debug, Clone, Default)]
pub struct ScenarioOptions {
    /// TOML scenario file applied on top of config defaults
    pub scenario_file: Option<PathBuf>,

    /// Per-category activity overrides
    pub activity_overrides: Vec<(Category, f64)>,

    /// Lever overrides in percent
    pub adjustment_overrides: Vec<(Lever, f64)>,

    /// Print resolution steps to stderr
    pub verbose: bool,
}

impl ScenarioOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scenario_file(mut self, path: PathBuf) -> Self {
        self.scenario_file = Some(path);
        self
    }

    pub fn with_activity(mut self, category: Category, value: f64) -> Self {
        self.activity_overrides.push((category, value));
        self
    }

    pub fn with_adjustment(mut self, lever: Lever, value: f64) -> Self {
        self.adjustment_overrides.push((lever, value));
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Fully resolved calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedScenario {
    pub inputs: ActivityInputs,
    pub adjustments: AdjustmentParameters,
}

/// Resolve calculator inputs from config, scenario file and overrides
pub fn resolve_scenario(config: &Config, options: &ScenarioOptions) -> Result<ResolvedScenario> {
    let mut inputs = config.activity;
    let mut adjustments = config.adjustments;

    if let Some(ref path) = options.scenario_file {
        let scenario = Scenario::load_from_file(path)?;
        if options.verbose {
            eprintln!(
                "Scenario {}: {} field(s) applied",
                path.display(),
                scenario.field_count()
            );
        }
        scenario.apply(&mut inputs, &mut adjustments);
    }

    for &(category, value) in &options.activity_overrides {
        if !value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "{} must be a finite number, got {}",
                category.input_label(),
                value
            )));
        }
        if options.verbose {
            eprintln!("Override {} = {}", category, value);
        }
        inputs.set(category, value);
    }

    for &(lever, value) in &options.adjustment_overrides {
        *adjustments.get_mut(lever) = check_percent(lever.label(), value)?;
        if options.verbose {
            eprintln!("Override {} = {}", lever, value);
        }
    }

    Ok(ResolvedScenario { inputs, adjustments })
}

/// Resolve inputs and evaluate them once
pub fn evaluate_scenario(
    config: &Config,
    options: &ScenarioOptions,
) -> Result<(ResolvedScenario, Evaluation)> {
    let resolved = resolve_scenario(config, options)?;
    let evaluation = evaluate(&resolved.inputs, &resolved.adjustments);
    if options.verbose {
        eprintln!(
            "Evaluated: baseline {:.3} t, optimized {:.3} t",
            evaluation.baseline_total(), evaluation.optimized_total()
        );
    }
    Ok((resolved, evaluation))
}
