//! Scenario loader from TOML files
//!
//! ```toml
//! [activity]
//! cars_km = 250000
//! planes_hr = 400
//!
//! [adjustments]
//! ev_share_pct = 30
//! ```
//!
//! Every table and field is optional. Fields that are absent leave the
//! current value untouched when the scenario is applied.

use greenmeter_domain::model::{check_percent, ActivityInputs, AdjustmentParameters, Category, Lever};
use greenmeter_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActivityPatch {
    cars_km: Option<f64>,
    trucks_km: Option<f64>,
    buses_km: Option<f64>,
    forklifts_hr: Option<f64>,
    planes_hr: Option<f64>,
    lighting_kwh: Option<f64>,
    heating_kwh_th: Option<f64>,
    cooling_kwh: Option<f64>,
    computing_kwh: Option<f64>,
    subcontractors_t: Option<f64>,
}

impl ActivityPatch {
    fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Cars => self.cars_km,
            Category::Trucks => self.trucks_km,
            Category::Buses => self.buses_km,
            Category::Forklifts => self.forklifts_hr,
            Category::Planes => self.planes_hr,
            Category::Lighting => self.lighting_kwh,
            Category::Heating => self.heating_kwh_th,
            Category::Cooling => self.cooling_kwh,
            Category::Computing => self.computing_kwh,
            Category::Subcontractors => self.subcontractors_t,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
struct AdjustmentPatch {
    ev_share_pct: Option<f64>,
    km_reduction_pct: Option<f64>,
    load_factor_pct: Option<f64>,
}

impl AdjustmentPatch {
    fn get(&self, lever: Lever) -> Option<f64> {
        match lever {
            Lever::EvShare => self.ev_share_pct,
            Lever::KmReduction => self.km_reduction_pct,
            Lever::LoadFactor => self.load_factor_pct,
        }
    }
}

/// Partial set of inputs read from a scenario file
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    activity: ActivityPatch,
    #[serde(default)]
    adjustments: AdjustmentPatch,
}

impl Scenario {
    /// Load a scenario from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read scenario file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a scenario from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse scenario TOML: {}",
                e
            )))
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            if let Some(value) = self.activity.get(category) {
                if !value.is_finite() {
                    return Err(ConfigError::ParseError(format!(
                        "{} must be a finite number, got {}",
                        category.input_label(),
                        value
                    ))
                    .into());
                }
            }
        }
        for lever in Lever::ALL {
            if let Some(value) = self.adjustments.get(lever) {
                check_percent(lever.label(), value)
                    .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// Overwrite the values this scenario specifies
    pub fn apply(&self, inputs: &mut ActivityInputs, params: &mut AdjustmentParameters) {
        for category in Category::ALL {
            if let Some(value) = self.activity.get(category) {
                inputs.set(category, value);
            }
        }
        for lever in Lever::ALL {
            if let Some(value) = self.adjustments.get(lever) {
                *params.get_mut(lever) = value;
            }
        }
    }

    /// Number of fields set by the scenario
    pub fn field_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.activity.get(**c).is_some())
            .count()
            + Lever::ALL
                .iter()
                .filter(|l| self.adjustments.get(**l).is_some())
                .count()
    }
}
