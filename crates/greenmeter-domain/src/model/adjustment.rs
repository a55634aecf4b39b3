//! Optimization levers applied to the baseline

use greenmeter_types::{Error, Result};
use serde::{Deserialize, Serialize};

/// The three adjustable percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentParameters {
    /// Share of the car fleet that is electric (%)
    pub ev_share_pct: f64,
    /// Reduction of car distance travelled (%)
    pub km_reduction_pct: f64,
    /// Aircraft load factor (%)
    pub load_factor_pct: f64,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            ev_share_pct: 30.0,
            km_reduction_pct: 10.0,
            load_factor_pct: 60.0,
        }
    }
}

/// Identifies one of the adjustment parameters. Serialized the same way it is
/// displayed and typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Lever {
    EvShare,
    KmReduction,
    LoadFactor,
}

impl Lever {
    pub const ALL: [Lever; 3] = [Lever::EvShare, Lever::KmReduction, Lever::LoadFactor];

    /// Slider label
    pub fn label(&self) -> &'static str {
        match self {
            Lever::EvShare => "EV Share for Cars (%)",
            Lever::KmReduction => "KM Reduction for Cars (%)",
            Lever::LoadFactor => "Plane Load Factor (%)",
        }
    }
}

impl std::fmt::Display for Lever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lever::EvShare => write!(f, "ev-share"),
            Lever::KmReduction => write!(f, "km-reduction"),
            Lever::LoadFactor => write!(f, "load-factor"),
        }
    }
}

impl AdjustmentParameters {
    pub fn get(&self, lever: Lever) -> f64 {
        match lever {
            Lever::EvShare => self.ev_share_pct,
            Lever::KmReduction => self.km_reduction_pct,
            Lever::LoadFactor => self.load_factor_pct,
        }
    }

    pub fn get_mut(&mut self, lever: Lever) -> &mut f64 {
        match lever {
            Lever::EvShare => &mut self.ev_share_pct,
            Lever::KmReduction => &mut self.km_reduction_pct,
            Lever::LoadFactor => &mut self.load_factor_pct,
        }
    }

    /// Copy with one lever replaced
    pub fn with(&self, lever: Lever, value: f64) -> Self {
        let mut adjusted = *self;
        *adjusted.get_mut(lever) = value;
        adjusted
    }

    /// Range check for the input boundary. The calculator itself does not call this.
    pub fn check_range(&self) -> Result<()> {
        for lever in Lever::ALL {
            check_percent(lever.label(), self.get(lever))?;
        }
        Ok(())
    }
}

/// Accept a percentage in [0, 100]
pub fn check_percent(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be between 0 and 100, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = AdjustmentParameters::default();
        assert_eq!(params.ev_share_pct, 30.0);
        assert_eq!(params.km_reduction_pct, 10.0);
        assert_eq!(params.load_factor_pct, 60.0);
    }

    #[test]
    fn test_with_replaces_only_one_lever() {
        let params = AdjustmentParameters::default().with(Lever::LoadFactor, 85.0);
        assert_eq!(params.load_factor_pct, 85.0);
        assert_eq!(params.ev_share_pct, 30.0);
        assert_eq!(params.km_reduction_pct, 10.0);
    }

    #[test]
    fn test_check_range_bounds_inclusive() {
        let params = AdjustmentParameters {
            ev_share_pct: 0.0,
            km_reduction_pct: 100.0,
            load_factor_pct: 50.0,
        };
        assert!(params.check_range().is_ok());
    }

    #[test]
    fn test_check_range_rejects_out_of_range() {
        let params = AdjustmentParameters::default().with(Lever::EvShare, 120.0);
        let err = params.check_range().unwrap_err();
        assert!(err.to_string().contains("EV Share"));

        assert!(check_percent("x", -0.5).is_err());
        assert!(check_percent("x", f64::NAN).is_err());
    }

    #[test]
    fn test_lever_display() {
        assert_eq!(Lever::KmReduction.to_string(), "km-reduction");
    }

    #[test]
    fn test_lever_json_matches_display() {
        for lever in Lever::ALL {
            let json = serde_json::to_string(&lever).unwrap();
            assert_eq!(json, format!("\"{}\"", lever));
        }
        let lever: Lever = serde_json::from_str("\"load-factor\"").unwrap();
        assert_eq!(lever, Lever::LoadFactor);
    }
}
