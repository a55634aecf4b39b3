//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use greenmeter_domain::model::{check_percent, Category, Lever};
use greenmeter_domain::service::check_step;
use greenmeter_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "green-meter")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Carbon emission estimator comparing baseline and optimized operations")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// TOML scenario file applied on top of the config defaults
    #[arg(long, short = 's', global = true)]
    pub scenario: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Yearly activity values. Unset values come from the scenario file or config.
#[derive(Args, Debug, Clone, Default)]
pub struct ActivityArgs {
    /// Cars - distance (km/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub cars_km: Option<f64>,

    /// Trucks - distance (km/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub trucks_km: Option<f64>,

    /// Buses - distance (km/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub buses_km: Option<f64>,

    /// Forklifts - operating time (hours/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub forklifts_hr: Option<f64>,

    /// Cargo planes - flight time (hours/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub planes_hr: Option<f64>,

    /// Office lighting - electricity (kWh/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub lighting_kwh: Option<f64>,

    /// Heating - thermal energy (kWh-th/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub heating_kwh_th: Option<f64>,

    /// Cooling (A/C) - electricity (kWh/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub cooling_kwh: Option<f64>,

    /// Computing (IT) - electricity (kWh/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub computing_kwh: Option<f64>,

    /// Subcontractors - total (tons CO2e/year)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_finite)]
    pub subcontractors_t: Option<f64>,
}

impl ActivityArgs {
    pub fn overrides(&self) -> Vec<(Category, f64)> {
        [
            (Category::Cars, self.cars_km),
            (Category::Trucks, self.trucks_km),
            (Category::Buses, self.buses_km),
            (Category::Forklifts, self.forklifts_hr),
            (Category::Planes, self.planes_hr),
            (Category::Lighting, self.lighting_kwh),
            (Category::Heating, self.heating_kwh_th),
            (Category::Cooling, self.cooling_kwh),
            (Category::Computing, self.computing_kwh),
            (Category::Subcontractors, self.subcontractors_t),
        ]
        .into_iter()
        .filter_map(|(category, value)| value.map(|v| (category, v)))
        .collect()
    }
}

/// Slider values in percent (0-100)
#[derive(Args, Debug, Clone, Default)]
pub struct AdjustmentArgs {
    /// EV share for cars (%)
    #[arg(long, value_parser = parse_percent)]
    pub ev_share: Option<f64>,

    /// KM reduction for cars (%)
    #[arg(long, value_parser = parse_percent)]
    pub km_reduction: Option<f64>,

    /// Plane load factor (%)
    #[arg(long, value_parser = parse_percent)]
    pub load_factor: Option<f64>,
}

impl AdjustmentArgs {
    pub fn overrides(&self) -> Vec<(Lever, f64)> {
        [
            (Lever::EvShare, self.ev_share),
            (Lever::KmReduction, self.km_reduction),
            (Lever::LoadFactor, self.load_factor),
        ]
        .into_iter()
        .filter_map(|(lever, value)| value.map(|v| (lever, v)))
        .collect()
    }
}

/// Lever selectable for a sweep
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LeverArg {
    EvShare,
    KmReduction,
    LoadFactor,
}

impl From<LeverArg> for Lever {
    fn from(arg: LeverArg) -> Self {
        match arg {
            LeverArg::EvShare => Lever::EvShare,
            LeverArg::KmReduction => Lever::KmReduction,
            LeverArg::LoadFactor => Lever::LoadFactor,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate baseline and optimized emissions
    Calc {
        #[command(flatten)]
        activity: ActivityArgs,

        #[command(flatten)]
        adjustments: AdjustmentArgs,
    },

    /// Vary one lever from 0 to 100% and show the totals at each step
    Sweep {
        /// Lever to vary
        #[arg(long, value_enum)]
        lever: LeverArg,

        /// Step in percent. Uses config value if not specified.
        #[arg(long, value_parser = parse_step)]
        step: Option<f64>,

        #[command(flatten)]
        activity: ActivityArgs,

        #[command(flatten)]
        adjustments: AdjustmentArgs,
    },

    /// Show the emission factor reference table
    Factors,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default EV share (%)
        #[arg(long, value_parser = parse_percent)]
        set_ev_share: Option<f64>,

        /// Set default KM reduction (%)
        #[arg(long, value_parser = parse_percent)]
        set_km_reduction: Option<f64>,

        /// Set default plane load factor (%)
        #[arg(long, value_parser = parse_percent)]
        set_load_factor: Option<f64>,

        /// Set default sweep step (%)
        #[arg(long, value_parser = parse_step)]
        set_sweep_step: Option<f64>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Reject text that is not a finite number
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", s))
    }
}

fn parse_percent(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    check_percent("percentage", value).map_err(|e| e.to_string())
}

fn parse_step(s: &str) -> Result<f64, String> {
    let value = parse_finite(s)?;
    check_step(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calc_flags() {
        let cli = Cli::try_parse_from([
            "green-meter", "calc", "--cars-km", "1000", "--ev-share", "50", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calc { activity, adjustments } => {
                assert_eq!(activity.overrides(), vec![(Category::Cars, 1000.0)]);
                assert_eq!(adjustments.overrides(), vec![(Lever::EvShare, 50.0)]);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_negative_activity_accepted() {
        let cli = Cli::try_parse_from(["green-meter", "calc", "--trucks-km", "-20"]).unwrap();
        match cli.command {
            Commands::Calc { activity, .. } => assert_eq!(activity.trucks_km, Some(-20.0)),
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(Cli::try_parse_from(["green-meter", "calc", "--cars-km", "many"]).is_err());
        assert!(Cli::try_parse_from(["green-meter", "calc", "--cars-km", "NaN"]).is_err());
    }

    #[test]
    fn test_percent_range_enforced() {
        assert!(Cli::try_parse_from(["green-meter", "calc", "--load-factor", "101"]).is_err());
        assert!(Cli::try_parse_from(["green-meter", "calc", "--load-factor", "100"]).is_ok());
    }

    #[test]
    fn test_parse_sweep() {
        let cli = Cli::try_parse_from([
            "green-meter", "sweep", "--lever", "load-factor", "--step", "20",
        ])
        .unwrap();
        match cli.command {
            Commands::Sweep { lever, step, .. } => {
                assert_eq!(Lever::from(lever), Lever::LoadFactor);
                assert_eq!(step, Some(20.0));
            }
            _ => panic!("expected sweep"),
        }
        assert!(Cli::try_parse_from(["green-meter", "sweep", "--lever", "ev-share", "--step", "0"]).is_err());
    }

    #[test]
    fn test_tiny_step_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["green-meter", "sweep", "--lever", "ev-share", "--step", "1e-300"]).is_err());
        assert!(Cli::try_parse_from(["green-meter", "config", "--set-sweep-step", "0.001"]).is_err());
        assert!(Cli::try_parse_from(["green-meter", "config", "--set-sweep-step", "0.5"]).is_ok());
    }
}
