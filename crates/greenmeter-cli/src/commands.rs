//! Command handlers

use crate::cli::{ActivityArgs, AdjustmentArgs, Cli, Commands, LeverArg};
use crate::output::{output_evaluation, output_factors, output_sweep};
use greenmeter_app::app::{evaluate_scenario, resolve_scenario, ScenarioOptions};
use greenmeter_app::config::Config;
use greenmeter_domain::model::Lever;
use greenmeter_domain::service::sweep;
use greenmeter_types::{OutputFormat, Result};
use std::path::Path;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    if let Commands::Config {
        show,
        set_output,
        set_ev_share,
        set_km_reduction,
        set_load_factor,
        set_sweep_step,
        reset,
    } = &cli.command
    {
        let update = ConfigUpdate {
            output_format: *set_output,
            ev_share: *set_ev_share,
            km_reduction: *set_km_reduction,
            load_factor: *set_load_factor,
            sweep_step: *set_sweep_step,
        };
        cmd_config(&Config::config_path()?, *show, update, *reset)?;
        return Ok(());
    }

    // Load config
    let config = Config::load()?;
    if cli.verbose {
        if let Ok(path) = Config::config_path() {
            eprintln!("Config: {}", path.display());
        }
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Calc {
            activity,
            adjustments,
        } => cmd_calc(&cli, &config, activity, adjustments, output_format),

        Commands::Sweep {
            lever,
            step,
            activity,
            adjustments,
        } => {
            let step = step.unwrap_or(config.sweep_step);
            cmd_sweep(&cli, &config, *lever, step, activity, adjustments, output_format)
        }

        Commands::Factors => output_factors(output_format),

        Commands::Config { .. } => Ok(()),
    }
}

fn scenario_options(cli: &Cli, activity: &ActivityArgs, adjustments: &AdjustmentArgs) -> ScenarioOptions {
    let mut options = ScenarioOptions::new().with_verbose(cli.verbose);
    if let Some(ref path) = cli.scenario {
        options = options.with_scenario_file(path.clone());
    }
    for (category, value) in activity.overrides() {
        options = options.with_activity(category, value);
    }
    for (lever, value) in adjustments.overrides() {
        options = options.with_adjustment(lever, value);
    }
    options
}

fn cmd_calc(
    cli: &Cli,
    config: &Config,
    activity: &ActivityArgs,
    adjustments: &AdjustmentArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let options = scenario_options(cli, activity, adjustments);
    let (resolved, evaluation) = evaluate_scenario(config, &options)?;
    output_evaluation(output_format, &resolved, &evaluation)
}

fn cmd_sweep(
    cli: &Cli,
    config: &Config,
    lever: LeverArg,
    step: f64,
    activity: &ActivityArgs,
    adjustments: &AdjustmentArgs,
    output_format: OutputFormat,
) -> Result<()> {
    let lever = Lever::from(lever);
    let options = scenario_options(cli, activity, adjustments);
    let resolved = resolve_scenario(config, &options)?;

    if cli.verbose {
        eprintln!("Sweeping {} in steps of {}%", lever, step);
    }
    let points = sweep(&resolved.inputs, &resolved.adjustments, lever, step)?;
    output_sweep(output_format, lever, &points)
}

/// Values passed with `config --set-*`
#[derive(Debug, Clone, Copy, Default)]
struct ConfigUpdate {
    output_format: Option<OutputFormat>,
    ev_share: Option<f64>,
    km_reduction: Option<f64>,
    load_factor: Option<f64>,
    sweep_step: Option<f64>,
}

fn cmd_config(path: &Path, show: bool, update: ConfigUpdate, reset: bool) -> Result<Config> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(config);
    }

    let mut config = Config::load_from(path)?;
    let mut modified = false;

    if let Some(output_format) = update.output_format {
        config.output_format = output_format;
        modified = true;
    }

    for (lever, value) in [
        (Lever::EvShare, update.ev_share),
        (Lever::KmReduction, update.km_reduction),
        (Lever::LoadFactor, update.load_factor),
    ] {
        if let Some(value) = value {
            *config.adjustments.get_mut(lever) = value;
            modified = true;
        }
    }

    if let Some(step) = update.sweep_step {
        config.sweep_step = step;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenmeter_domain::model::Category;
    use tempfile::tempdir;

    #[test]
    fn test_config_set_persists() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        let update = ConfigUpdate {
            output_format: Some(OutputFormat::Json),
            ev_share: Some(80.0),
            sweep_step: Some(5.0),
            ..Default::default()
        };
        cmd_config(&path, false, update, false).unwrap();

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.output_format, OutputFormat::Json);
        assert_eq!(saved.adjustments.ev_share_pct, 80.0);
        assert_eq!(saved.adjustments.km_reduction_pct, 10.0);
        assert_eq!(saved.sweep_step, 5.0);
    }

    #[test]
    fn test_config_show_only_does_not_write() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        let config = cmd_config(&path, true, ConfigUpdate::default(), false).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn test_config_reset_overwrites() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");

        let update = ConfigUpdate {
            load_factor: Some(95.0),
            ..Default::default()
        };
        cmd_config(&path, false, update, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().adjustments.load_factor_pct, 95.0);

        cmd_config(&path, false, ConfigUpdate::default(), true).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_config_invalid_file_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"sweep_step": 1e-300}"#).unwrap();

        assert!(cmd_config(&path, true, ConfigUpdate::default(), false).is_err());
    }

    #[test]
    fn test_scenario_options_carry_flags() {
        let cli = Cli {
            command: Commands::Factors,
            format: None,
            scenario: Some("fleet.toml".into()),
            verbose: true,
        };
        let activity = ActivityArgs {
            planes_hr: Some(0.0),
            ..Default::default()
        };
        let adjustments = AdjustmentArgs {
            ev_share: Some(50.0),
            ..Default::default()
        };

        let options = scenario_options(&cli, &activity, &adjustments);
        assert!(options.verbose);
        assert_eq!(options.scenario_file, Some("fleet.toml".into()));
        assert_eq!(options.activity_overrides, vec![(Category::Planes, 0.0)]);
        assert_eq!(options.adjustment_overrides, vec![(Lever::EvShare, 50.0)]);
    }
}
