//! Integration tests: config file + scenario file + overrides through the calculator

use greenmeter_app::app::{evaluate_scenario, ScenarioOptions};
use greenmeter_app::config::Config;
use greenmeter_app::display::metrics;
use greenmeter_domain::model::{Category, Lever, Reduction};
use greenmeter_domain::service::{generate_emissions_report, sweep};
use tempfile::tempdir;

const SCENARIO: &str = r#"
[activity]
cars_km = 250000
planes_hr = 400

[adjustments]
ev_share_pct = 30
km_reduction_pct = 10
load_factor_pct = 60
"#;

#[test]
fn test_reference_scenario_from_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config_path = dir.path().join("config.json");
    let scenario_path = dir.path().join("fleet.toml");

    let mut config = Config::default();
    config.adjustments.ev_share_pct = 0.0;
    config.save_to(&config_path).unwrap();
    std::fs::write(&scenario_path, SCENARIO).unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let options = ScenarioOptions::new().with_scenario_file(scenario_path);
    let (resolved, evaluation) = evaluate_scenario(&config, &options).unwrap();

    // scenario file beats config
    assert_eq!(resolved.adjustments.ev_share_pct, 30.0);
    assert!((evaluation.optimized().get(Category::Cars) - 31.995).abs() < 1e-9);
    assert!((evaluation.baseline().get(Category::Planes) - 2160.0).abs() < 1e-9);
}

#[test]
fn test_flags_beat_scenario_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scenario_path = dir.path().join("fleet.toml");
    std::fs::write(&scenario_path, SCENARIO).unwrap();

    let options = ScenarioOptions::new()
        .with_scenario_file(scenario_path)
        .with_adjustment(Lever::LoadFactor, 0.0);
    let (_, evaluation) = evaluate_scenario(&Config::default(), &options).unwrap();
    assert_eq!(evaluation.baseline().get(Category::Planes), 0.0);
}

#[test]
fn test_all_zero_scenario_reports_not_applicable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scenario_path = dir.path().join("empty.toml");
    let zeros: String = [
        "cars_km", "trucks_km", "buses_km", "forklifts_hr", "planes_hr",
        "lighting_kwh", "heating_kwh_th", "cooling_kwh", "computing_kwh", "subcontractors_t",
    ]
    .iter()
    .map(|field| format!("{} = 0\n", field))
    .collect();
    std::fs::write(&scenario_path, format!("[activity]\n{}", zeros)).unwrap();

    let options = ScenarioOptions::new().with_scenario_file(scenario_path);
    let (resolved, evaluation) = evaluate_scenario(&Config::default(), &options).unwrap();

    assert_eq!(evaluation.baseline_total(), 0.0);
    assert_eq!(evaluation.reduction(), Reduction::NotApplicable);
    assert_eq!(metrics(&evaluation)[2].value, "N/A");

    let report = generate_emissions_report(&resolved.inputs, &resolved.adjustments, &evaluation);
    assert!(report.contains("N/A"));

    let json = serde_json::to_value(&evaluation).unwrap();
    assert!(json["reduction"].is_null());
}

#[test]
fn test_invalid_scenario_file_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let scenario_path = dir.path().join("bad.toml");
    std::fs::write(&scenario_path, "[adjustments]\nev_share_pct = 250\n").unwrap();

    let options = ScenarioOptions::new().with_scenario_file(scenario_path);
    assert!(evaluate_scenario(&Config::default(), &options).is_err());
}

#[test]
fn test_sweep_from_resolved_scenario() {
    let (resolved, _) = evaluate_scenario(&Config::default(), &ScenarioOptions::new()).unwrap();
    let points = sweep(&resolved.inputs, &resolved.adjustments, Lever::KmReduction, 50.0).unwrap();
    assert_eq!(points.len(), 3);
    assert!(points[0].optimized_total > points[2].optimized_total);
}
