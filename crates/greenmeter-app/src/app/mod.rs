//! Application use cases

pub mod scenario_service;

pub use scenario_service::{evaluate_scenario, resolve_scenario, ResolvedScenario, ScenarioOptions};
