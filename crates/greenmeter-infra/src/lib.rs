//! Infrastructure layer for green-meter

pub mod scenario_loader;

pub use scenario_loader::Scenario;
