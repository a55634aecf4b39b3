//! Domain services

pub mod emissions_calculator;
pub mod report;
pub mod sensitivity;

pub use emissions_calculator::evaluate;
pub use report::{generate_emissions_report, generate_factor_table, ASSUMPTIONS};
pub use sensitivity::{check_step, sweep, SweepPoint, MIN_SWEEP_STEP};
