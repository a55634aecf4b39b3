//! Domain model types

pub mod activity;
pub mod adjustment;
pub mod category;
pub mod factors;
pub mod result;

pub use activity::ActivityInputs;
pub use adjustment::{check_percent, AdjustmentParameters, Lever};
pub use category::{ActivityUnit, Category};
pub use factors::{EmissionFactor, EmissionFactorTable, STANDARD_FACTORS};
pub use result::{CategoryComparison, EmissionResult, Evaluation, Reduction};
