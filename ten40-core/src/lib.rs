pub mod advisor;
pub mod calculations;
pub mod config;
pub mod models;
pub mod money;
pub mod validate;

pub use advisor::DeductionAdvisor;
pub use calculations::{BracketSchedule, CalculationError, TaxCalculator};
pub use config::TaxYearConfig;
pub use models::*;
pub use validate::{ValidationOutcome, validate_input};
