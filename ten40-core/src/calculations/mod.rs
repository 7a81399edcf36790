//! Tax calculation engine.
//!
//! [`BracketSchedule`] applies a progressive rate table; [`TaxCalculator`]
//! orchestrates deduction selection, bracket application, rate derivation,
//! and the refund-or-owed balance.

pub mod brackets;
pub mod calculator;
pub mod common;

use thiserror::Error;

pub use brackets::BracketSchedule;
pub use calculator::TaxCalculator;

/// Errors that can occur while computing a tax liability.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// The configured schedule has no brackets. Cannot occur with the
    /// shipped tables; a hand-built configuration without brackets fails
    /// loudly instead of taxing everything at zero.
    #[error("no tax brackets configured")]
    EmptyBracketTable,
}
