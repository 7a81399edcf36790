use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tier of a progressive rate schedule.
///
/// `upper_bound` of `None` marks the final, unbounded bracket. A schedule is
/// an ordered sequence with strictly increasing bounds; rates are
/// non-decreasing by construction of the shipped tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Whether `amount` falls at or below this bracket's upper bound.
    pub fn covers(&self, amount: Decimal) -> bool {
        match self.upper_bound {
            Some(bound) => amount <= bound,
            None => true,
        }
    }
}

/// The portion of taxable income consumed by a single bracket, produced
/// fresh per calculation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSlice {
    pub range_low: Decimal,
    pub range_high: Decimal,
    pub rate: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
}
