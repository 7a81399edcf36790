//! Progressive bracket application.
//!
//! The engine walks a rate schedule in increasing-bound order, carving
//! taxable income into per-bracket slices:
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | Start with `previous_bound = 0` |
//! | 2    | Skip nothing: while income exceeds `previous_bound`, the slice width is `min(income, upper_bound) - previous_bound` |
//! | 3    | Tax in the slice is `width × rate`; record a [`BracketSlice`] |
//! | 4    | Stop as soon as income is at or below the bracket's upper bound |
//!
//! The recorded slices form a strictly increasing, gapless partition of
//! `[0, taxable_income)`; brackets above the income produce no slice. No
//! rounding happens inside the walk.

use rust_decimal::Decimal;

use super::CalculationError;
use crate::models::{BracketSlice, TaxBracket};

/// Applies one filing status's rate table. Borrows the table; construction
/// is free and the schedule can be rebuilt per request.
#[derive(Debug, Clone)]
pub struct BracketSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> BracketSchedule<'a> {
    /// Creates a schedule over `brackets`, which must be sorted by
    /// increasing upper bound with a final unbounded bracket.
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Computes total tax for `taxable_income` along with the bracket
    /// breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::EmptyBracketTable`] if the schedule has
    /// no brackets.
    pub fn apply(
        &self,
        taxable_income: Decimal,
    ) -> Result<(Decimal, Vec<BracketSlice>), CalculationError> {
        if self.brackets.is_empty() {
            return Err(CalculationError::EmptyBracketTable);
        }

        let mut total_tax = Decimal::ZERO;
        let mut slices = Vec::new();
        let mut previous_bound = Decimal::ZERO;

        for bracket in self.brackets {
            if taxable_income <= previous_bound {
                break;
            }

            let ceiling = match bracket.upper_bound {
                Some(bound) => bound.min(taxable_income),
                None => taxable_income,
            };
            let width = ceiling - previous_bound;
            let tax = width * bracket.rate;

            slices.push(BracketSlice {
                range_low: previous_bound,
                range_high: ceiling,
                rate: bracket.rate,
                taxable_amount: width,
                tax_amount: tax,
            });
            total_tax += tax;

            match bracket.upper_bound {
                Some(bound) if taxable_income > bound => previous_bound = bound,
                _ => break,
            }
        }

        Ok((total_tax, slices))
    }

    /// Rate of the first bracket whose upper bound covers `amount`, if any.
    pub fn rate_for(&self, amount: Decimal) -> Option<Decimal> {
        self.brackets
            .iter()
            .find(|bracket| bracket.covers(amount))
            .map(|bracket| bracket.rate)
    }

    /// Marginal rate for `amount`, expressed as a percentage. Zero when the
    /// schedule is empty.
    pub fn marginal_rate_percent(&self, amount: Decimal) -> Decimal {
        self.rate_for(amount)
            .map(|rate| rate * Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::ZERO)
    }
}
