//! End-to-end tax calculation.
//!
//! The calculator's steps, in order:
//!
//! | Step | Rule |
//! |------|------|
//! | 1    | Look up the standard deduction for the filing status |
//! | 2    | `actual_deductions = max(itemized, standard)` — the standard deduction is a floor, a sub-standard itemized entry is silently upgraded |
//! | 3    | `taxable_income = max(0, income - actual_deductions)` |
//! | 4    | Apply the bracket schedule for total tax and the breakdown |
//! | 5    | Effective rate = tax / gross income × 100 (0 when income is 0) |
//! | 6    | Marginal rate = rate of the bracket covering taxable income |
//! | 7    | Refund-or-owed = withheld − tax (positive means refund) |
//! | 8    | Deduction analysis over the *raw* itemized entry, not the floored amount |
//!
//! Dollar amounts are rounded only at result assembly; the effective rate
//! to two decimal places; the marginal rate is left exact.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ten40_core::{FilingStatus, TaxCalculator, TaxYearConfig};
//!
//! # async fn run() {
//! let config = TaxYearConfig::year_2025();
//! let calculator = TaxCalculator::new(&config);
//!
//! let result = calculator
//!     .calculate(dec!(60000), FilingStatus::Single, dec!(10000), dec!(5000), None)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(result.tax_owed, dec!(5162));
//! assert_eq!(result.net_payment, dec!(162));
//! assert!(!result.is_refund);
//! # }
//! ```

use rust_decimal::Decimal;

use super::brackets::BracketSchedule;
use super::common::{max, round_dollars, round_half_up};
use super::CalculationError;
use crate::advisor::DeductionAdvisor;
use crate::config::TaxYearConfig;
use crate::models::{AdviceProvider, DeductionType, FilingStatus, TaxResult};

/// Orchestrates one calculation request against an immutable configuration.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Computes the full [`TaxResult`] for one household.
    ///
    /// `deductions` is the raw itemized total as entered; `withheld` may be
    /// zero when unknown. `advice` is the optional external collaborator;
    /// its absence or failure never blocks the calculation.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] only for configuration faults; valid
    /// inputs against the shipped tables always succeed.
    pub async fn calculate(
        &self,
        income: Decimal,
        status: FilingStatus,
        deductions: Decimal,
        withheld: Decimal,
        advice: Option<&dyn AdviceProvider>,
    ) -> Result<TaxResult, CalculationError> {
        let standard_deduction = self.config.standard_deduction(status);
        let actual_deductions = max(deductions, standard_deduction);
        let taxable_income = max(income - actual_deductions, Decimal::ZERO);

        let schedule = BracketSchedule::new(self.config.brackets(status));
        let (tax_owed, brackets_used) = schedule.apply(taxable_income)?;

        let effective_rate = if income > Decimal::ZERO {
            tax_owed / income * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        let marginal_rate = schedule.marginal_rate_percent(taxable_income);

        let after_tax_income = income - tax_owed;
        let refund_or_owed = withheld - tax_owed;
        let is_refund = refund_or_owed > Decimal::ZERO;

        let deduction_type = if actual_deductions == standard_deduction {
            DeductionType::Standard
        } else {
            DeductionType::Itemized
        };

        // The advisor sees the raw itemized entry so its strategy decision
        // reflects what the user actually claimed.
        let advisor = DeductionAdvisor::new(self.config);
        let deduction_analysis = advisor.analyze(income, status, deductions, advice).await;

        Ok(TaxResult {
            taxable_income: round_dollars(taxable_income),
            tax_owed: round_dollars(tax_owed),
            after_tax_income: round_dollars(after_tax_income),
            effective_rate: round_half_up(effective_rate),
            marginal_rate,
            standard_deduction,
            actual_deductions,
            deduction_type,
            brackets_used,
            federal_withheld: round_dollars(withheld),
            refund_or_owed: round_dollars(refund_or_owed),
            is_refund,
            net_payment: round_dollars(refund_or_owed.abs()),
            deduction_analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{DeductionStrategy, RecommendationKind};

    async fn calculate(
        income: Decimal,
        status: FilingStatus,
        deductions: Decimal,
        withheld: Decimal,
    ) -> TaxResult {
        let config = TaxYearConfig::year_2025();
        TaxCalculator::new(&config)
            .calculate(income, status, deductions, withheld, None)
            .await
            .unwrap()
    }

    // =========================================================================
    // scenario tests
    // =========================================================================

    #[tokio::test]
    async fn single_filer_with_sub_standard_itemized_entry() {
        let result = calculate(dec!(60000), FilingStatus::Single, dec!(10000), dec!(5000)).await;

        assert_eq!(result.standard_deduction, dec!(15000));
        assert_eq!(result.actual_deductions, dec!(15000));
        assert_eq!(result.deduction_type, DeductionType::Standard);
        assert_eq!(result.taxable_income, dec!(45000));
        // 10% of 11925 + 12% of 33075 = 5161.50, rounded up at the midpoint.
        assert_eq!(result.tax_owed, dec!(5162));
        assert_eq!(result.refund_or_owed, dec!(-162));
        assert!(!result.is_refund);
        assert_eq!(result.net_payment, dec!(162));
        assert_eq!(result.marginal_rate, dec!(12.00));
        assert_eq!(result.effective_rate, dec!(8.60));
    }

    #[tokio::test]
    async fn low_income_single_filer_gets_refund() {
        let result = calculate(dec!(20000), FilingStatus::Single, dec!(0), dec!(3000)).await;

        assert_eq!(result.actual_deductions, dec!(15000));
        assert_eq!(result.taxable_income, dec!(5000));
        assert_eq!(result.tax_owed, dec!(500));
        assert_eq!(result.refund_or_owed, dec!(2500));
        assert!(result.is_refund);
        assert_eq!(result.net_payment, dec!(2500));
    }

    #[tokio::test]
    async fn married_filer_below_standard_deduction_recommends_standard() {
        let result = calculate(dec!(80000), FilingStatus::Married, dec!(25000), dec!(0)).await;

        assert_eq!(result.standard_deduction, dec!(30000));
        assert_eq!(result.actual_deductions, dec!(30000));

        let analysis = &result.deduction_analysis;
        assert_eq!(analysis.recommended_strategy, DeductionStrategy::Standard);
        assert_eq!(analysis.deduction_gap, dec!(5000));
        assert_eq!(analysis.tax_savings_from_itemizing, dec!(0));
        assert!(
            analysis
                .recommendations
                .iter()
                .all(|r| !r.title.contains("Itemize"))
        );
    }

    #[tokio::test]
    async fn itemized_entry_above_standard_is_used_directly() {
        let result = calculate(dec!(100000), FilingStatus::Single, dec!(22000), dec!(0)).await;

        assert_eq!(result.actual_deductions, dec!(22000));
        assert_eq!(result.deduction_type, DeductionType::Itemized);
        assert_eq!(result.taxable_income, dec!(78000));
        assert_eq!(
            result.deduction_analysis.recommended_strategy,
            DeductionStrategy::Itemize
        );
    }

    // =========================================================================
    // property tests
    // =========================================================================

    #[tokio::test]
    async fn deductions_never_fall_below_standard() {
        for itemized in [dec!(0), dec!(5000), dec!(14999.99), dec!(15000), dec!(20000)] {
            let result = calculate(dec!(90000), FilingStatus::Single, itemized, dec!(0)).await;

            assert!(result.actual_deductions >= dec!(15000));
        }
    }

    #[tokio::test]
    async fn tax_owed_is_monotonic_in_income() {
        let mut previous = dec!(0);
        for income in [dec!(0), dec!(15000), dec!(30000), dec!(60000), dec!(120000), dec!(500000)]
        {
            let result = calculate(income, FilingStatus::Single, dec!(0), dec!(0)).await;

            assert!(result.tax_owed >= previous);
            previous = result.tax_owed;
        }
    }

    #[tokio::test]
    async fn identical_inputs_give_identical_results() {
        let first = calculate(dec!(75000), FilingStatus::Married, dec!(12000), dec!(8000)).await;
        let second = calculate(dec!(75000), FilingStatus::Married, dec!(12000), dec!(8000)).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn zero_income_produces_zero_rates() {
        let result = calculate(dec!(0), FilingStatus::Single, dec!(0), dec!(0)).await;

        assert_eq!(result.tax_owed, dec!(0));
        assert_eq!(result.effective_rate, dec!(0));
        assert_eq!(result.after_tax_income, dec!(0));
        assert!(result.brackets_used.is_empty());
    }

    #[tokio::test]
    async fn withholding_echoed_rounded() {
        let result =
            calculate(dec!(60000), FilingStatus::Single, dec!(0), dec!(5000.49)).await;

        assert_eq!(result.federal_withheld, dec!(5000));
    }

    #[tokio::test]
    async fn analysis_always_has_a_primary_strategy_recommendation() {
        let result = calculate(dec!(60000), FilingStatus::Single, dec!(10000), dec!(0)).await;

        assert_eq!(
            result.deduction_analysis.recommendations[0].kind,
            RecommendationKind::Strategy
        );
    }
}
