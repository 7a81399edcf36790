//! Static tax-year configuration.
//!
//! Bracket tables and standard deductions are immutable process-wide data:
//! build one [`TaxYearConfig`] at startup and pass it into the calculator
//! and advisor. Concurrent reads need no synchronization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FilingStatus, TaxBracket};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub single_brackets: Vec<TaxBracket>,
    pub married_brackets: Vec<TaxBracket>,
    pub single_standard_deduction: Decimal,
    pub married_standard_deduction: Decimal,
}

impl TaxYearConfig {
    /// Official 2025 figures (IRS IR-2024-273).
    pub fn year_2025() -> Self {
        Self {
            tax_year: 2025,
            single_brackets: vec![
                bracket(11_925, 10),
                bracket(48_475, 12),
                bracket(103_350, 22),
                bracket(197_300, 24),
                bracket(250_525, 32),
                bracket(626_350, 35),
                top_bracket(37),
            ],
            married_brackets: vec![
                bracket(23_850, 10),
                bracket(96_950, 12),
                bracket(206_700, 22),
                bracket(394_600, 24),
                bracket(501_050, 32),
                bracket(751_600, 35),
                top_bracket(37),
            ],
            single_standard_deduction: Decimal::from(15_000),
            married_standard_deduction: Decimal::from(30_000),
        }
    }

    pub fn brackets(&self, status: FilingStatus) -> &[TaxBracket] {
        match status {
            FilingStatus::Single => &self.single_brackets,
            FilingStatus::Married => &self.married_brackets,
        }
    }

    pub fn standard_deduction(&self, status: FilingStatus) -> Decimal {
        match status {
            FilingStatus::Single => self.single_standard_deduction,
            FilingStatus::Married => self.married_standard_deduction,
        }
    }
}

fn bracket(upper: i64, rate_percent: i64) -> TaxBracket {
    TaxBracket {
        upper_bound: Some(Decimal::from(upper)),
        rate: Decimal::new(rate_percent, 2),
    }
}

fn top_bracket(rate_percent: i64) -> TaxBracket {
    TaxBracket {
        upper_bound: None,
        rate: Decimal::new(rate_percent, 2),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn year_2025_has_seven_brackets_per_status() {
        let config = TaxYearConfig::year_2025();

        assert_eq!(config.single_brackets.len(), 7);
        assert_eq!(config.married_brackets.len(), 7);
    }

    #[test]
    fn bracket_bounds_strictly_increase() {
        let config = TaxYearConfig::year_2025();

        for table in [&config.single_brackets, &config.married_brackets] {
            let bounds: Vec<_> = table.iter().filter_map(|b| b.upper_bound).collect();
            assert!(bounds.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn final_bracket_is_unbounded() {
        let config = TaxYearConfig::year_2025();

        assert_eq!(config.single_brackets.last().unwrap().upper_bound, None);
        assert_eq!(config.married_brackets.last().unwrap().upper_bound, None);
    }

    #[test]
    fn rates_never_decrease() {
        let config = TaxYearConfig::year_2025();

        for table in [&config.single_brackets, &config.married_brackets] {
            let rates: Vec<_> = table.iter().map(|b| b.rate).collect();
            assert!(rates.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    #[test]
    fn standard_deduction_by_status() {
        let config = TaxYearConfig::year_2025();

        assert_eq!(
            config.standard_deduction(FilingStatus::Single),
            dec!(15000)
        );
        assert_eq!(
            config.standard_deduction(FilingStatus::Married),
            dec!(30000)
        );
    }

    #[test]
    fn first_single_bracket_matches_schedule() {
        let config = TaxYearConfig::year_2025();

        let first = &config.single_brackets[0];
        assert_eq!(first.upper_bound, Some(dec!(11925)));
        assert_eq!(first.rate, dec!(0.10));
    }
}
