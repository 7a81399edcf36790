use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BracketSlice, DeductionAnalysis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionType {
    Standard,
    Itemized,
}

impl DeductionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Itemized => "Itemized",
        }
    }
}

/// Complete outcome of one calculation request. Built once, never mutated,
/// owned by the caller for the duration of the response.
///
/// Dollar fields are rounded to whole dollars at assembly; the effective
/// rate to two decimal places. The marginal rate is the exact percentage
/// from the bracket table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub taxable_income: Decimal,
    pub tax_owed: Decimal,
    pub after_tax_income: Decimal,
    pub effective_rate: Decimal,
    pub marginal_rate: Decimal,
    pub standard_deduction: Decimal,
    pub actual_deductions: Decimal,
    pub deduction_type: DeductionType,
    pub brackets_used: Vec<BracketSlice>,
    pub federal_withheld: Decimal,
    pub refund_or_owed: Decimal,
    pub is_refund: bool,
    pub net_payment: Decimal,
    pub deduction_analysis: DeductionAnalysis,
}
