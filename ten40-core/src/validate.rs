//! Raw-input validation, run before any arithmetic.
//!
//! Rules are applied independently and accumulated; the caller receives one
//! combined message listing every violated rule rather than the first
//! failure. Cross-field checks run only when all per-field checks pass.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FilingStatus;
use crate::money::parse_amount;

/// Outcome of validating one set of raw inputs. `valid` is true iff no rule
/// fired; `error` carries the space-joined messages otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub error: Option<String>,
}

struct AmountField {
    required: &'static str,
    not_a_number: &'static str,
    negative: &'static str,
    unusually_high: &'static str,
    limit: i64,
}

const INCOME: AmountField = AmountField {
    required: "Income is required.",
    not_a_number: "Income must be a valid number.",
    negative: "Income cannot be negative.",
    unusually_high: "Income amount seems unusually high. Please verify.",
    limit: 10_000_000,
};

const DEDUCTIONS: AmountField = AmountField {
    required: "Deductions field is required.",
    not_a_number: "Deductions must be a valid number.",
    negative: "Deductions cannot be negative.",
    unusually_high: "Deductions amount seems unusually high. Please verify.",
    limit: 1_000_000,
};

const WITHHELD: AmountField = AmountField {
    required: "Federal tax withheld field is required.",
    not_a_number: "Federal tax withheld must be a valid number.",
    negative: "Federal tax withheld cannot be negative.",
    unusually_high: "Federal tax withheld amount seems unusually high. Please verify.",
    limit: 500_000,
};

/// Validates the raw form inputs.
///
/// `withheld` is an optional parameter slot: some call sites validate only
/// income, deductions, and status. Once the slot is supplied the field
/// itself becomes required.
///
/// Pure function over strings; no side effects.
pub fn validate_input(
    income: &str,
    deductions: &str,
    status: &str,
    withheld: Option<&str>,
) -> ValidationOutcome {
    let mut errors: Vec<&'static str> = Vec::new();

    if FilingStatus::parse(status).is_none() {
        errors.push("Please select a valid filing status.");
    }

    check_amount(&mut errors, income, &INCOME);
    check_amount(&mut errors, deductions, &DEDUCTIONS);
    if let Some(withheld_raw) = withheld {
        check_amount(&mut errors, withheld_raw, &WITHHELD);
    }

    if errors.is_empty() {
        cross_check(&mut errors, income, deductions, withheld);
    }

    ValidationOutcome {
        valid: errors.is_empty(),
        error: if errors.is_empty() {
            None
        } else {
            Some(errors.join(" "))
        },
    }
}

fn check_amount(errors: &mut Vec<&'static str>, raw: &str, field: &AmountField) {
    if raw.trim().is_empty() {
        errors.push(field.required);
        return;
    }
    match parse_amount(raw) {
        Ok(value) if value < Decimal::ZERO => errors.push(field.negative),
        Ok(value) if value > Decimal::from(field.limit) => errors.push(field.unusually_high),
        Ok(_) => {}
        Err(_) => errors.push(field.not_a_number),
    }
}

fn cross_check(
    errors: &mut Vec<&'static str>,
    income: &str,
    deductions: &str,
    withheld: Option<&str>,
) {
    // Per-field checks passed, so both parses succeed here.
    let (Ok(income_value), Ok(deductions_value)) = (parse_amount(income), parse_amount(deductions))
    else {
        return;
    };

    if deductions_value > income_value {
        errors.push("Deductions cannot exceed total income.");
    }

    if let Some(withheld_raw) = withheld {
        if let Ok(withheld_value) = parse_amount(withheld_raw) {
            if withheld_value > income_value * Decimal::new(5, 1) {
                errors.push(
                    "Federal tax withheld seems unusually high compared to income. Please verify.",
                );
            }
        }
    }
}
