//! Savings estimation for advice entries that arrive without a usable
//! figure.
//!
//! The advice service is not contractually required to return numeric
//! estimates, so a figure is resolved in priority order: explicit numeric
//! hint, dollar amount in the text, percentage of income, category keyword
//! match, then an income-banded default. The keyword table is an ordered
//! first-match-wins list so the behavior is reproducible in isolation.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::SavingsHint;

static DOLLAR_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d,]+").expect("valid dollar pattern"));

static PERCENT_OF_INCOME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("valid percent pattern"));

type DeductionFormula = fn(Decimal) -> Decimal;

struct CategoryRule {
    keywords: &'static [&'static str],
    estimate: DeductionFormula,
}

/// Ordered estimation table. Earlier rows win: "property" appears under
/// both SALT and mortgage, and the SALT reading is the intended one.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["charitable", "donation", "charity", "giving"],
        estimate: charitable_deduction,
    },
    CategoryRule {
        keywords: &["salt", "state", "property", "local tax", "real estate"],
        estimate: salt_deduction,
    },
    CategoryRule {
        keywords: &["mortgage", "interest", "home", "house", "property"],
        estimate: mortgage_deduction,
    },
    CategoryRule {
        keywords: &["medical", "health", "doctor", "hospital", "prescription"],
        estimate: medical_deduction,
    },
    CategoryRule {
        keywords: &["business", "professional", "office", "work", "job"],
        estimate: business_deduction,
    },
    CategoryRule {
        keywords: &["student loan", "loan interest", "student debt"],
        estimate: student_loan_deduction,
    },
    CategoryRule {
        keywords: &["educator", "teacher", "classroom", "teaching"],
        estimate: educator_deduction,
    },
    CategoryRule {
        keywords: &["retirement", "401k", "ira", "pension", "savings"],
        estimate: retirement_deduction,
    },
    CategoryRule {
        keywords: &["education", "tuition", "college", "university"],
        estimate: education_deduction,
    },
    CategoryRule {
        keywords: &["child", "dependent", "family", "daycare"],
        estimate: dependent_care_deduction,
    },
    CategoryRule {
        keywords: &["energy", "solar", "electric", "green", "efficiency"],
        estimate: energy_deduction,
    },
];

fn charitable_deduction(income: Decimal) -> Decimal {
    (income * Decimal::new(35, 3)).min(Decimal::from(12_000))
}

fn salt_deduction(income: Decimal) -> Decimal {
    (income * Decimal::new(8, 2)).min(Decimal::from(10_000))
}

fn mortgage_deduction(income: Decimal) -> Decimal {
    if income > Decimal::from(100_000) {
        (income * Decimal::new(15, 2)).min(Decimal::from(25_000))
    } else {
        (income * Decimal::new(12, 2)).min(Decimal::from(18_000))
    }
}

fn medical_deduction(income: Decimal) -> Decimal {
    // Assumed 12% medical spend less the 7.5%-of-AGI floor.
    (income * Decimal::new(12, 2) - income * Decimal::new(75, 3)).max(Decimal::ZERO)
}

fn business_deduction(income: Decimal) -> Decimal {
    (income * Decimal::new(6, 2)).min(Decimal::from(7_500))
}

fn student_loan_deduction(income: Decimal) -> Decimal {
    Decimal::from(2_500).min(income * Decimal::new(4, 2))
}

fn educator_deduction(_income: Decimal) -> Decimal {
    Decimal::from(300)
}

fn retirement_deduction(income: Decimal) -> Decimal {
    if income < Decimal::from(50_000) {
        (income * Decimal::new(10, 2)).min(Decimal::from(6_000))
    } else {
        (income * Decimal::new(5, 2)).min(Decimal::from(3_000))
    }
}

fn education_deduction(income: Decimal) -> Decimal {
    Decimal::from(4_000).min(income * Decimal::new(3, 2))
}

fn dependent_care_deduction(income: Decimal) -> Decimal {
    (income * Decimal::new(8, 2)).min(Decimal::from(8_000))
}

fn energy_deduction(income: Decimal) -> Decimal {
    (income * Decimal::new(2, 2)).min(Decimal::from(2_000))
}

/// Resolves a whole-dollar savings figure for one advice entry.
pub(crate) fn estimate_savings(
    hint: Option<&SavingsHint>,
    description: &str,
    income: Decimal,
    marginal_rate: Decimal,
) -> Decimal {
    // (a) A numeric hint is accepted verbatim.
    if let Some(SavingsHint::Amount(amount)) = hint {
        return amount.trunc();
    }

    let hint_text = match hint {
        Some(SavingsHint::Text(text)) => text.as_str(),
        _ => "",
    };

    // (b) A dollar amount in the hint or description, read as a deduction.
    let searchable = format!("{hint_text} {description}");
    if let Some(found) = DOLLAR_AMOUNT.find(&searchable) {
        if let Ok(amount) = found.as_str().replace(['$', ','], "").parse::<Decimal>() {
            if amount >= Decimal::ONE_HUNDRED && amount <= Decimal::from(50_000) {
                return (amount * marginal_rate).trunc();
            }
        }
    }

    // (c) A percentage of income mentioned in the description.
    if let Some(captures) = PERCENT_OF_INCOME.captures(description) {
        if let Ok(percent) = captures[1].parse::<Decimal>() {
            let estimated_deduction = income * percent / Decimal::ONE_HUNDRED;
            if estimated_deduction <= Decimal::from(50_000) {
                return (estimated_deduction * marginal_rate).trunc();
            }
        }
    }

    // (d) Category keyword match, first rule wins.
    let lowered = description.to_lowercase();
    for rule in CATEGORY_RULES {
        if rule.keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return ((rule.estimate)(income) * marginal_rate).trunc();
        }
    }

    // (e) Income-banded default deduction.
    let assumed_deduction = if income < Decimal::from(50_000) {
        Decimal::from(500)
    } else if income < Decimal::from(100_000) {
        Decimal::from(1_500)
    } else if income < Decimal::from(200_000) {
        Decimal::from(3_000)
    } else {
        Decimal::from(5_000)
    };
    (assumed_deduction * marginal_rate).trunc()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const RATE: Decimal = Decimal::from_parts(22, 0, 0, false, 2); // 0.22

    // =========================================================================
    // cascade order tests
    // =========================================================================

    #[test]
    fn numeric_hint_wins_over_everything() {
        let savings = estimate_savings(
            Some(&SavingsHint::Amount(dec!(1200.75))),
            "Donate $5,000 to charity",
            dec!(80000),
            RATE,
        );

        assert_eq!(savings, dec!(1200));
    }

    #[test]
    fn dollar_text_in_hint_is_scaled_by_marginal_rate() {
        let savings = estimate_savings(
            Some(&SavingsHint::Text("around $2,000".to_string())),
            "no other figures here",
            dec!(80000),
            RATE,
        );

        assert_eq!(savings, dec!(440));
    }

    #[test]
    fn dollar_text_in_description_counts_too() {
        let savings = estimate_savings(None, "You could deduct $1,000 in supplies", dec!(80000), RATE);

        assert_eq!(savings, dec!(220));
    }

    #[test]
    fn out_of_range_dollar_amount_falls_through() {
        // $99 is below the plausible-deduction floor, so the keyword table
        // picks it up instead (charitable at 3.5% of income).
        let savings = estimate_savings(None, "Donate $99 to charity", dec!(80000), RATE);

        assert_eq!(savings, dec!(616));
    }

    #[test]
    fn percentage_of_income_is_used_when_no_dollar_amount() {
        // 5% of 80000 = 4000 deduction, times 22%.
        let savings = estimate_savings(None, "Contribute 5% of your pay", dec!(80000), RATE);

        assert_eq!(savings, dec!(880));
    }

    #[test]
    fn oversized_percentage_falls_through_to_default() {
        // 90% of 80000 exceeds the $50K ceiling; no keywords match either.
        let savings = estimate_savings(None, "Shelter 90% of your wages", dec!(80000), RATE);

        assert_eq!(savings, dec!(330));
    }

    // =========================================================================
    // keyword table tests
    // =========================================================================

    #[test]
    fn charitable_outranks_salt_on_shared_text() {
        // "charity" and "state" both appear; the charitable row is first.
        let savings = estimate_savings(
            None,
            "Give to a charity registered in your state",
            dec!(80000),
            RATE,
        );

        // 3.5% of 80000 = 2800, times 22% = 616.
        assert_eq!(savings, dec!(616));
    }

    #[test]
    fn salt_estimate_caps_at_ten_thousand() {
        let savings = estimate_savings(None, "Claim your property tax", dec!(200000), RATE);

        assert_eq!(savings, dec!(2200));
    }

    #[test]
    fn mortgage_scales_with_income_tier() {
        let modest = estimate_savings(None, "Deduct your mortgage", dec!(80000), RATE);
        let higher = estimate_savings(None, "Deduct your mortgage", dec!(150000), RATE);

        // 12% of 80000 = 9600; 15% of 150000 = 22500, under the 25000 cap.
        assert_eq!(modest, dec!(2112));
        assert_eq!(higher, dec!(4950));
    }

    #[test]
    fn medical_uses_floor_adjusted_spend() {
        // (12% - 7.5%) of 80000 = 3600, times 22% = 792.
        let savings = estimate_savings(None, "Track your hospital bills", dec!(80000), RATE);

        assert_eq!(savings, dec!(792));
    }

    #[test]
    fn educator_is_a_flat_amount() {
        let savings = estimate_savings(None, "Classroom supplies add up", dec!(80000), RATE);

        assert_eq!(savings, dec!(66));
    }

    #[test]
    fn student_loan_caps_at_statutory_limit() {
        let savings = estimate_savings(None, "Deduct student loan payments", dec!(80000), RATE);

        // min(2500, 4% of 80000) = 2500, times 22% = 550.
        assert_eq!(savings, dec!(550));
    }

    #[test]
    fn retirement_band_switches_at_fifty_thousand() {
        let below = estimate_savings(None, "Open an ira", dec!(40000), RATE);
        let above = estimate_savings(None, "Open an ira", dec!(80000), RATE);

        // 10% of 40000 capped at 6000 → 4000; 5% of 80000 capped at 3000.
        assert_eq!(below, dec!(880));
        assert_eq!(above, dec!(660));
    }

    // =========================================================================
    // default band tests
    // =========================================================================

    #[test]
    fn default_band_by_income_tier() {
        let text = "Nothing recognizable here";

        assert_eq!(estimate_savings(None, text, dec!(40000), RATE), dec!(110));
        assert_eq!(estimate_savings(None, text, dec!(80000), RATE), dec!(330));
        assert_eq!(estimate_savings(None, text, dec!(150000), RATE), dec!(660));
        assert_eq!(estimate_savings(None, text, dec!(300000), RATE), dec!(1100));
    }
}
