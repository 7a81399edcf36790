//! Local fallback analysis, used whenever the advice service is absent or
//! fails.
//!
//! Triggers are independent income/deduction thresholds; any subset may
//! fire. Dollar estimates are deliberately coarse and assume the 22%
//! bracket for savings.

use rust_decimal::Decimal;

use crate::calculations::common::round_dollars;
use crate::models::{
    MissedOpportunity, OpportunityCategory, OptimizationTip, Priority, SavingsEstimate,
};
use crate::money::format_usd;

/// Flags common deduction categories the filer may be leaving unclaimed.
pub fn missed_deduction_opportunities(
    income: Decimal,
    current_deductions: Decimal,
) -> Vec<MissedOpportunity> {
    let mut opportunities = Vec::new();

    let estimated_salt = (income * Decimal::new(8, 2)).min(Decimal::from(10_000));
    let estimated_charitable = income * Decimal::new(25, 3);
    let medical_threshold = income * Decimal::new(75, 3);
    let assumed_bracket = Decimal::new(22, 2);

    if income > Decimal::from(50_000) && current_deductions < estimated_salt {
        opportunities.push(MissedOpportunity {
            category: OpportunityCategory::Salt,
            title: "State and Local Tax Deduction".to_string(),
            description: format!(
                "You may be missing {} in state/local tax deductions.",
                format_usd(estimated_salt)
            ),
            potential_savings: SavingsEstimate::Amount(round_dollars(
                estimated_salt * assumed_bracket,
            )),
            tips: vec![
                "Include state income tax".to_string(),
                "Include property tax (up to $10K total)".to_string(),
            ],
        });
    }

    if current_deductions < estimated_charitable {
        opportunities.push(MissedOpportunity {
            category: OpportunityCategory::Charitable,
            title: "Charitable Contribution Deduction".to_string(),
            description: format!(
                "Consider charitable giving for {} potential deduction.",
                format_usd(estimated_charitable)
            ),
            potential_savings: SavingsEstimate::Amount(round_dollars(
                estimated_charitable * assumed_bracket,
            )),
            tips: vec![
                "Cash donations to qualified charities".to_string(),
                "Donated goods (keep receipts)".to_string(),
                "Volunteer mileage".to_string(),
            ],
        });
    }

    if income > Decimal::from(40_000) {
        opportunities.push(MissedOpportunity {
            category: OpportunityCategory::Medical,
            title: "Medical Expense Deduction".to_string(),
            description: format!(
                "Medical expenses over {} may be deductible.",
                format_usd(medical_threshold)
            ),
            potential_savings: SavingsEstimate::Varies,
            tips: vec![
                "Unreimbursed medical bills".to_string(),
                "Prescription costs".to_string(),
                "Medical travel expenses".to_string(),
            ],
        });
    }

    if income > Decimal::from(60_000) && current_deductions < Decimal::from(15_000) {
        opportunities.push(MissedOpportunity {
            category: OpportunityCategory::Mortgage,
            title: "Mortgage Interest Deduction".to_string(),
            description: "Homeowners can deduct mortgage interest (up to $750K loan)."
                .to_string(),
            potential_savings: SavingsEstimate::Varies,
            tips: vec![
                "Primary residence mortgage interest".to_string(),
                "Points paid on mortgage".to_string(),
                "Home equity loan interest (if used for home improvement)".to_string(),
            ],
        });
    }

    opportunities
}

/// Personalized tips for lifting next year's deduction total.
pub fn optimization_tips(
    income: Decimal,
    standard_deduction: Decimal,
    current_deductions: Decimal,
) -> Vec<OptimizationTip> {
    let mut tips = Vec::new();

    if income < Decimal::from(50_000) {
        tips.push(OptimizationTip {
            title: "Focus on Major Deductions".to_string(),
            description: "At your income level, focus on larger deductions like SALT and \
                          charitable giving."
                .to_string(),
            priority: Priority::High,
        });
    } else if income < Decimal::from(100_000) {
        tips.push(OptimizationTip {
            title: "Consider Bunching Deductions".to_string(),
            description: "Consider \"bunching\" charitable contributions every other year to \
                          exceed standard deduction."
                .to_string(),
            priority: Priority::Medium,
        });
    } else {
        tips.push(OptimizationTip {
            title: "Maximize High-Income Deductions".to_string(),
            description: "Take advantage of SALT deduction (up to $10K) and mortgage interest \
                          deductions."
                .to_string(),
            priority: Priority::High,
        });
    }

    if (current_deductions - standard_deduction).abs() < Decimal::from(2_000) {
        tips.push(OptimizationTip {
            title: "Track Small Deductions".to_string(),
            description: "You're close to the threshold - small deductions can make a big \
                          difference."
                .to_string(),
            priority: Priority::Medium,
        });
    }

    tips.push(OptimizationTip {
        title: "Year-End Tax Planning".to_string(),
        description: "Consider timing charitable contributions and business expenses before \
                      year-end."
            .to_string(),
        priority: Priority::Medium,
    });

    tips.push(OptimizationTip {
        title: "Keep Detailed Records".to_string(),
        description: "Maintain receipts and documentation for all potential deductions."
            .to_string(),
        priority: Priority::High,
    });

    tips
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // missed opportunity tests
    // =========================================================================

    #[test]
    fn salt_fires_above_50k_with_low_deductions() {
        let opportunities = missed_deduction_opportunities(dec!(60000), dec!(1000));

        let salt = opportunities
            .iter()
            .find(|o| o.category == OpportunityCategory::Salt)
            .unwrap();
        // 8% of 60000 = 4800, under the $10K cap; savings at 22%.
        assert!(salt.description.contains("$4,800"));
        assert_eq!(salt.potential_savings, SavingsEstimate::Amount(dec!(1056)));
    }

    #[test]
    fn salt_estimate_caps_at_ten_thousand() {
        let opportunities = missed_deduction_opportunities(dec!(200000), dec!(1000));

        let salt = opportunities
            .iter()
            .find(|o| o.category == OpportunityCategory::Salt)
            .unwrap();
        assert!(salt.description.contains("$10,000"));
        assert_eq!(salt.potential_savings, SavingsEstimate::Amount(dec!(2200)));
    }

    #[test]
    fn salt_skipped_at_or_below_50k() {
        let opportunities = missed_deduction_opportunities(dec!(50000), dec!(0));

        assert!(
            opportunities
                .iter()
                .all(|o| o.category != OpportunityCategory::Salt)
        );
    }

    #[test]
    fn charitable_fires_when_deductions_below_estimate() {
        let opportunities = missed_deduction_opportunities(dec!(60000), dec!(1000));

        let charitable = opportunities
            .iter()
            .find(|o| o.category == OpportunityCategory::Charitable)
            .unwrap();
        // 2.5% of 60000 = 1500.
        assert!(charitable.description.contains("$1,500"));
        assert_eq!(
            charitable.potential_savings,
            SavingsEstimate::Amount(dec!(330))
        );
    }

    #[test]
    fn medical_is_informational_above_40k() {
        let opportunities = missed_deduction_opportunities(dec!(60000), dec!(1000));

        let medical = opportunities
            .iter()
            .find(|o| o.category == OpportunityCategory::Medical)
            .unwrap();
        assert!(medical.description.contains("$4,500"));
        assert_eq!(medical.potential_savings, SavingsEstimate::Varies);
    }

    #[test]
    fn mortgage_fires_above_60k_with_low_deductions() {
        let opportunities = missed_deduction_opportunities(dec!(70000), dec!(14000));

        assert!(
            opportunities
                .iter()
                .any(|o| o.category == OpportunityCategory::Mortgage)
        );
    }

    #[test]
    fn mortgage_skipped_with_high_deductions() {
        let opportunities = missed_deduction_opportunities(dec!(70000), dec!(16000));

        assert!(
            opportunities
                .iter()
                .all(|o| o.category != OpportunityCategory::Mortgage)
        );
    }

    #[test]
    fn low_income_with_covered_deductions_fires_nothing() {
        let opportunities = missed_deduction_opportunities(dec!(30000), dec!(5000));

        assert!(opportunities.is_empty());
    }

    // =========================================================================
    // optimization tip tests
    // =========================================================================

    #[test]
    fn low_income_tier_tip() {
        let tips = optimization_tips(dec!(40000), dec!(15000), dec!(5000));

        assert_eq!(tips[0].title, "Focus on Major Deductions");
        assert_eq!(tips[0].priority, Priority::High);
    }

    #[test]
    fn middle_income_tier_suggests_bunching() {
        let tips = optimization_tips(dec!(75000), dec!(15000), dec!(5000));

        assert_eq!(tips[0].title, "Consider Bunching Deductions");
        assert_eq!(tips[0].priority, Priority::Medium);
    }

    #[test]
    fn high_income_tier_tip() {
        let tips = optimization_tips(dec!(150000), dec!(15000), dec!(5000));

        assert_eq!(tips[0].title, "Maximize High-Income Deductions");
    }

    #[test]
    fn small_gap_adds_tracking_tip() {
        let tips = optimization_tips(dec!(75000), dec!(15000), dec!(14000));

        assert!(tips.iter().any(|t| t.title == "Track Small Deductions"));
    }

    #[test]
    fn wide_gap_skips_tracking_tip() {
        let tips = optimization_tips(dec!(75000), dec!(15000), dec!(5000));

        assert!(tips.iter().all(|t| t.title != "Track Small Deductions"));
    }

    #[test]
    fn timing_and_record_keeping_tips_always_present() {
        let tips = optimization_tips(dec!(40000), dec!(15000), dec!(0));

        assert!(tips.iter().any(|t| t.title == "Year-End Tax Planning"));
        assert!(tips.iter().any(|t| t.title == "Keep Detailed Records"));
    }
}
