//! Shapes raw advice-service entries into the local analysis types.
//!
//! One formatter for both the structured and free-text reply forms, so the
//! exclusive source fork in the advisor has a single downstream path.

use rust_decimal::Decimal;

use super::estimate::estimate_savings;
use crate::models::{
    MissedOpportunity, OpportunityCategory, OptimizationTip, Priority, RawOpportunity, RawTip,
    SavingsEstimate,
};

pub(crate) fn shape_opportunities(
    raw: &[RawOpportunity],
    income: Decimal,
    marginal_rate: Decimal,
) -> Vec<MissedOpportunity> {
    raw.iter()
        .map(|opportunity| match opportunity {
            RawOpportunity::Detailed {
                title,
                description,
                potential_savings,
                tips,
            } => {
                let description = description.clone().unwrap_or_default();
                let savings = estimate_savings(
                    potential_savings.as_ref(),
                    &description,
                    income,
                    marginal_rate,
                );
                MissedOpportunity {
                    category: OpportunityCategory::External,
                    title: title
                        .clone()
                        .unwrap_or_else(|| "AI-Generated Opportunity".to_string()),
                    description,
                    potential_savings: SavingsEstimate::Amount(savings),
                    tips: tips.clone(),
                }
            }
            RawOpportunity::Text(text) => MissedOpportunity {
                category: OpportunityCategory::External,
                title: "AI Tax Opportunity".to_string(),
                description: text.clone(),
                potential_savings: SavingsEstimate::Amount(estimate_savings(
                    None,
                    text,
                    income,
                    marginal_rate,
                )),
                tips: Vec::new(),
            },
        })
        .collect()
}

pub(crate) fn shape_tips(raw: &[RawTip]) -> Vec<OptimizationTip> {
    raw.iter()
        .map(|tip| match tip {
            RawTip::Detailed {
                title,
                description,
                priority,
            } => OptimizationTip {
                title: title.clone().unwrap_or_else(|| "AI Tax Tip".to_string()),
                description: description.clone().unwrap_or_default(),
                priority: priority.unwrap_or(Priority::Medium),
            },
            RawTip::Text(text) => OptimizationTip {
                title: "AI Tax Optimization".to_string(),
                description: text.clone(),
                priority: Priority::Medium,
            },
        })
        .collect()
}
