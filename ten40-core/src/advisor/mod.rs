//! Deduction strategy analysis.
//!
//! The advisor decides itemize-vs-standard, estimates what itemizing is
//! worth, and fills the missed-opportunity and optimization-tip lists from
//! one of two sources: the external advice service when it answers, or the
//! local heuristics otherwise. The fork is exclusive; the two sources are
//! never blended.

mod estimate;
mod heuristics;
mod normalize;

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::brackets::BracketSchedule;
use crate::calculations::common::round_dollars;
use crate::config::TaxYearConfig;
use crate::models::{
    AdviceProvider, AdviceRequest, AdviceResponse, DeductionAnalysis, DeductionStrategy,
    FilingStatus, Priority, Recommendation, RecommendationKind,
};
use crate::money::format_usd;

/// Itemized shortfalls at or below this still get a "close to threshold"
/// nudge.
const NEAR_THRESHOLD: i64 = 5_000;

/// Which source filled the opportunity and tip lists.
enum AdviceSource {
    Fallback,
    Collaborator(AdviceResponse),
}

#[derive(Debug, Clone)]
pub struct DeductionAdvisor<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> DeductionAdvisor<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    /// Analyzes the filer's deduction position.
    ///
    /// `itemized_deductions` is the raw user-entered total, deliberately not
    /// the floored amount the calculator taxes on. Never fails: collaborator
    /// errors degrade to the local heuristics.
    pub async fn analyze(
        &self,
        income: Decimal,
        status: FilingStatus,
        itemized_deductions: Decimal,
        advice: Option<&dyn AdviceProvider>,
    ) -> DeductionAnalysis {
        let standard_deduction = self.config.standard_deduction(status);
        let schedule = BracketSchedule::new(self.config.brackets(status));

        let mut recommendations = Vec::new();
        let recommended_strategy;
        let deduction_gap;
        let mut tax_savings_from_itemizing = Decimal::ZERO;

        if itemized_deductions > standard_deduction {
            recommended_strategy = DeductionStrategy::Itemize;
            deduction_gap = itemized_deductions - standard_deduction;

            // Simplified lookup by gross income; the calculator's own
            // marginal rate scans taxable income instead. The 12% default is
            // unreachable with the shipped tables.
            let marginal_rate = schedule.rate_for(income).unwrap_or(Decimal::new(12, 2));
            tax_savings_from_itemizing = round_dollars(deduction_gap * marginal_rate);

            recommendations.push(Recommendation {
                kind: RecommendationKind::Strategy,
                title: "Itemize Your Deductions".to_string(),
                description: format!(
                    "You save {} by itemizing vs. standard deduction.",
                    format_usd(tax_savings_from_itemizing)
                ),
                impact: Priority::High,
            });
        } else {
            recommended_strategy = DeductionStrategy::Standard;
            deduction_gap = standard_deduction - itemized_deductions;

            recommendations.push(Recommendation {
                kind: RecommendationKind::Strategy,
                title: "Take the Standard Deduction".to_string(),
                description: format!(
                    "Standard deduction saves you {} vs. itemizing.",
                    format_usd(deduction_gap)
                ),
                impact: Priority::High,
            });

            if deduction_gap <= Decimal::from(NEAR_THRESHOLD) {
                recommendations.push(Recommendation {
                    kind: RecommendationKind::Opportunity,
                    title: "Close to Itemizing Threshold".to_string(),
                    description: format!(
                        "You need {} more in deductions to benefit from itemizing.",
                        format_usd(deduction_gap)
                    ),
                    impact: Priority::Medium,
                });
            }
        }

        let source = self
            .fetch_advice(income, status, itemized_deductions, standard_deduction, advice)
            .await;

        let (missed_opportunities, optimization_tips, ai_advice) = match source {
            AdviceSource::Collaborator(response) => {
                let marginal_rate = schedule.rate_for(income).unwrap_or(Decimal::new(22, 2));

                if let Some(strategy) = response.strategy.as_deref() {
                    if !strategy.is_empty() {
                        recommendations.push(Recommendation {
                            kind: RecommendationKind::AiStrategy,
                            title: "AI Tax Advisor Recommendation".to_string(),
                            description: format!("AI suggests: {strategy}"),
                            impact: Priority::High,
                        });
                    }
                }

                (
                    normalize::shape_opportunities(
                        &response.missed_opportunities,
                        income,
                        marginal_rate,
                    ),
                    normalize::shape_tips(&response.optimization_tips),
                    response.specific_advice,
                )
            }
            AdviceSource::Fallback => (
                heuristics::missed_deduction_opportunities(income, itemized_deductions),
                heuristics::optimization_tips(income, standard_deduction, itemized_deductions),
                None,
            ),
        };

        DeductionAnalysis {
            standard_deduction,
            itemized_deductions,
            recommended_strategy,
            tax_savings_from_itemizing,
            deduction_gap,
            recommendations,
            missed_opportunities,
            optimization_tips,
            ai_advice,
        }
    }

    /// Single attempt against the collaborator; every failure mode lands on
    /// the fallback path.
    async fn fetch_advice(
        &self,
        income: Decimal,
        status: FilingStatus,
        itemized_deductions: Decimal,
        standard_deduction: Decimal,
        advice: Option<&dyn AdviceProvider>,
    ) -> AdviceSource {
        let Some(provider) = advice else {
            return AdviceSource::Fallback;
        };

        let request = AdviceRequest {
            income_range: income_range(income).to_string(),
            filing_status: status,
            itemized_deductions,
            standard_deduction,
            deduction_gap: (itemized_deductions - standard_deduction).abs(),
            tax_year: self.config.tax_year,
        };

        match provider.deduction_advice(&request).await {
            Ok(response) => AdviceSource::Collaborator(response),
            Err(error) => {
                warn!(%error, "advice service unavailable, using local analysis");
                AdviceSource::Fallback
            }
        }
    }
}

/// Coarse income band shared with the advice service in place of the exact
/// figure.
pub fn income_range(income: Decimal) -> &'static str {
    if income < Decimal::from(30_000) {
        "$20K-$30K"
    } else if income < Decimal::from(50_000) {
        "$30K-$50K"
    } else if income < Decimal::from(75_000) {
        "$50K-$75K"
    } else if income < Decimal::from(100_000) {
        "$75K-$100K"
    } else if income < Decimal::from(150_000) {
        "$100K-$150K"
    } else if income < Decimal::from(250_000) {
        "$150K-$250K"
    } else if income < Decimal::from(500_000) {
        "$250K-$500K"
    } else {
        "$500K+"
    }
}
