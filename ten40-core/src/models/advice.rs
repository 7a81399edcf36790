//! Contract types for the external deduction-advice service.
//!
//! The service is optional. Implementations live outside this crate; the
//! advisor only sees the [`AdviceProvider`] trait and degrades to local
//! heuristics on any error.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FilingStatus, Priority};

/// Longest free-text excerpt carried through to the analysis.
const ADVICE_EXCERPT_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("advice request failed: {0}")]
    Transport(String),

    #[error("advice service returned status {0}")]
    Status(u16),

    #[error("advice service returned an empty response")]
    EmptyResponse,
}

/// Anonymized tier data sent to the advice service. Exact income is never
/// transmitted, only the coarse band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceRequest {
    pub income_range: String,
    pub filing_status: FilingStatus,
    pub itemized_deductions: Decimal,
    pub standard_deduction: Decimal,
    pub deduction_gap: Decimal,
    pub tax_year: i32,
}

/// Savings figure attached to a raw opportunity: a number, a phrase such as
/// `"around $900"`, or absent entirely. The service is not required to
/// return numeric estimates; the advisor normalizes whatever arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavingsHint {
    Amount(Decimal),
    Text(String),
}

/// A missed-deduction entry as the service sends it: either a structured
/// object or a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawOpportunity {
    Detailed {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        potential_savings: Option<SavingsHint>,
        #[serde(default)]
        tips: Vec<String>,
    },
    Text(String),
}

/// An optimization tip as the service sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTip {
    Detailed {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        priority: Option<Priority>,
    },
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub missed_opportunities: Vec<RawOpportunity>,
    #[serde(default)]
    pub optimization_tips: Vec<RawTip>,
    #[serde(default)]
    pub specific_advice: Option<String>,
}

impl AdviceResponse {
    /// Wraps an unstructured free-text reply in the structured shape, so the
    /// advisor has a single downstream path. Long replies are excerpted.
    pub fn from_text(text: &str) -> Self {
        let excerpt = excerpt(text);
        Self {
            strategy: Some("See AI advice below".to_string()),
            missed_opportunities: vec![RawOpportunity::Detailed {
                title: Some("AI Tax Advice".to_string()),
                description: Some(excerpt.clone()),
                potential_savings: None,
                tips: Vec::new(),
            }],
            optimization_tips: vec![RawTip::Detailed {
                title: Some("AI Tax Optimization".to_string()),
                description: Some(
                    "Review the AI advice for personalized recommendations.".to_string(),
                ),
                priority: Some(Priority::Medium),
            }],
            specific_advice: Some(excerpt),
        }
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > ADVICE_EXCERPT_CHARS {
        let head: String = text.chars().take(ADVICE_EXCERPT_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Seam to the external advice service. One attempt per calculation; any
/// failure sends the advisor down the fallback path.
#[async_trait]
pub trait AdviceProvider: Send + Sync {
    async fn deduction_advice(
        &self,
        request: &AdviceRequest,
    ) -> Result<AdviceResponse, AdviceError>;
}
