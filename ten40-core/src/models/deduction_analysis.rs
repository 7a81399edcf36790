use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionStrategy {
    Standard,
    Itemize,
}

impl DeductionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Itemize => "itemize",
        }
    }
}

/// Shared high/medium/low grading used for recommendation impact and tip
/// priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Strategy,
    Opportunity,
    AiStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub impact: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityCategory {
    Salt,
    Charitable,
    Medical,
    Mortgage,
    /// Sourced from the external advice service rather than a local rule.
    External,
}

/// Estimated tax savings for a missed opportunity. Some categories have no
/// meaningful dollar estimate and report `Varies` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsEstimate {
    Amount(Decimal),
    Varies,
}

impl Serialize for SavingsEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(amount) => Serialize::serialize(amount, serializer),
            Self::Varies => serializer.serialize_str("Varies"),
        }
    }
}

impl<'de> Deserialize<'de> for SavingsEstimate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Amount(Decimal),
            Text(String),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Amount(amount) => Ok(Self::Amount(amount)),
            Repr::Text(_) => Ok(Self::Varies),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedOpportunity {
    pub category: OpportunityCategory,
    pub title: String,
    pub description: String,
    pub potential_savings: SavingsEstimate,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationTip {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

/// Full deduction-strategy analysis attached to every calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionAnalysis {
    pub standard_deduction: Decimal,
    pub itemized_deductions: Decimal,
    pub recommended_strategy: DeductionStrategy,
    pub tax_savings_from_itemizing: Decimal,
    pub deduction_gap: Decimal,
    pub recommendations: Vec<Recommendation>,
    pub missed_opportunities: Vec<MissedOpportunity>,
    pub optimization_tips: Vec<OptimizationTip>,
    pub ai_advice: Option<String>,
}
