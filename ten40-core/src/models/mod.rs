mod advice;
mod deduction_analysis;
mod filing_status;
mod tax_bracket;
mod tax_result;

pub use advice::{
    AdviceError, AdviceProvider, AdviceRequest, AdviceResponse, RawOpportunity, RawTip,
    SavingsHint,
};
pub use deduction_analysis::{
    DeductionAnalysis, DeductionStrategy, MissedOpportunity, OpportunityCategory,
    OptimizationTip, Priority, Recommendation, RecommendationKind, SavingsEstimate,
};
pub use filing_status::FilingStatus;
pub use tax_bracket::{BracketSlice, TaxBracket};
pub use tax_result::{DeductionType, TaxResult};
