use std::sync::Arc;

use ten40_core::{AdviceProvider, TaxYearConfig};

/// Process-wide immutable state shared by all request handlers.
///
/// Built once at startup; handlers only ever read it, so no synchronization
/// is needed beyond the `Arc` actix wraps it in.
pub struct AppState {
    pub config: TaxYearConfig,
    advice: Option<Arc<dyn AdviceProvider>>,
}

impl AppState {
    pub fn new(config: TaxYearConfig, advice: Option<Arc<dyn AdviceProvider>>) -> Self {
        Self { config, advice }
    }

    pub fn advice_provider(&self) -> Option<&dyn AdviceProvider> {
        self.advice.as_deref()
    }
}
