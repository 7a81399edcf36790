use std::time::Duration;

use async_trait::async_trait;
use ten40_core::{AdviceError, AdviceProvider, AdviceRequest, AdviceResponse};
use tracing::debug;

/// One attempt per calculation; the advisor falls back rather than wait out
/// a slow service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for the advice service. Both values must be present
/// for the collaborator to be enabled.
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    pub endpoint: String,
    pub token: String,
}

impl AdviceConfig {
    pub const ENDPOINT_VAR: &'static str = "TEN40_ADVICE_URL";
    pub const TOKEN_VAR: &'static str = "TEN40_ADVICE_TOKEN";

    /// Reads the endpoint and credential from the environment. Either one
    /// missing or empty disables the collaborator entirely.
    pub fn from_env() -> Option<Self> {
        let endpoint = std::env::var(Self::ENDPOINT_VAR).ok()?;
        let token = std::env::var(Self::TOKEN_VAR).ok()?;
        if endpoint.trim().is_empty() || token.trim().is_empty() {
            return None;
        }
        Some(Self { endpoint, token })
    }
}

/// [`AdviceProvider`] backed by a JSON-over-HTTP advice service.
///
/// The reply may be the structured payload or free text; anything that is
/// not valid JSON is wrapped via [`AdviceResponse::from_text`] so the
/// advisor sees one shape either way.
pub struct HttpAdviceClient {
    http: reqwest::Client,
    config: AdviceConfig,
}

impl HttpAdviceClient {
    /// Builds a client with the bounded request timeout.
    pub fn new(config: AdviceConfig) -> Result<Self, AdviceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AdviceError::Transport(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl AdviceProvider for HttpAdviceClient {
    async fn deduction_advice(
        &self,
        request: &AdviceRequest,
    ) -> Result<AdviceResponse, AdviceError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.token)
            .json(request)
            .send()
            .await
            .map_err(|e| AdviceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdviceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AdviceError::Transport(e.to_string()))?;
        if body.trim().is_empty() {
            return Err(AdviceError::EmptyResponse);
        }

        match serde_json::from_str::<AdviceResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(error) => {
                debug!(%error, "advice reply was not structured JSON, treating as text");
                Ok(AdviceResponse::from_text(&body))
            }
        }
    }
}
