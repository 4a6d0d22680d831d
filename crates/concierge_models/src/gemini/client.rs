//! Gemini `generateContent` client.

use super::dto::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use concierge_config::GeneratorConfig;
use concierge_core::{CompletionRequest, CompletionResponse};
use concierge_error::{ConciergeResult, HttpError, ServiceError, ServiceErrorKind};
use concierge_interface::TextGenerator;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Gemini REST client.
///
/// One request per call, no retry. The timeout bounds each call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client from generator settings, reading the API key from
    /// the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key is not set in the environment
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(base_url = %config.base_url))]
    pub fn from_config(config: &GeneratorConfig) -> ConciergeResult<Self> {
        let api_key = config.api_key()?;
        Self::with_api_key(api_key, &config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_api_key(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ConciergeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HttpError::from)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, req), fields(model = %req.model(), prompt_length = req.prompt().len()))]
    async fn complete(&self, req: &CompletionRequest) -> ConciergeResult<CompletionResponse> {
        let body = GenerateContentRequest::from(req);
        let url = self.endpoint(req.model());
        debug!(url = %url, "Sending Gemini request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                ServiceError::new(ServiceErrorKind::Unreachable(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Gemini returned error status");
            return Err(ServiceError::new(ServiceErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::new(ServiceErrorKind::Decode(e.to_string())))?;

        let text = parsed.text().ok_or_else(|| {
            warn!(
                candidates = parsed.candidates.len(),
                "Gemini returned an empty response"
            );
            ServiceError::new(ServiceErrorKind::EmptyResponse)
        })?;

        debug!(response_length = text.len(), "Received Gemini response");
        Ok(CompletionResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::with_api_key(
            "key",
            "https://generativelanguage.googleapis.com/v1beta/",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            client.endpoint("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_service_error() {
        let client =
            GeminiClient::with_api_key("key", "http://127.0.0.1:9", Duration::from_secs(2))
                .unwrap();
        let req = CompletionRequest::builder()
            .model("gemini-2.5-flash")
            .prompt("hi")
            .build()
            .unwrap();

        let err = client.complete(&req).await.unwrap_err();
        assert!(err.is_transient());
        assert!(format!("{}", err).contains("unreachable"));
    }
}
