use concierge_config::GeneratorConfig;
use concierge_core::CompletionRequest;
use concierge_error::{BuilderError, ConciergeResult};

/// Build a completion request carrying the configured sampling settings.
pub(crate) fn completion_request(
    config: &GeneratorConfig,
    prompt: String,
) -> ConciergeResult<CompletionRequest> {
    CompletionRequest::builder()
        .model(config.model.clone())
        .prompt(prompt)
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .build()
        .map_err(|e| BuilderError::from(e.to_string()).into())
}
