//! Request and response types for text completion.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-shot completion request.
///
/// # Examples
///
/// ```
/// use concierge_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .model("gemini-2.5-flash")
///     .prompt("Say hello")
///     .temperature(Some(0.7_f32))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gemini-2.5-flash");
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier to use
    model: String,
    /// Fully rendered prompt text
    prompt: String,
    /// Sampling temperature (0.0 to 2.0)
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new request builder.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// Text returned by a completion call.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct CompletionResponse {
    /// Generated text
    text: String,
}

impl CompletionResponse {
    /// Wrap generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Creates a new response builder.
    pub fn builder() -> CompletionResponseBuilder {
        CompletionResponseBuilder::default()
    }
}
