//! Generative text service trait.

use async_trait::async_trait;
use concierge_core::{CompletionRequest, CompletionResponse};
use concierge_error::ConciergeResult;
use std::sync::Arc;

/// Core trait that every generative text backend implements.
///
/// Text in, text out. Callers get no guarantee about the shape of the
/// returned text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Complete a rendered prompt.
    ///
    /// # Errors
    ///
    /// Returns a service error if the backend is unreachable, answers with
    /// a failure status, or produces no text.
    async fn complete(&self, req: &CompletionRequest) -> ConciergeResult<CompletionResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn complete(&self, req: &CompletionRequest) -> ConciergeResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn complete(&self, req: &CompletionRequest) -> ConciergeResult<CompletionResponse> {
        (**self).complete(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
