//! Prompt template store trait.

use async_trait::async_trait;
use concierge_core::PromptTemplate;
use concierge_error::{ConciergeResult, TemplateError, TemplateErrorKind};
use std::sync::Arc;

/// Keyed storage of prompt templates.
///
/// The wizard only reads; the admin surface writes.
#[async_trait]
pub trait PromptTemplateStore: Send + Sync {
    /// Fetch a template by function id, `None` if no row exists.
    async fn get(&self, function_id: &str) -> ConciergeResult<Option<PromptTemplate>>;

    /// Insert or replace the row keyed by the template's function id.
    async fn put(&self, template: &PromptTemplate) -> ConciergeResult<()>;

    /// All templates ordered by function id.
    async fn list(&self) -> ConciergeResult<Vec<PromptTemplate>>;

    /// Fetch a template that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::Missing`] when no row exists, in
    /// addition to any store failure.
    async fn require(&self, function_id: &str) -> ConciergeResult<PromptTemplate> {
        match self.get(function_id).await? {
            Some(template) => Ok(template),
            None => {
                tracing::warn!(function_id, "Prompt template missing");
                Err(TemplateError::new(TemplateErrorKind::Missing(function_id.to_string())).into())
            }
        }
    }
}

#[async_trait]
impl<T: PromptTemplateStore + ?Sized> PromptTemplateStore for Arc<T> {
    async fn get(&self, function_id: &str) -> ConciergeResult<Option<PromptTemplate>> {
        (**self).get(function_id).await
    }

    async fn put(&self, template: &PromptTemplate) -> ConciergeResult<()> {
        (**self).put(template).await
    }

    async fn list(&self) -> ConciergeResult<Vec<PromptTemplate>> {
        (**self).list().await
    }
}

#[async_trait]
impl<T: PromptTemplateStore + ?Sized> PromptTemplateStore for Box<T> {
    async fn get(&self, function_id: &str) -> ConciergeResult<Option<PromptTemplate>> {
        (**self).get(function_id).await
    }

    async fn put(&self, template: &PromptTemplate) -> ConciergeResult<()> {
        (**self).put(template).await
    }

    async fn list(&self) -> ConciergeResult<Vec<PromptTemplate>> {
        (**self).list().await
    }
}
