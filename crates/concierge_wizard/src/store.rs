//! In-memory prompt template store.

use async_trait::async_trait;
use concierge_core::PromptTemplate;
use concierge_error::ConciergeResult;
use concierge_interface::PromptTemplateStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local template store.
///
/// Rows are kept in a `BTreeMap`, so `list` is ordered by function id.
/// All data is lost when the last clone is dropped.
///
/// # Example
///
/// ```
/// use concierge_core::PromptTemplate;
/// use concierge_interface::PromptTemplateStore;
/// use concierge_wizard::InMemoryPromptStore;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = InMemoryPromptStore::new();
/// store.put(&PromptTemplate::new("choice_generator", "{history}", "")).await.unwrap();
/// assert!(store.get("choice_generator").await.unwrap().is_some());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryPromptStore {
    templates: Arc<RwLock<BTreeMap<String, PromptTemplate>>>,
}

impl InMemoryPromptStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `templates`.
    pub fn with_templates(templates: impl IntoIterator<Item = PromptTemplate>) -> Self {
        let map = templates
            .into_iter()
            .map(|t| (t.function_id().clone(), t))
            .collect();
        Self {
            templates: Arc::new(RwLock::new(map)),
        }
    }

    /// Create a store holding the bundled defaults.
    pub fn with_defaults() -> Self {
        Self::with_templates(crate::default_templates())
    }

    /// Number of stored templates.
    pub async fn len(&self) -> usize {
        self.templates.read().await.len()
    }

    /// Whether the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.templates.read().await.is_empty()
    }
}

#[async_trait]
impl PromptTemplateStore for InMemoryPromptStore {
    async fn get(&self, function_id: &str) -> ConciergeResult<Option<PromptTemplate>> {
        Ok(self.templates.read().await.get(function_id).cloned())
    }

    async fn put(&self, template: &PromptTemplate) -> ConciergeResult<()> {
        self.templates
            .write()
            .await
            .insert(template.function_id().clone(), template.clone());
        Ok(())
    }

    async fn list(&self) -> ConciergeResult<Vec<PromptTemplate>> {
        Ok(self.templates.read().await.values().cloned().collect())
    }
}
