//! PostgreSQL implementation of the prompt template store.

use crate::connection::PgPool;
use crate::models::PromptRow;
use crate::schema::ai_prompts;
use async_trait::async_trait;
use concierge_core::PromptTemplate;
use concierge_error::{ConciergeResult, StoreError, StoreErrorKind};
use concierge_interface::PromptTemplateStore;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use tracing::{debug, instrument};

/// Prompt templates backed by the `ai_prompts` table.
///
/// Diesel is synchronous, so every call checks a connection out of the
/// pool inside `spawn_blocking`.
#[derive(Clone)]
pub struct PostgresPromptStore {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresPromptStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresPromptStore")
            .field("connections", &self.pool.state().connections)
            .finish()
    }
}

type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

impl PostgresPromptStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn with_conn<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgPooled) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(format!("store task failed: {}", e))))?
    }
}

#[async_trait]
impl PromptTemplateStore for PostgresPromptStore {
    #[instrument(skip(self))]
    async fn get(&self, function_id: &str) -> ConciergeResult<Option<PromptTemplate>> {
        let key = function_id.to_string();
        let row = self
            .with_conn(move |conn| {
                ai_prompts::table
                    .find(key)
                    .select(PromptRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(StoreError::from)
            })
            .await?;

        debug!(found = row.is_some(), "Looked up prompt template");
        Ok(row.map(PromptTemplate::from))
    }

    #[instrument(skip(self, template), fields(function_id = %template.function_id()))]
    async fn put(&self, template: &PromptTemplate) -> ConciergeResult<()> {
        let row = PromptRow::from(template);
        self.with_conn(move |conn| {
            diesel::insert_into(ai_prompts::table)
                .values(&row)
                .on_conflict(ai_prompts::function_id)
                .do_update()
                .set((
                    ai_prompts::template_text.eq(&row.template_text),
                    ai_prompts::description.eq(&row.description),
                ))
                .execute(conn)
                .map_err(StoreError::from)
        })
        .await?;

        debug!("Stored prompt template");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ConciergeResult<Vec<PromptTemplate>> {
        let rows = self
            .with_conn(|conn| {
                ai_prompts::table
                    .order(ai_prompts::function_id.asc())
                    .select(PromptRow::as_select())
                    .load(conn)
                    .map_err(StoreError::from)
            })
            .await?;

        debug!(count = rows.len(), "Listed prompt templates");
        Ok(rows.into_iter().map(PromptTemplate::from).collect())
    }
}
