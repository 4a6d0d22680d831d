//! Collaborator construction from configuration.

use concierge::{
    ConciergeConfig, ConciergeResult, ConfigError, GeminiClient, GeneratorConfig,
    InMemoryPromptStore, PromptTemplateStore, StoreBackend, StoreConfig,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Shared handle to whichever template store is configured.
pub type SharedStore = Arc<dyn PromptTemplateStore>;

/// Load configuration from `path`, or from the layered search.
pub fn load_config(path: Option<&Path>) -> ConciergeResult<ConciergeConfig> {
    match path {
        Some(path) => ConciergeConfig::from_file(path),
        None => ConciergeConfig::load(),
    }
}

/// Build the configured text generator.
///
/// # Errors
///
/// Returns a configuration error for an unknown provider or a missing API
/// key.
#[instrument(skip_all, fields(provider = %config.provider, model = %config.model))]
pub fn open_generator(config: &GeneratorConfig) -> ConciergeResult<GeminiClient> {
    match config.provider.as_str() {
        "gemini" => GeminiClient::from_config(config),
        other => Err(ConfigError::new(format!("Unknown generator provider: {}", other)).into()),
    }
}

/// Open the configured template store.
#[instrument(skip_all, fields(backend = %config.backend))]
pub async fn open_store(config: &StoreConfig) -> ConciergeResult<SharedStore> {
    match config.backend {
        StoreBackend::Memory => {
            debug!("Using in-memory template store");
            Ok(Arc::new(InMemoryPromptStore::with_defaults()))
        }
        StoreBackend::Postgres => open_postgres(config).await,
    }
}

#[cfg(feature = "database")]
async fn open_postgres(config: &StoreConfig) -> ConciergeResult<SharedStore> {
    use concierge::{PostgresPromptStore, establish_pool, run_migrations, seed_defaults};

    let url = config.database_url()?;
    let pool = establish_pool(&url, 4)?;
    run_migrations(&pool)?;
    let store = PostgresPromptStore::new(pool);

    if config.seed_defaults {
        seed_defaults(&store).await?;
    }
    info!("Using PostgreSQL template store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "database"))]
async fn open_postgres(_config: &StoreConfig) -> ConciergeResult<SharedStore> {
    info!("PostgreSQL backend requested without database support");
    Err(ConfigError::new(
        "store.backend = \"postgres\" requires the database feature. Rebuild with --features database",
    )
    .into())
}
