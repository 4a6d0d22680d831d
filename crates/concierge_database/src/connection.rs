//! Database connection utilities.

use crate::StoreResult;
use concierge_error::{StoreError, StoreErrorKind};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};

/// Connection pool type used by the store.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Build a connection pool for `database_url`.
///
/// # Errors
///
/// Returns an error if no connection can be established.
#[instrument(skip(database_url))]
pub fn establish_pool(database_url: &str, max_size: u32) -> StoreResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns an error if a connection cannot be checked out or a migration
/// fails.
#[instrument(skip(pool))]
pub fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    let mut conn = pool
        .get()
        .map_err(|e| StoreError::new(StoreErrorKind::Connection(e.to_string())))?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::new(StoreErrorKind::Migration(e.to_string())))?;

    info!(count = applied.len(), "Applied pending migrations");
    Ok(())
}
