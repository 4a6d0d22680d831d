//! PostgreSQL storage for Concierge prompt templates.
//!
//! Templates live in the `ai_prompts` table keyed by function id. The
//! schema ships as an embedded migration.
//!
//! # Example
//!
//! ```no_run
//! use concierge_database::{PostgresPromptStore, establish_pool, run_migrations};
//! use concierge_interface::PromptTemplateStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = establish_pool("postgres://localhost/concierge", 4)?;
//! run_migrations(&pool)?;
//! let store = PostgresPromptStore::new(pool);
//! for template in store.list().await? {
//!     println!("{}", template.function_id());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod connection;
mod models;
mod prompt_repository;
#[allow(missing_docs)]
pub mod schema;

pub use connection::{PgPool, establish_pool, run_migrations};
pub use models::PromptRow;
pub use prompt_repository::PostgresPromptStore;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, concierge_error::StoreError>;
