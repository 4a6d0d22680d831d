//! Concierge - AI goal-narrowing wizard.
//!
//! Users answer a short sequence of generated multiple-choice questions,
//! give a postal code, and receive a simulated execution plan. Prompt
//! templates live in an editable store.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use concierge::{ConciergeConfig, GeminiClient, InMemoryPromptStore, PlanSimulator, Wizard};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConciergeConfig::load()?;
//!     let generator = GeminiClient::from_config(&config.generator)?;
//!     let mut wizard = Wizard::new(
//!         generator,
//!         InMemoryPromptStore::with_defaults(),
//!         PlanSimulator,
//!         &config,
//!     );
//!
//!     let snapshot = wizard.select_choice(0, "地元のお店を予約・注文したい").await?;
//!     println!("{:?}", snapshot.phase());
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `database` - PostgreSQL template store
//!
//! # Architecture
//!
//! - `concierge_error` - Error types
//! - `concierge_core` - Data model
//! - `concierge_interface` - Collaborator traits
//! - `concierge_config` - Layered configuration
//! - `concierge_models` - Gemini client
//! - `concierge_database` - PostgreSQL template store
//! - `concierge_wizard` - Wizard, extraction, rendering, simulation
//!
//! This crate re-exports everything for convenience.

pub use concierge_config::*;
pub use concierge_core::*;
pub use concierge_error::*;
pub use concierge_interface::*;
pub use concierge_models::*;
pub use concierge_wizard::*;

#[cfg(feature = "database")]
pub use concierge_database::{PgPool, PostgresPromptStore, establish_pool, run_migrations};
