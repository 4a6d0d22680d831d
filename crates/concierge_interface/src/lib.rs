//! Trait definitions for the collaborators of the Concierge wizard.
//!
//! The wizard never talks to a concrete service. It is handed
//! implementations of these traits at construction time, so production
//! clients and test doubles are interchangeable.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod generator;
mod store;

pub use executor::PlanExecutor;
pub use generator::TextGenerator;
pub use store::PromptTemplateStore;
