//! Core data types for the Concierge goal-narrowing wizard.
//!
//! This crate provides the foundation data types shared by every Concierge
//! crate: choices and steps of the narrowing dialogue, prompt templates,
//! locality codes, goal descriptors and completion request/response types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choice;
mod execution;
mod goal;
mod locality;
mod request;
mod step;
mod telemetry;
mod template;

pub use choice::{Choice, ChoiceBuilder};
pub use execution::ExecutionResult;
pub use goal::{GOAL_PATH_SEPARATOR, GoalDescriptor};
pub use locality::{LOCALITY_CODE_LEN, LocalityCode};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, CompletionResponseBuilder,
};
pub use step::Step;
pub use telemetry::init_tracing;
pub use template::{FunctionId, PromptTemplate, PromptTemplateBuilder};
