//! Goal-narrowing wizard for Concierge.
//!
//! This crate holds the dialogue logic: template rendering, extraction of
//! structured choices from model text, the wizard state machine, the
//! execution simulator and headline generation. Collaborators (text
//! generator, template store, executor) are injected through the traits in
//! `concierge_interface`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod defaults;
mod extraction;
mod headline;
mod render;
mod request;
mod simulator;
mod store;
mod wizard;

pub use defaults::{check_placeholders, default_templates, required_placeholders, seed_defaults};
pub use extraction::{
    CHOICES_PER_STEP, ChoiceSet, ExpectedShape, GuidedStep, extract, extract_json,
};
pub use headline::HeadlineGenerator;
pub use render::{placeholders, render};
pub use simulator::{PlanSimulator, region_label, simulate};
pub use store::InMemoryPromptStore;
pub use wizard::{Wizard, WizardPhase, WizardSnapshot, first_step};
