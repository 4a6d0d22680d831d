//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! concierge binary.

mod commands;
mod headline;
mod prompts;
mod setup;
mod wizard;

pub use commands::{Cli, Commands};
pub use headline::generate_headline;
pub use prompts::handle_prompt_command;
pub use wizard::run_wizard;
