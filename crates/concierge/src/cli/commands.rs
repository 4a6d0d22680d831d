//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Concierge - narrow a goal down with generated choices
#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(about = "Narrow a goal down with AI-generated choices", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the layered search)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the narrowing wizard in the terminal
    Wizard,

    /// Generate a dashboard headline for a usage preference
    Headline {
        /// How you want to use the service
        preference: String,
    },

    /// Print the simulated execution plan for a goal
    Simulate {
        /// Goal path, segments separated by " > "
        goal_path: String,

        /// 7-digit postal code
        locality_code: String,
    },

    /// Prompt template administration
    #[command(subcommand)]
    Prompts(PromptCommands),
}

/// Prompt template subcommands
#[derive(Subcommand, Debug)]
pub enum PromptCommands {
    /// List all templates ordered by function id
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Show one template
    Show {
        /// Function id of the template
        function_id: String,
    },

    /// Create or edit a template
    Set {
        /// Function id of the template
        function_id: String,

        /// New template text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read the template text from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Save even if a required placeholder is missing
        #[arg(long)]
        force: bool,
    },

    /// Insert the bundled templates that are missing
    Seed,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
