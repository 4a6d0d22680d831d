//! Concierge CLI binary.
//!
//! This binary provides command-line access to Concierge:
//! - Run the narrowing wizard in the terminal
//! - Generate personalized headlines
//! - Administer prompt templates

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, generate_headline, handle_prompt_command, run_wizard};

    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    concierge::init_tracing(log_level).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let config_path = cli.config.as_deref();

    // Execute the requested command
    match cli.command {
        Commands::Wizard => {
            run_wizard(config_path).await?;
        }

        Commands::Headline { preference } => {
            generate_headline(config_path, &preference).await?;
        }

        Commands::Simulate {
            goal_path,
            locality_code,
        } => {
            println!("{}", concierge::simulate(&goal_path, &locality_code));
        }

        Commands::Prompts(prompt_cmd) => {
            handle_prompt_command(config_path, prompt_cmd).await?;
        }
    }

    Ok(())
}
