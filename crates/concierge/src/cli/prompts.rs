//! Prompt template administration handlers.

use super::commands::{OutputFormat, PromptCommands};
use super::setup::{SharedStore, load_config, open_store};
use concierge::{
    JsonError, PromptTemplate, StoreBackend, TemplateErrorKind, check_placeholders, seed_defaults,
};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Handle prompt template commands.
pub async fn handle_prompt_command(
    config_path: Option<&Path>,
    cmd: PromptCommands,
) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    if config.store.backend == StoreBackend::Memory && matches!(cmd, PromptCommands::Set { .. }) {
        warn!("The in-memory store is not persisted; edits last only for this process");
    }
    let store = open_store(&config.store).await?;

    match cmd {
        PromptCommands::List { format } => list_prompts(&store, format).await,
        PromptCommands::Show { function_id } => show_prompt(&store, &function_id).await,
        PromptCommands::Set {
            function_id,
            text,
            file,
            description,
            force,
        } => set_prompt(&store, function_id, text, file, description, force).await,
        PromptCommands::Seed => {
            let written = seed_defaults(&store).await?;
            println!("Inserted {} default template(s)", written);
            Ok(())
        }
    }
}

async fn list_prompts(store: &SharedStore, format: OutputFormat) -> anyhow::Result<()> {
    let templates = store.list().await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&templates).map_err(JsonError::from)?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:-<80}", "");
            for template in &templates {
                let flag = match check_placeholders(template) {
                    Ok(()) => String::new(),
                    Err(e) => format!("  (!) {}", e.kind),
                };
                println!("{}{}", template.function_id(), flag);
                if !template.description().is_empty() {
                    println!("  {}", template.description());
                }
                println!("{:-<80}", "");
            }
            println!("Total: {} templates", templates.len());
        }
    }
    Ok(())
}

async fn show_prompt(store: &SharedStore, function_id: &str) -> anyhow::Result<()> {
    let template = store.require(function_id).await?;
    println!("function_id: {}", template.function_id());
    println!("description: {}", template.description());
    println!();
    println!("{}", template.template_text());
    Ok(())
}

async fn set_prompt(
    store: &SharedStore,
    function_id: String,
    text: Option<String>,
    file: Option<PathBuf>,
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let text = match (text, file) {
        (Some(text), _) => Some(text),
        (None, Some(path)) => Some(std::fs::read_to_string(&path)?),
        (None, None) => None,
    };

    let template = match store.get(&function_id).await? {
        Some(mut existing) => {
            let text = text.unwrap_or_else(|| existing.template_text().clone());
            let description = description.unwrap_or_else(|| existing.description().clone());
            existing.edit(text, description);
            existing
        }
        None => {
            let Some(text) = text else {
                anyhow::bail!("'{}' does not exist yet; pass --text or --file", function_id);
            };
            PromptTemplate::new(function_id, text, description.unwrap_or_default())
        }
    };

    if let Err(e) = check_placeholders(&template) {
        if !force {
            return Err(e.into());
        }
        if let TemplateErrorKind::MissingPlaceholder { placeholder, .. } = &e.kind {
            warn!(placeholder = %placeholder, "Saving template without required placeholder");
        }
    }

    store.put(&template).await?;
    println!("Saved '{}'", template.function_id());
    Ok(())
}

