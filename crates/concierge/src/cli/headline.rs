//! Headline command handler.

use super::setup::{load_config, open_generator, open_store};
use concierge::HeadlineGenerator;
use std::path::Path;

/// Generate and print a headline for `preference`.
pub async fn generate_headline(config_path: Option<&Path>, preference: &str) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let generator = open_generator(&config.generator)?;
    let store = open_store(&config.store).await?;

    let headlines = HeadlineGenerator::new(generator, store, config.generator.clone());
    let headline = headlines.generate(preference).await?;
    println!("{}", headline);
    Ok(())
}
