//! Personalized dashboard headlines.

use crate::render;
use crate::request::completion_request;
use concierge_config::GeneratorConfig;
use concierge_core::FunctionId;
use concierge_error::{
    ConciergeResult, ServiceError, ServiceErrorKind, ValidationError, ValidationErrorKind,
};
use concierge_interface::{PromptTemplateStore, TextGenerator};
use tracing::{debug, instrument, warn};

/// Turns a free-text usage preference into a one-line headline.
///
/// # Example
///
/// ```no_run
/// use concierge_config::GeneratorConfig;
/// use concierge_models::GeminiClient;
/// use concierge_wizard::{HeadlineGenerator, InMemoryPromptStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GeneratorConfig::default();
/// let headlines = HeadlineGenerator::new(
///     GeminiClient::from_config(&config)?,
///     InMemoryPromptStore::with_defaults(),
///     config,
/// );
/// let headline = headlines.generate("中小企業のマーケティング効率を上げたい").await?;
/// println!("{}", headline);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HeadlineGenerator<G, S> {
    generator: G,
    store: S,
    config: GeneratorConfig,
}

impl<G, S> HeadlineGenerator<G, S>
where
    G: TextGenerator,
    S: PromptTemplateStore,
{
    /// Create a headline generator.
    pub fn new(generator: G, store: S, config: GeneratorConfig) -> Self {
        Self {
            generator,
            store,
            config,
        }
    }

    /// Generate a headline for `preference`.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if `preference` is blank (no call is made)
    /// - `TemplateError` if the `generate_headline` template is missing
    /// - `ServiceError` if the call fails or returns only whitespace
    #[instrument(skip(self, preference), fields(provider = self.generator.provider_name(), preference_length = preference.len()))]
    pub async fn generate(&self, preference: &str) -> ConciergeResult<String> {
        if preference.trim().is_empty() {
            return Err(
                ValidationError::new(ValidationErrorKind::EmptyInput("preference".into())).into(),
            );
        }

        let template = self
            .store
            .require(FunctionId::GenerateHeadline.as_str())
            .await?;
        let prompt = render(template.template_text(), [("preference", preference)]);
        let request = completion_request(&self.config, prompt)?;

        let response = self.generator.complete(&request).await?;
        let headline = response.text().trim();
        if headline.is_empty() {
            warn!("Generator returned a blank headline");
            return Err(ServiceError::new(ServiceErrorKind::EmptyResponse).into());
        }

        debug!(headline_length = headline.len(), "Generated headline");
        Ok(headline.to_string())
    }
}
