//! Configuration structures and loading.

use concierge_error::{ConciergeError, ConciergeResult, ConfigError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Settings for the generative text service.
///
/// # Example
///
/// ```toml
/// [generator]
/// model = "gemini-2.5-flash"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    /// Backend name (only "gemini" ships today)
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model identifier passed with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// REST endpoint root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Output token cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            temperature: None,
            max_tokens: None,
        }
    }
}

impl GeneratorConfig {
    /// Read the API key from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn api_key(&self) -> ConciergeResult<String> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ConfigError::new(format!(
                "{} is not set; the {} generator needs an API key",
                self.api_key_env, self.provider
            ))
            .into()),
        }
    }
}

/// Which JSON shape the choice generator is asked to produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    Serialize,
    strum::EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseFormat {
    /// A bare array of four `{text, icon}` objects
    #[default]
    #[display("choices")]
    Choices,
    /// An object with `nextQuestion`, `needsPostalCode` and `choices`
    #[display("guided")]
    Guided,
}

/// Settings for the narrowing wizard.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WizardConfig {
    /// Number of narrowing steps before the locality prompt
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,

    /// Expected shape of generated choices
    #[serde(default)]
    pub response_format: ResponseFormat,

    /// Function id of the choice generation template
    #[serde(default = "default_choice_template")]
    pub choice_template: String,

    /// Question shown above generated choices when the model supplies none
    #[serde(default = "default_follow_up_question")]
    pub follow_up_question: String,
}

fn default_max_steps() -> usize {
    3
}

fn default_choice_template() -> String {
    "choice_generator".to_string()
}

fn default_follow_up_question() -> String {
    "もう少し詳しく教えてください".to_string()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
            response_format: ResponseFormat::default(),
            choice_template: default_choice_template(),
            follow_up_question: default_follow_up_question(),
        }
    }
}

/// Where prompt templates live.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    Serialize,
    strum::EnumString,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StoreBackend {
    /// Process-local map, seeded with defaults
    #[default]
    #[display("memory")]
    Memory,
    /// PostgreSQL `ai_prompts` table
    #[display("postgres")]
    Postgres,
}

/// Settings for the prompt template store.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StoreBackend,

    /// Name of the environment variable holding the database URL
    #[serde(default = "default_database_url_env")]
    pub database_url_env: String,

    /// Insert the bundled templates when their rows are absent
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

fn default_database_url_env() -> String {
    "DATABASE_URL".to_string()
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            database_url_env: default_database_url_env(),
            seed_defaults: default_seed_defaults(),
        }
    }
}

impl StoreConfig {
    /// Read the database URL from the configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset.
    pub fn database_url(&self) -> ConciergeResult<String> {
        std::env::var(&self.database_url_env).map_err(|_| {
            ConfigError::new(format!(
                "{} environment variable not set",
                self.database_url_env
            ))
            .into()
        })
    }
}

/// Top-level Concierge configuration.
///
/// # Example
///
/// ```no_run
/// use concierge_config::ConciergeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ConciergeConfig::load()?;
/// println!("Narrowing steps: {}", config.wizard.max_steps);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct ConciergeConfig {
    /// Generative text service settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Wizard settings
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Template store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl ConciergeConfig {
    /// Load configuration from a specific file path.
    ///
    /// Fields missing from the file take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// validation.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ConciergeResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConciergeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ConciergeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: env > current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse or the merged
    /// result fails validation.
    #[instrument]
    pub fn load() -> ConciergeResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../concierge.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/concierge/concierge.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("concierge").required(false))
            .add_source(
                Environment::with_prefix("CONCIERGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder
            .build()
            .map_err(|e| {
                ConciergeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ConciergeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid field.
    pub fn validate(&self) -> ConciergeResult<()> {
        if self.wizard.max_steps == 0 {
            return Err(ConfigError::new("wizard.max_steps must be at least 1").into());
        }
        if self.wizard.choice_template.trim().is_empty() {
            return Err(ConfigError::new("wizard.choice_template must not be empty").into());
        }
        if self.generator.timeout_secs == 0 {
            return Err(ConfigError::new("generator.timeout_secs must be at least 1").into());
        }
        if let Some(t) = self.generator.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::new(format!(
                    "generator.temperature must be in [0.0, 2.0], got {}",
                    t
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(ConciergeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut config = ConciergeConfig::default();
        config.wizard.max_steps = 0;
        let err = config.validate().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_temperature_range() {
        let mut config = ConciergeConfig::default();
        config.generator.temperature = Some(2.5);
        assert!(config.validate().is_err());
        config.generator.temperature = Some(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = GeneratorConfig {
            api_key_env: "CONCIERGE_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..GeneratorConfig::default()
        };
        let err = config.api_key().unwrap_err();
        assert!(err.is_configuration());
        assert!(format!("{}", err).contains("CONCIERGE_TEST_KEY_THAT_IS_NEVER_SET"));
    }
}
