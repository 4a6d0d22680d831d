//! Prompt templates stored by function id.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Well-known template function ids.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
    derive_more::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FunctionId {
    /// Generates the next four choices from the narrowing history.
    #[display("choice_generator")]
    ChoiceGenerator,
    /// Generates a personalized dashboard headline.
    #[display("generate_headline")]
    GenerateHeadline,
    /// Describes the simulated execution step.
    #[display("executor")]
    Executor,
}

impl FunctionId {
    /// The id as stored in the template table.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

/// A row of the prompt template table.
///
/// `template_text` may contain `{name}` placeholder tokens.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct PromptTemplate {
    /// Unique key.
    function_id: String,
    /// Template body with placeholder tokens.
    template_text: String,
    /// Operator-facing notes.
    #[builder(default)]
    #[serde(default)]
    description: String,
}

impl PromptTemplate {
    /// Create a template row.
    pub fn new(
        function_id: impl Into<String>,
        template_text: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            function_id: function_id.into(),
            template_text: template_text.into(),
            description: description.into(),
        }
    }

    /// Replace the editable fields, keeping the key.
    pub fn edit(&mut self, template_text: impl Into<String>, description: impl Into<String>) {
        self.template_text = template_text.into();
        self.description = description.into();
    }
}
