//! Structured data extraction from model responses.
//!
//! Model output is not guaranteed to be clean JSON. Two candidates are
//! tried, in order: the body of the first closed ```` ```json ```` fence,
//! then the whole trimmed response. No other recovery is attempted.

use concierge_core::Choice;
use concierge_error::{ExtractionError, ExtractionErrorKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of choices a generated step must offer.
pub const CHOICES_PER_STEP: usize = 4;

/// A JSON shape that can be checked after deserialization.
pub trait ExpectedShape: DeserializeOwned {
    /// Check constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason on mismatch.
    fn validate(&self) -> Result<(), String>;
}

/// Parse JSON out of raw model text.
///
/// # Errors
///
/// Returns [`ExtractionErrorKind::MalformedOutput`] if the candidate text is
/// not valid JSON. The raw text is attached to the error.
///
/// # Examples
///
/// ```
/// use concierge_wizard::extract_json;
///
/// let value = extract_json("Sure!\n```json\n[1, 2]\n```").unwrap();
/// assert_eq!(value, serde_json::json!([1, 2]));
/// ```
pub fn extract_json(raw: &str) -> Result<Value, ExtractionError> {
    let candidate = fenced_block(raw, "json").unwrap_or_else(|| raw.trim());

    serde_json::from_str(candidate).map_err(|e| {
        let preview: String = raw.chars().take(200).collect();
        tracing::error!(
            error = %e,
            response_length = raw.len(),
            preview = %preview,
            "Model output is not valid JSON"
        );
        ExtractionError::new(ExtractionErrorKind::MalformedOutput(e.to_string()), raw)
    })
}

/// Parse JSON out of raw model text and check it against `T`.
///
/// # Errors
///
/// Returns `MalformedOutput` as [`extract_json`] does, or
/// [`ExtractionErrorKind::UnexpectedShape`] when the JSON does not match `T`.
pub fn extract<T: ExpectedShape>(raw: &str) -> Result<T, ExtractionError> {
    let value = extract_json(raw)?;

    let shape: T = serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "Model output has unexpected shape");
        ExtractionError::new(ExtractionErrorKind::UnexpectedShape(e.to_string()), raw)
    })?;

    shape.validate().map_err(|reason| {
        tracing::warn!(reason = %reason, "Model output failed shape validation");
        ExtractionError::new(ExtractionErrorKind::UnexpectedShape(reason), raw)
    })?;

    Ok(shape)
}

/// Body of the first ```` ```language ```` fence, if it is closed.
fn fenced_block<'a>(response: &'a str, language: &str) -> Option<&'a str> {
    let pattern = format!("```{}", language);
    let start = response.find(&pattern)? + pattern.len();
    let end = response[start..].find("```")?;
    Some(response[start..start + end].trim())
}

/// Exactly four choices, each with non-empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceSet(Vec<Choice>);

impl ChoiceSet {
    /// Choices in the order the model produced them.
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }

    /// Take ownership of the choices.
    pub fn into_choices(self) -> Vec<Choice> {
        self.0
    }
}

impl ExpectedShape for ChoiceSet {
    fn validate(&self) -> Result<(), String> {
        if self.0.len() != CHOICES_PER_STEP {
            return Err(format!(
                "expected {} choices, got {}",
                CHOICES_PER_STEP,
                self.0.len()
            ));
        }
        if let Some(pos) = self.0.iter().position(|c| c.text().trim().is_empty()) {
            return Err(format!("choice {} has empty text", pos + 1));
        }
        Ok(())
    }
}

/// A follow-up question with its choices and a stop signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedStep {
    /// Question to show above the choices
    pub next_question: String,
    /// Whether the next step should be the last before the locality prompt
    pub needs_postal_code: bool,
    /// Choices for the next step
    pub choices: ChoiceSet,
}

impl ExpectedShape for GuidedStep {
    fn validate(&self) -> Result<(), String> {
        if self.next_question.trim().is_empty() {
            return Err("nextQuestion is empty".to_string());
        }
        self.choices.validate()
    }
}
