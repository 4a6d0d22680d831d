//! One round of the narrowing dialogue.

use crate::Choice;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A question, the choices offered for it, and the user's selection.
///
/// A step is *open* while nothing is selected and *closed* afterwards.
///
/// # Examples
///
/// ```
/// use concierge_core::{Choice, Step};
///
/// let mut step = Step::new("何をしたいですか？", vec![Choice::new("学びたい", "📚")]);
/// assert!(step.is_open());
///
/// step.select("学びたい");
/// assert_eq!(step.selected().as_deref(), Some("学びたい"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Step {
    /// Question shown above the choices.
    question: String,
    /// Choices in display order.
    choices: Vec<Choice>,
    /// Text of the chosen option, if any.
    #[serde(default)]
    selected: Option<String>,
}

impl Step {
    /// Create an open step.
    pub fn new(question: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            question: question.into(),
            choices,
            selected: None,
        }
    }

    /// Whether the step still awaits a selection.
    pub fn is_open(&self) -> bool {
        self.selected.is_none()
    }

    /// Whether `text` matches one of the offered choices.
    pub fn offers(&self, text: &str) -> bool {
        self.choices.iter().any(|c| c.text() == text)
    }

    /// Record a selection, closing the step.
    pub fn select(&mut self, text: impl Into<String>) {
        self.selected = Some(text.into());
    }

    /// Clear the selection, reopening the step.
    pub fn retract(&mut self) -> Option<String> {
        self.selected.take()
    }
}
