//! A single selectable option offered at a narrowing step.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One option offered to the user.
///
/// `icon` is a display glyph and carries no meaning for the wizard.
///
/// # Examples
///
/// ```
/// use concierge_core::Choice;
///
/// let choice = Choice::new("地元のお店を予約・注文したい", "🏪");
/// assert_eq!(choice.text(), "地元のお店を予約・注文したい");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct Choice {
    /// Label shown to the user and recorded as the selection.
    text: String,

    /// Display glyph.
    #[builder(default)]
    #[serde(default)]
    icon: String,
}

impl Choice {
    /// Create a choice from its label and glyph.
    pub fn new(text: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: icon.into(),
        }
    }
}
