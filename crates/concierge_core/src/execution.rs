//! Output of the (simulated) execution step.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Narrative produced for one finalize-and-execute cycle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Human-readable plan text.
    narrative: String,
}

impl ExecutionResult {
    /// Wrap a narrative.
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
        }
    }
}
