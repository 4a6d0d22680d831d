//! Prompt template error types.

/// Template lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// No template row exists for the function id
    #[display("No prompt template registered for '{}'", _0)]
    Missing(String),
    /// Template lacks a placeholder the caller needs
    #[display("Template '{}' has no {{{}}} placeholder", function_id, placeholder)]
    MissingPlaceholder {
        /// Template function id
        function_id: String,
        /// Placeholder name without braces
        placeholder: String,
    },
}

/// Prompt template error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
