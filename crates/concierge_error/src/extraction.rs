//! Structured-output extraction error types.

/// Why model output could not be turned into the expected structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractionErrorKind {
    /// The candidate text is not valid JSON
    #[display("Malformed output: {}", _0)]
    MalformedOutput(String),
    /// Valid JSON that does not match the expected shape
    #[display("Unexpected shape: {}", _0)]
    UnexpectedShape(String),
}

/// Extraction error carrying the raw model text for diagnostics.
///
/// # Examples
///
/// ```
/// use concierge_error::{ExtractionError, ExtractionErrorKind};
///
/// let err = ExtractionError::new(
///     ExtractionErrorKind::UnexpectedShape("expected 4 choices".into()),
///     "[1,2]",
/// );
/// assert_eq!(err.raw, "[1,2]");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error condition
    pub kind: ExtractionErrorKind,
    /// Raw model output the extraction was attempted on
    pub raw: String,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ExtractionError {
    /// Create a new ExtractionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind, raw: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            raw: raw.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
