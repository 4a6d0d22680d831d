//! Validation error types.
//!
//! Raised for malformed caller input before any external call is made.

/// Specific validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Locality code is not exactly seven ASCII digits
    #[display("Locality code must be exactly 7 digits, got '{}'", _0)]
    LocalityCode(String),
    /// Step index does not address the open step
    #[display("Step {} is not the open step (expected {})", actual, expected)]
    StepIndex {
        /// Index of the open step
        expected: usize,
        /// Index supplied by the caller
        actual: usize,
    },
    /// Selected text is not one of the offered choices
    #[display("'{}' is not one of the offered choices", _0)]
    UnknownChoice(String),
    /// Required input was empty
    #[display("{} must not be empty", _0)]
    EmptyInput(String),
    /// Operation is not allowed in the current wizard phase
    #[display("Cannot {} while {}", operation, phase)]
    InvalidTransition {
        /// Operation the caller attempted
        operation: String,
        /// Phase the wizard was in
        phase: String,
    },
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use concierge_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::LocalityCode("12-3456".into()));
/// assert!(format!("{}", err).contains("7 digits"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The specific error condition
    pub kind: ValidationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
