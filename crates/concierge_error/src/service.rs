//! Generative text service error types.

/// Failure conditions for a completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServiceErrorKind {
    /// The service could not be reached
    #[display("Service unreachable: {}", _0)]
    Unreachable(String),
    /// The service answered with a non-success status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
    /// The service answered without any text
    #[display("Service returned no text")]
    EmptyResponse,
    /// The response body could not be decoded
    #[display("Failed to decode response: {}", _0)]
    Decode(String),
}

/// Generative text service error with source location.
///
/// # Examples
///
/// ```
/// use concierge_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no text"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The error kind
    pub kind: ServiceErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new ServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
