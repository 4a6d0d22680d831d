//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, ExtractionError, HttpError, JsonError, ServiceError, StoreError,
    TemplateError, ValidationError,
};

/// Every error condition a Concierge operation can surface.
///
/// # Examples
///
/// ```
/// use concierge_error::{ConciergeError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: ConciergeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ConciergeErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Malformed caller input
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Generative text service failure
    #[from(ServiceError)]
    Service(ServiceError),
    /// Model output could not be extracted
    #[from(ExtractionError)]
    Extraction(ExtractionError),
    /// Prompt template lookup failure
    #[from(TemplateError)]
    Template(TemplateError),
    /// Prompt template store failure
    #[from(StoreError)]
    Store(StoreError),
}

/// Concierge error with kind discrimination.
///
/// # Examples
///
/// ```
/// use concierge_error::{ConciergeError, ConciergeResult, ConfigError};
///
/// fn might_fail() -> ConciergeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(err.is_configuration());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Concierge Error: {}", _0)]
pub struct ConciergeError(Box<ConciergeErrorKind>);

impl ConciergeError {
    /// Create a new error from a kind.
    pub fn new(kind: ConciergeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConciergeErrorKind {
        &self.0
    }

    /// True for errors caused by deployment setup rather than the request,
    /// such as a missing prompt template row.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self.kind(),
            ConciergeErrorKind::Config(_) | ConciergeErrorKind::Template(_)
        )
    }

    /// True for failures that may succeed when the same call is repeated.
    pub fn is_transient(&self) -> bool {
        matches!(
            self.kind(),
            ConciergeErrorKind::Http(_)
                | ConciergeErrorKind::Service(_)
                | ConciergeErrorKind::Extraction(_)
                | ConciergeErrorKind::Store(_)
        )
    }
}

// Generic From implementation for any type that converts to ConciergeErrorKind
impl<T> From<T> for ConciergeError
where
    T: Into<ConciergeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Concierge operations.
pub type ConciergeResult<T> = std::result::Result<T, ConciergeError>;
