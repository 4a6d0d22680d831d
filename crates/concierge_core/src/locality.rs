//! Postal-code locality tokens.

use concierge_error::{ValidationError, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// Number of digits in a locality code.
pub const LOCALITY_CODE_LEN: usize = 7;

/// A validated locality token: exactly seven ASCII digits.
///
/// # Examples
///
/// ```
/// use concierge_core::LocalityCode;
///
/// let code = LocalityCode::parse("1010021").unwrap();
/// assert_eq!(code.leading_digit(), '1');
///
/// assert!(LocalityCode::parse("101-0021").is_err());
/// assert!(LocalityCode::parse("101002").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct LocalityCode(String);

impl LocalityCode {
    /// Validate and wrap a locality code.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless `code` is exactly
    /// [`LOCALITY_CODE_LEN`] ASCII digits.
    #[track_caller]
    pub fn parse(code: &str) -> Result<Self, ValidationError> {
        if code.len() == LOCALITY_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(code.to_string()))
        } else {
            Err(ValidationError::new(ValidationErrorKind::LocalityCode(
                code.to_string(),
            )))
        }
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First digit, used for coarse region lookup.
    pub fn leading_digit(&self) -> char {
        // Always seven ASCII digits.
        self.0.as_bytes()[0] as char
    }
}

impl TryFrom<String> for LocalityCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocalityCode> for String {
    fn from(code: LocalityCode) -> Self {
        code.0
    }
}
