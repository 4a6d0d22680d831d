//! Error types for the Concierge workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error converts into [`ConciergeError`], so `?` works across crates.
//!
//! # Examples
//!
//! ```
//! use concierge_error::{ConciergeResult, ServiceError, ServiceErrorKind};
//!
//! fn complete() -> ConciergeResult<String> {
//!     Err(ServiceError::new(ServiceErrorKind::EmptyResponse))?
//! }
//!
//! assert!(complete().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod extraction;
mod http;
mod json;
mod service;
mod store;
mod template;
mod validation;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use error::{ConciergeError, ConciergeErrorKind, ConciergeResult};
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use http::HttpError;
pub use json::JsonError;
pub use service::{ServiceError, ServiceErrorKind};
pub use store::{StoreError, StoreErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};
