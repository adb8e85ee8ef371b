//! Unified error type.

use serde_json::Value;
use thiserror::Error;

/// The error type returned by fieldgate's fallible operations.
///
/// Rejected writes surface as [`Error::Validation`]. Problems with the
/// [`Configuration`](crate::Configuration) itself are caught by
/// [`watch`](crate::watch) before any middleware runs.
#[derive(Debug, Error)]
pub enum Error {
    /// A middleware refused the value being written.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The configuration cannot be used.
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// A record was built from JSON that is not an object.
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(crate::Kind),
}

/// Shorthand result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Raised by a middleware when a value fails a semantic check.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("invalid value for `{field}`: expected {expected}, got {actual}")]
pub struct ValidationFailure {
    /// Field being written.
    pub field: String,
    /// The value the failing middleware received.
    pub value: Value,
    /// What the middleware expected.
    pub expected: String,
    /// What it found instead.
    pub actual: String,
}

impl ValidationFailure {
    pub fn new(
        field: &str,
        value: Value,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            field: field.to_owned(),
            value,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// A configuration that [`watch`](crate::watch) refuses to apply.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("chain for `{0}` has no middleware")]
    EmptyChain(String),

    #[error("field `{0}` is configured more than once")]
    DuplicateField(String),

    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
