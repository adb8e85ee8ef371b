//! Built-in middleware.
//!
//! Two families: **validators** return the value unchanged or fail with a
//! [`ValidationFailure`]; **transformers** rewrite the value and never fail.
//! Mix them freely in one [`Chain`](crate::Chain):
//!
//! ```rust
//! use fieldgate::{Chain, validators};
//!
//! let handle = Chain::new()
//!     .then(validators::is_string())   // validator
//!     .then(validators::trim())        // transformer
//!     .then(validators::longer_than(2))
//!     .then(validators::shorter_than(26));
//! ```
//!
//! | Middleware | Accepts | On mismatch |
//! |---|---|---|
//! | [`is_kind`] / [`is_string`] / [`is_number`] / [`is_bool`] | values of that kind | fails |
//! | [`shorter_than`] / [`longer_than`] | strings (chars) and arrays (items) | fails |
//! | [`matches`] | strings matching a regex | fails |
//! | [`trim`] | anything | passes non-strings through |
//! | [`default_to`] | anything | replaces `null` |

use regex::Regex;
use serde_json::Value;

use crate::error::{ConfigError, Error, ValidationFailure};
use crate::kind::Kind;
use crate::middleware::{Middleware, middleware_fn};

/// Fails unless the value is of `kind`.
pub fn is_kind(kind: Kind) -> impl Middleware {
    middleware_fn(move |value: Value, field: &str, _| {
        let actual = Kind::of(&value);
        if actual == kind {
            Ok(value)
        } else {
            Err(ValidationFailure::new(field, value, kind.as_str(), actual.as_str()))
        }
    })
}

pub fn is_string() -> impl Middleware { is_kind(Kind::String) }
pub fn is_number() -> impl Middleware { is_kind(Kind::Number) }
pub fn is_bool() -> impl Middleware { is_kind(Kind::Bool) }

/// Fails unless the value's length is strictly below `max`.
pub fn shorter_than(max: usize) -> impl Middleware {
    middleware_fn(move |value: Value, field: &str, _| {
        check_length(value, field, &format!("length below {max}"), |len| len < max)
    })
}

/// Fails unless the value's length is strictly above `min`.
pub fn longer_than(min: usize) -> impl Middleware {
    middleware_fn(move |value: Value, field: &str, _| {
        check_length(value, field, &format!("length above {min}"), |len| len > min)
    })
}

/// Fails unless the value is a string matching `pattern`.
///
/// # Errors
///
/// [`ConfigError::InvalidPattern`] if `pattern` is not a valid regex.
pub fn matches(pattern: &str) -> Result<impl Middleware, Error> {
    let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;

    Ok(middleware_fn(move |value: Value, field: &str, _| {
        let expected = format!("string matching /{}/", regex.as_str());
        match value.as_str() {
            Some(s) if regex.is_match(s) => Ok(value),
            Some(_) => Err(ValidationFailure::new(field, value, expected, "non-matching string")),
            None => {
                let actual = Kind::of(&value).as_str();
                Err(ValidationFailure::new(field, value, expected, actual))
            }
        }
    }))
}

/// Strips surrounding whitespace from strings.
pub fn trim() -> impl Middleware {
    middleware_fn(|value, _, _| match value {
        Value::String(s) => Value::String(s.trim().to_owned()),
        other            => other,
    })
}

/// Replaces `null` (including the absent-field seed) with `default`.
pub fn default_to(default: impl Into<Value>) -> impl Middleware {
    let default = default.into();
    middleware_fn(move |value, _, _| match value {
        Value::Null => default.clone(),
        other       => other,
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn check_length(
    value: Value,
    field: &str,
    expected: &str,
    accept: impl Fn(usize) -> bool,
) -> Result<Value, ValidationFailure> {
    let len = match &value {
        Value::String(s) => s.chars().count(),
        Value::Array(a)  => a.len(),
        other => {
            let actual = Kind::of(other).as_str();
            return Err(ValidationFailure::new(field, value.clone(), expected, actual));
        }
    };

    if accept(len) {
        Ok(value)
    } else {
        Err(ValidationFailure::new(field, value, expected, format!("length {len}")))
    }
}
