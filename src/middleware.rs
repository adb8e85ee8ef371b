//! Middleware trait and type erasure.
//!
//! # How middleware is stored
//!
//! A [`Configuration`](crate::Configuration) holds chains of middleware of
//! *different* concrete types, one chain per field. Collections hold one type,
//! so each middleware is hidden behind a trait object (`dyn ErasedMiddleware`)
//! and stored uniformly.
//!
//! ```text
//! |value, field, record| { … }                  ← user writes this
//!        ↓ Chain::new().then(check)
//! check.into_boxed_middleware()                 ← Middleware blanket impl
//!        ↓
//! Arc::new(FnMiddleware(check))                 ← heap-allocated wrapper
//!        ↓  stored as BoxedMiddleware = Arc<dyn ErasedMiddleware>
//! middleware.call(value, field, record)         ← one vtable dispatch per step
//! ```
//!
//! A middleware returns either a plain [`Value`] (a pure transformer) or a
//! `Result<Value, ValidationFailure>` (a validator). [`IntoOutcome`] folds both
//! into the same shape.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationFailure;
use crate::record::Record;

/// What one middleware step produces.
pub type Outcome = Result<Value, ValidationFailure>;

// ── Internal types ────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Middleware` trait's `into_boxed_middleware`.
#[doc(hidden)]
pub trait ErasedMiddleware {
    fn call(&self, value: Value, field: &str, record: &Record) -> Outcome;
}

/// A type-erased middleware, shareable between chains and threads.
#[doc(hidden)]
pub type BoxedMiddleware = Arc<dyn ErasedMiddleware + Send + Sync + 'static>;

// ── Outcome conversion ────────────────────────────────────────────────────────

/// Conversion of a middleware's return value into an [`Outcome`].
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Value {
    fn into_outcome(self) -> Outcome { Ok(self) }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome { self }
}

// ── Public Middleware trait ───────────────────────────────────────────────────

/// Implemented for every valid middleware.
///
/// Automatically satisfied for any function or closure with the signature:
///
/// ```text
/// Fn(Value, &str, &Record) -> Value
/// Fn(Value, &str, &Record) -> Result<Value, ValidationFailure>
/// ```
///
/// The arguments are the running value of the fold, the field being written
/// and the record as it was before the write. The trait is sealed: only the
/// blanket impl below can satisfy it.
pub trait Middleware: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_middleware(self) -> BoxedMiddleware;
}

mod private {
    pub trait Sealed {}
}

impl<F, R> private::Sealed for F
where
    F: Fn(Value, &str, &Record) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
}

impl<F, R> Middleware for F
where
    F: Fn(Value, &str, &Record) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn into_boxed_middleware(self) -> BoxedMiddleware {
        Arc::new(FnMiddleware(self))
    }
}

/// Pins a closure to the middleware signature.
///
/// Closures returned from functions (`-> impl Middleware`) do not get their
/// argument types inferred from a trait bound; passing them through here
/// does.
///
/// ```rust
/// use fieldgate::{Middleware, middleware_fn};
///
/// fn shout() -> impl Middleware {
///     middleware_fn(|value, _field, _record| match value {
///         serde_json::Value::String(s) => serde_json::Value::String(s.to_uppercase()),
///         other                        => other,
///     })
/// }
/// ```
pub fn middleware_fn<F, R>(f: F) -> F
where
    F: Fn(Value, &str, &Record) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    f
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

struct FnMiddleware<F>(F);

impl<F, R> ErasedMiddleware for FnMiddleware<F>
where
    F: Fn(Value, &str, &Record) -> R,
    R: IntoOutcome,
{
    fn call(&self, value: Value, field: &str, record: &Record) -> Outcome {
        (self.0)(value, field, record).into_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transformer_and_validator_share_one_shape() {
        let double = middleware_fn(|value, _, _| json!(value.as_i64().unwrap_or(0) * 2));
        let positive = middleware_fn(|value: Value, field: &str, _: &Record| {
            if value.as_i64().is_some_and(|n| n > 0) {
                Ok(value)
            } else {
                Err(ValidationFailure::new(field, value, "positive number", "other"))
            }
        });

        let record = Record::new();
        let double = double.into_boxed_middleware();
        let positive = positive.into_boxed_middleware();

        assert_eq!(double.call(json!(4), "n", &record), Ok(json!(8)));
        assert_eq!(positive.call(json!(4), "n", &record), Ok(json!(4)));
        assert!(positive.call(json!(-1), "n", &record).is_err());
    }

    #[test]
    fn middleware_sees_field_and_record() {
        let record = Record::new().with("limit", 10);
        let capped = middleware_fn(|value, field, record| {
            assert_eq!(field, "count");
            let limit = record.get("limit").and_then(Value::as_i64).unwrap_or(i64::MAX);
            json!(value.as_i64().unwrap_or(0).min(limit))
        })
        .into_boxed_middleware();

        assert_eq!(capped.call(json!(25), "count", &record), Ok(json!(10)));
    }
}
