//! Ordered middleware chains.

use serde_json::Value;
use tracing::trace;

use crate::error::ValidationFailure;
use crate::middleware::{BoxedMiddleware, Middleware};
use crate::record::Record;

/// The middleware bound to one field, applied as a strict left fold.
///
/// Each step receives the previous step's output. A step that returns a
/// [`ValidationFailure`] aborts the fold; there is no other way to stop it.
///
/// ```rust
/// use fieldgate::{Chain, validators};
///
/// let name = Chain::new()
///     .then(validators::is_string())
///     .then(validators::shorter_than(26))
///     .then(validators::longer_than(2));
/// ```
#[derive(Clone, Default)]
pub struct Chain {
    steps: Vec<BoxedMiddleware>,
    optional: bool,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a middleware. Returns `self` for chaining.
    pub fn then(mut self, middleware: impl Middleware) -> Self {
        self.steps.push(middleware.into_boxed_middleware());
        self
    }

    /// Skips the whole chain during [`watch`](crate::watch) when the field is
    /// absent from the record. Later writes run the chain as usual.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn is_optional(&self) -> bool { self.optional }
    pub fn len(&self) -> usize { self.steps.len() }
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// Folds `value` through every step in registration order.
    pub fn run(&self, value: Value, field: &str, record: &Record) -> Result<Value, ValidationFailure> {
        self.steps.iter().enumerate().try_fold(value, |value, (step, middleware)| {
            trace!(field, step, "applying middleware");
            middleware.call(value, field, record)
        })
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("steps", &self.steps.len())
            .field("optional", &self.optional)
            .finish()
    }
}
