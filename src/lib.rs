//! # fieldgate
//!
//! Middleware-gated writes for record-like objects.
//!
//! Wrap a [`Record`] with [`watch`] and a [`Configuration`] that maps field
//! names to [`Chain`]s of middleware. Every write to a configured field is
//! folded through its chain, left to right, before it is stored. Reads are
//! never intercepted.
//!
//! ## The contract
//!
//! - A chain applies to every write of its field, including the initial pass
//!   `watch` makes over existing values.
//! - Each middleware receives the previous one's output: writing `v` through
//!   `[f, g, h]` stores `h(g(f(v)))`.
//! - A middleware that fails aborts the write; the field keeps its previous
//!   value. There is no veto without an error.
//! - Fields without a chain are stored as given.
//!
//! ## Quick start
//!
//! ```rust
//! use fieldgate::{Chain, Configuration, Error, Record, validators, watch};
//!
//! let config = Configuration::new().field(
//!     "name",
//!     Chain::new()
//!         .then(validators::is_string())
//!         .then(validators::shorter_than(26))
//!         .then(validators::longer_than(2)),
//! );
//!
//! let mut club = Record::new().with("name", "Needs a name");
//! let mut view = watch(&mut club, config)?;
//!
//! assert!(view.set("name", "Skydiving Scarf Knitters Association").is_err());
//! assert_eq!(view.get("name").unwrap(), "Needs a name");
//!
//! view.set("name", "Skydiving Rocks!")?;
//! assert_eq!(view.get("name").unwrap(), "Skydiving Rocks!");
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Writing middleware
//!
//! Any `Fn(Value, &str, &Record)` returning a [`Value`](serde_json::Value) or
//! a `Result<Value, ValidationFailure>` is a [`Middleware`]:
//!
//! ```rust
//! use fieldgate::{Chain, ValidationFailure};
//! use serde_json::Value;
//!
//! let even = Chain::new().then(|value: Value, field: &str, _: &fieldgate::Record| {
//!     match value.as_i64() {
//!         Some(n) if n % 2 == 0 => Ok(value),
//!         _ => Err(ValidationFailure::new(field, value, "even integer", "something else")),
//!     }
//! });
//! ```

mod chain;
mod config;
mod error;
mod kind;
mod middleware;
mod record;
mod watch;

pub mod validators;

pub use chain::Chain;
pub use config::Configuration;
pub use error::{ConfigError, Error, Result, ValidationFailure};
pub use kind::Kind;
pub use middleware::{IntoOutcome, Middleware, Outcome, middleware_fn};
pub use record::Record;
pub use watch::{Watched, watch};
