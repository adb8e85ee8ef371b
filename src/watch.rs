//! The intercepted view over a record.
//!
//! # Lifecycle
//!
//! [`watch`] validates the configuration, runs every configured chain once
//! over the record's current values, and returns a [`Watched`] view. From then
//! on the view is *active*: writes to configured fields go through their
//! chain, everything else passes straight through.
//!
//! The view holds `&mut Record`, so nothing else can write to the record while
//! it is watched. Drop the view (or call [`Watched::into_record`]) to get the
//! record back.
//!
//! # Atomicity
//!
//! A single write is all-or-nothing: the chain's result is only stored once
//! every step has succeeded. The initial pass in [`watch`] is not: fields
//! processed before a failing one keep their new values.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::Configuration;
use crate::error::Error;
use crate::record::Record;

/// Wraps `record` so that writes to the fields in `config` run through their
/// chains.
///
/// Before returning, each configured field is processed in registration
/// order: optional chains are skipped for absent fields, every other chain
/// runs once, seeded with the current value (or [`Value::Null`] if the field
/// is absent), and the result is written back.
///
/// # Errors
///
/// - [`Error::Configuration`] if a chain is empty or a field is registered
///   twice. The record is untouched.
/// - [`Error::Validation`] if a middleware rejects a current value. Earlier
///   fields keep their processed values; the failing field is unchanged.
///
/// # Example
///
/// ```rust
/// use fieldgate::{Chain, Configuration, Record, validators, watch};
///
/// let mut record = Record::new().with("name", "  Needs a name ");
/// let config = Configuration::new()
///     .field("name", Chain::new().then(validators::is_string()).then(validators::trim()));
///
/// let view = watch(&mut record, config).unwrap();
/// assert_eq!(view.get("name").unwrap(), "Needs a name");
/// ```
pub fn watch(record: &mut Record, config: impl Into<Arc<Configuration>>) -> Result<Watched<'_>, Error> {
    let config = config.into();
    config.validate()?;

    debug!(fields = config.len(), "building watched record");

    for (field, chain) in config.iter() {
        let current = record.get(field).cloned();
        if current.is_none() && chain.is_optional() {
            trace!(field, "absent optional field, skipping");
            continue;
        }

        let value = chain.run(current.unwrap_or(Value::Null), field, &*record)?;
        record.insert(field, value);
    }

    Ok(Watched { record, config })
}

/// A record whose configured fields are guarded by middleware.
///
/// Reads are transparent. Writes to configured fields go through
/// [`Chain::run`](crate::Chain::run); other writes are stored as given.
pub struct Watched<'r> {
    record: &'r mut Record,
    config: Arc<Configuration>,
}

impl<'r> Watched<'r> {
    /// Writes `value` to `field`.
    ///
    /// For a configured field the chain is folded starting from `value` (not
    /// the stored value); each step sees the record as it was before this
    /// write. On failure nothing is stored.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> Result<(), Error> {
        let value = value.into();
        let value = match self.config.chain(field) {
            Some(chain) => {
                trace!(field, steps = chain.len(), "intercepting write");
                chain.run(value, field, &*self.record).inspect_err(|failure| {
                    debug!(field, expected = %failure.expected, actual = %failure.actual, "write rejected");
                })?
            }
            None => value,
        };
        self.record.insert(field, value);
        Ok(())
    }

    /// Applies [`set`](Self::set) to each entry in order, stopping at the
    /// first failure. Entries before the failing one stay written.
    pub fn set_all<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> Result<(), Error>
    where
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (field, value) in entries {
            self.set(field.as_ref(), value)?;
        }
        Ok(())
    }

    /// Deletes `field` without running any middleware.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.record.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&Value> { self.record.get(field) }
    pub fn contains(&self, field: &str) -> bool { self.record.contains(field) }
    pub fn len(&self) -> usize { self.record.len() }
    pub fn is_empty(&self) -> bool { self.record.is_empty() }
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.record.keys() }
    pub fn record(&self) -> &Record { &*self.record }
    pub fn config(&self) -> &Configuration { &self.config }

    /// Ends the watch and hands the record borrow back.
    pub fn into_record(self) -> &'r mut Record {
        self.record
    }
}

impl std::fmt::Debug for Watched<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watched")
            .field("record", &self.record)
            .field("config", &self.config)
            .finish()
    }
}
