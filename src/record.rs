//! The record type that a [`Watched`](crate::Watched) view wraps.

use serde_json::{Map, Value};

use crate::error::Error;
use crate::kind::Kind;

/// An open mapping from field name to value.
///
/// Owned by the caller. [`watch`](crate::watch) borrows it mutably; it is never
/// copied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> { self.fields.get(field) }
    pub fn contains(&self, field: &str) -> bool { self.fields.contains_key(field) }
    pub fn len(&self) -> usize { self.fields.len() }
    pub fn is_empty(&self) -> bool { self.fields.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builder-style insert, for setting up a record before it is watched.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, field: &str, value: Value) -> Option<Value> {
        self.fields.insert(field.to_owned(), value)
    }

    pub(crate) fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    /// Consumes the record, returning its fields as a JSON object.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Accepts JSON objects only; anything else is [`Error::NotAnObject`].
impl TryFrom<Value> for Record {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other                 => Err(Error::NotAnObject(Kind::of(&other))),
        }
    }
}
