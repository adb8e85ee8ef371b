//! JSON value kinds as a typed enum.
//!
//! Field values are [`serde_json::Value`]s. [`Kind`] names the six shapes a
//! value can take so type checks and failure messages can talk about them
//! without matching on the value itself.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

/// The shape of a field value.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Array,
    Bool,
    Null, // also the sentinel for an absent field
    Number,
    Object,
    String,
}

impl Kind {
    /// Returns the kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_)  => Self::Array,
            Value::Bool(_)   => Self::Bool,
            Value::Null      => Self::Null,
            Value::Number(_) => Self::Number,
            Value::Object(_) => Self::Object,
            Value::String(_) => Self::String,
        }
    }

    /// Returns the lowercase name (e.g. `"string"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Array  => "array",
            Self::Bool   => "bool",
            Self::Null   => "null",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
        }
    }
}

/// Parses a lowercase kind name. `"boolean"` is accepted as an alias.
impl FromStr for Kind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array"            => Ok(Self::Array),
            "bool" | "boolean" => Ok(Self::Bool),
            "null"             => Ok(Self::Null),
            "number"           => Ok(Self::Number),
            "object"           => Ok(Self::Object),
            "string"           => Ok(Self::String),
            _                  => Err(()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
