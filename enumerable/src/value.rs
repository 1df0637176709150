use std::rc::Rc;

use strum_macros::Display;
use thiserror::Error;

/// A dynamically typed value.
///
/// Values are what the [`dynamic`](crate::dynamic) operations work on: the
/// first argument should be a [`Value::Sequence`], and callbacks take and
/// return values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// A boolean.
    Boolean(bool),
    /// A signed integer.
    Integer(i64),
    /// A string.
    String(Rc<str>),
    /// An ordered sequence of values.
    ///
    /// Sequences may nest.
    Sequence(Rc<[Value]>),
}

/// The kind of a [`Value`], used in type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    Integer,
    String,
    Sequence,
}

/// A value was not of the kind that was asked for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("expected {expected}, found {found}")]
pub struct TypeError {
    pub expected: ValueKind,
    pub found: ValueKind,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Sequence(_) => ValueKind::Sequence,
        }
    }

    /// Try to get the boolean value.
    pub fn to_boolean(&self) -> Result<bool, TypeError> {
        match self {
            Value::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(ValueKind::Boolean)),
        }
    }

    /// Try to get the integer value.
    pub fn to_integer(&self) -> Result<i64, TypeError> {
        match self {
            Value::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(ValueKind::Integer)),
        }
    }

    /// Try to get the string value.
    pub fn to_str(&self) -> Result<&str, TypeError> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch(ValueKind::String)),
        }
    }

    /// Try to get the items of a sequence.
    pub fn to_sequence(&self) -> Result<&Rc<[Value]>, TypeError> {
        match self {
            Value::Sequence(items) => Ok(items),
            _ => Err(self.mismatch(ValueKind::Sequence)),
        }
    }

    fn mismatch(&self, expected: ValueKind) -> TypeError {
        TypeError {
            expected,
            found: self.kind(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items.into())
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
