use std::fmt;

use crate::{array::Array, atomic::Atomic, error, map::Map};

/// A value in a nested structure.
///
/// Arrays and maps are containers; atomics are always leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar.
    Atomic(Atomic),
    /// An ordered list of values.
    Array(Array),
    /// Key-value pairs.
    Map(Map),
}

impl Value {
    /// Try to get the atomic value.
    pub fn to_atomic(&self) -> error::Result<Atomic> {
        match self {
            Value::Atomic(a) => Ok(a.clone()),
            _ => Err(error::Error::Type),
        }
    }

    /// Try to get the value as an array.
    pub fn to_array(&self) -> error::Result<Array> {
        match self {
            Value::Array(array) => Ok(array.clone()),
            _ => Err(error::Error::Type),
        }
    }

    /// Try to get the value as a map.
    pub fn to_map(&self) -> error::Result<Map> {
        match self {
            Value::Map(map) => Ok(map.clone()),
            _ => Err(error::Error::Type),
        }
    }

    /// Compare two values as leaves.
    ///
    /// Atomics use [`Atomic::strict_equal`]. Arrays and maps are only the
    /// same leaf if they are the same allocation; their members are not
    /// looked at.
    pub fn same_leaf(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Atomic(a), Value::Atomic(b)) => a.strict_equal(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Atomic(a) => write!(f, "{}", a),
            Value::Array(a) => write!(f, "{}", a),
            Value::Map(m) => write!(f, "{}", m),
        }
    }
}

impl From<Atomic> for Value {
    fn from(atomic: Atomic) -> Self {
        Value::Atomic(atomic)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Value {
    fn from(vec: Vec<Value>) -> Self {
        Value::Array(vec.into())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Atomic(b.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Atomic(i.into())
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Atomic(i.into())
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Atomic(f.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Atomic(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Atomic(s.into())
    }
}
