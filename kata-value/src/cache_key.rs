use std::fmt;

use crate::atomic::{quoted, Atomic};
use crate::value::Value;

// A cache key is the canonical serialization of an argument list. Each
// argument carries a type tag and strings are quoted, so the number 1 and
// the string "1" never share a key. Numbers are normalized so that an
// integral float gets the same key as the equal integer.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(arguments: &[Value]) -> CacheKey {
        let mut key = String::new();
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            encode(&mut key, argument);
        }
        CacheKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn encode(key: &mut String, value: &Value) {
    match value {
        Value::Atomic(atomic) => encode_atomic(key, atomic),
        Value::Array(array) => {
            key.push('[');
            for (i, member) in array.iter().enumerate() {
                if i > 0 {
                    key.push(',');
                }
                encode(key, member);
            }
            key.push(']');
        }
        Value::Map(map) => {
            key.push('{');
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    key.push(',');
                }
                key.push_str(&quoted(k));
                key.push(':');
                encode(key, v);
            }
            key.push('}');
        }
    }
}

fn encode_atomic(key: &mut String, atomic: &Atomic) {
    match atomic {
        Atomic::Null => key.push_str("null"),
        Atomic::Boolean(true) => key.push_str("true"),
        Atomic::Boolean(false) => key.push_str("false"),
        // an integral float displays as the equal integer
        Atomic::Integer(_) | Atomic::Float(_) => {
            key.push_str("n:");
            key.push_str(&atomic.to_string());
        }
        Atomic::String(s) => {
            key.push_str("s:");
            key.push_str(&quoted(s));
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
