use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::atomic::quoted;
use crate::error;
use crate::value::Value;

/// A collection of key-value pairs with string keys.
///
/// Entries keep their insertion order; that is the order in which a map
/// is traversed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(Rc<IndexMap<String, Value>>);

impl Map {
    pub fn new<K>(entries: Vec<(K, Value)>) -> error::Result<Self>
    where
        K: Into<String>,
    {
        let mut map = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(error::Error::DuplicateKey(key));
            }
            map.insert(key, value);
        }
        Ok(Self(Rc::new(map)))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn ptr_eq(&self, other: &Map) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<K> TryFrom<Vec<(K, Value)>> for Map
where
    K: Into<String>,
{
    type Error = error::Error;
    fn try_from(vec: Vec<(K, Value)>) -> error::Result<Self> {
        Self::new(vec)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if is_identifier(key) {
                write!(f, "{}", key)?;
            } else {
                f.write_str(&quoted(key))?;
            }
            write!(f, ": {}", value)?;
        }
        write!(f, "}}")
    }
}

fn is_identifier(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key() {
        let map = Map::new(vec![("a", 1.into()), ("a", 2.into())]);
        assert_eq!(map, Err(error::Error::DuplicateKey("a".to_string())));
    }

    #[test]
    fn test_insertion_order() {
        let map = Map::new(vec![("b", 1.into()), ("a", 2.into()), ("c", 3.into())]).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_get() {
        let map = Map::new(vec![("a", 1.into()), ("b", "x".into())]).unwrap();
        assert_eq!(map.get("b"), Some(&Value::from("x")));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn test_try_from_vec() {
        let map: Map = vec![("a", Value::from(1))].try_into().unwrap();
        assert_eq!(map.get("a"), Some(&Value::from(1)));
        let result: error::Result<Map> =
            vec![("a", Value::from(1)), ("a", Value::from(1))].try_into();
        assert_eq!(result, Err(error::Error::DuplicateKey("a".to_string())));
    }

    #[test]
    fn test_display() {
        let inner = Map::new(vec![("c", 2.into())]).unwrap();
        let map = Map::new(vec![
            ("a", "x".into()),
            ("b", inner.into()),
            ("two words", Value::from(true)),
        ])
        .unwrap();
        insta::assert_snapshot!(map.to_string(), @r#"{a: "x", b: {c: 2}, "two words": true}"#);
    }
}
