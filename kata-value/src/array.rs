use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// An ordered list of values.
///
/// Cloning an array shares the underlying storage, so two clones are the
/// same array in the sense of [`Array::ptr_eq`]. Equality through
/// `PartialEq` compares members.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array(Rc<Vec<Value>>);

impl Array {
    pub fn new(vec: Vec<Value>) -> Self {
        Self(vec.into())
    }

    pub fn index(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Value> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether both arrays are the same allocation.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    fn from(vec: Vec<Value>) -> Self {
        Self::new(vec)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "]")
    }
}
