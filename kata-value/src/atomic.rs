use ordered_float::OrderedFloat;
use std::fmt;
use std::rc::Rc;

use crate::error;

/// A scalar value: a leaf in any nested structure.
///
/// Equality through `PartialEq` is structural, so `Integer(1)` and
/// `Float(1.0)` differ. Use [`Atomic::strict_equal`] for the value
/// comparison the exercises are defined in terms of.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atomic {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(OrderedFloat<f64>),
    String(Rc<String>),
}

impl Atomic {
    /// Strict equality between scalars.
    ///
    /// - Numbers compare numerically, so an integer equals a float with
    ///   the same value.
    ///
    /// - `NaN` is never equal to anything, itself included.
    ///
    /// - Strings compare by content, booleans by value, and `Null` equals
    ///   `Null`.
    ///
    /// - Values of different kinds are never equal.
    pub fn strict_equal(&self, other: &Atomic) -> bool {
        match (self, other) {
            (Atomic::Null, Atomic::Null) => true,
            (Atomic::Boolean(a), Atomic::Boolean(b)) => a == b,
            (Atomic::Integer(a), Atomic::Integer(b)) => a == b,
            // OrderedFloat considers NaN equal to itself, so compare the
            // inner floats instead
            (Atomic::Float(a), Atomic::Float(b)) => a.0 == b.0,
            (Atomic::Integer(i), Atomic::Float(f)) | (Atomic::Float(f), Atomic::Integer(i)) => {
                integral(f.0) == Some(*i)
            }
            (Atomic::String(a), Atomic::String(b)) => a == b,
            _ => false,
        }
    }
}

// a float that holds an integer value that fits an i64 is reported as that
// integer, so that 1 and 1.0 can be treated as the same number
pub(crate) fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

pub(crate) fn write_number(f: &mut impl fmt::Write, number: f64) -> fmt::Result {
    if let Some(i) = integral(number) {
        write!(f, "{}", i)
    } else if number.is_nan() {
        write!(f, "NaN")
    } else if number.is_infinite() {
        if number.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        write!(f, "{}", number)
    }
}

pub(crate) fn quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for c in s.chars() {
        match c {
            '"' => result.push_str(r#"\""#),
            '\\' => result.push_str(r"\\"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

impl fmt::Display for Atomic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atomic::Null => write!(f, "null"),
            Atomic::Boolean(b) => write!(f, "{}", b),
            Atomic::Integer(i) => write!(f, "{}", i),
            Atomic::Float(n) => write_number(f, n.0),
            Atomic::String(s) => f.write_str(&quoted(s)),
        }
    }
}

// strings

impl From<String> for Atomic {
    fn from(s: String) -> Self {
        Atomic::String(Rc::new(s))
    }
}

impl From<&str> for Atomic {
    fn from(s: &str) -> Self {
        Atomic::String(Rc::new(s.to_string()))
    }
}

impl From<&String> for Atomic {
    fn from(s: &String) -> Self {
        Atomic::String(Rc::new(s.clone()))
    }
}

impl TryFrom<Atomic> for String {
    type Error = error::Error;

    fn try_from(a: Atomic) -> Result<Self, Self::Error> {
        match a {
            Atomic::String(s) => Ok(s.as_ref().clone()),
            _ => Err(error::Error::Type),
        }
    }
}

// bool

impl From<bool> for Atomic {
    fn from(b: bool) -> Self {
        Atomic::Boolean(b)
    }
}

impl TryFrom<Atomic> for bool {
    type Error = error::Error;

    fn try_from(a: Atomic) -> Result<Self, Self::Error> {
        match a {
            Atomic::Boolean(b) => Ok(b),
            _ => Err(error::Error::Type),
        }
    }
}

// integers

impl From<i64> for Atomic {
    fn from(i: i64) -> Self {
        Atomic::Integer(i)
    }
}

impl From<i32> for Atomic {
    fn from(i: i32) -> Self {
        Atomic::Integer(i.into())
    }
}

impl TryFrom<Atomic> for i64 {
    type Error = error::Error;

    fn try_from(a: Atomic) -> Result<Self, Self::Error> {
        match a {
            Atomic::Integer(i) => Ok(i),
            Atomic::Float(f) => integral(f.0).ok_or(error::Error::Type),
            _ => Err(error::Error::Type),
        }
    }
}

// floats

impl From<f64> for Atomic {
    fn from(f: f64) -> Self {
        Atomic::Float(OrderedFloat(f))
    }
}

impl TryFrom<Atomic> for f64 {
    type Error = error::Error;

    fn try_from(a: Atomic) -> Result<Self, Self::Error> {
        match a {
            Atomic::Float(f) => Ok(f.0),
            Atomic::Integer(i) => Ok(i as f64),
            _ => Err(error::Error::Type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_float() {
        let a: Atomic = 1.into();
        let b: Atomic = 1.0.into();
        assert!(a.strict_equal(&b));
        assert!(b.strict_equal(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let a: Atomic = f64::NAN.into();
        assert!(!a.strict_equal(&a.clone()));
    }

    #[test]
    fn test_integer_and_string() {
        let a: Atomic = 1.into();
        let b: Atomic = "1".into();
        assert!(!a.strict_equal(&b));
    }

    #[test]
    fn test_null() {
        assert!(Atomic::Null.strict_equal(&Atomic::Null));
        assert!(!Atomic::Null.strict_equal(&false.into()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Atomic::from(2.0).to_string(), "2");
        assert_eq!(Atomic::from(1.5).to_string(), "1.5");
        assert_eq!(Atomic::from(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Atomic::Null.to_string(), "null");
    }

    #[test]
    fn test_display_string_with_quote() {
        let atomic: Atomic = r#"foo"bar"#.into();
        assert_eq!(atomic.to_string(), r#""foo\"bar""#);
    }

    #[test]
    fn test_large_integer_and_nearest_float() {
        // 2^53 + 1 has no exact float representation
        let a: Atomic = 9_007_199_254_740_993i64.into();
        let b: Atomic = 9_007_199_254_740_992.0.into();
        assert!(!a.strict_equal(&b));
        assert!(!b.strict_equal(&a));
        let c: Atomic = 9_007_199_254_740_992i64.into();
        assert!(c.strict_equal(&b));
    }

    #[test]
    fn test_from_string_reference() {
        let s = "foo".to_string();
        let atomic: Atomic = (&s).into();
        assert_eq!(atomic, Atomic::from("foo"));
    }

    #[test]
    fn test_try_into_string() {
        let s: String = Atomic::from("foo").try_into().unwrap();
        assert_eq!(s, "foo");
        let result: error::Result<String> = Atomic::from(1).try_into();
        assert_eq!(result, Err(error::Error::Type));
    }

    #[test]
    fn test_try_into_bool() {
        let b: bool = Atomic::from(true).try_into().unwrap();
        assert!(b);
        let result: error::Result<bool> = Atomic::from("true").try_into();
        assert_eq!(result, Err(error::Error::Type));
    }

    #[test]
    fn test_try_into_float() {
        let f: f64 = Atomic::from(1.5).try_into().unwrap();
        assert_eq!(f, 1.5);
        let f: f64 = Atomic::from(2).try_into().unwrap();
        assert_eq!(f, 2.0);
        let result: error::Result<f64> = Atomic::Null.try_into();
        assert_eq!(result, Err(error::Error::Type));
    }

    #[test]
    fn test_try_into_integer() {
        let i: i64 = Atomic::from(3.0).try_into().unwrap();
        assert_eq!(i, 3);
        let result: error::Result<i64> = Atomic::from(3.5).try_into();
        assert_eq!(result, Err(error::Error::Type));
    }
}
