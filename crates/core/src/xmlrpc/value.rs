//! Untyped XML-RPC value model

use std::collections::BTreeMap;

/// An XML-RPC value.
///
/// This is the full set of types the admin API uses on the wire. Integers
/// are widened to `i64` on decode (`<i4>`, `<int>` and `<i8>` all map here);
/// on encode, values that fit a 32-bit integer are written as `<int>` and
/// anything wider as `<i8>`. Date and binary scalars do not occur in the
/// admin API and are decoded as plain strings.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The null value, `<nil/>`; stands in for every omitted optional
    /// parameter so calls keep their fixed arity
    Nil,
    /// `<boolean>`
    Bool(bool),
    /// `<int>`, `<i4>` or `<i8>`
    Int(i64),
    /// `<double>`
    Double(f64),
    /// `<string>`, or untyped `<value>` text
    String(String),
    /// `<array>`
    Array(Vec<Value>),
    /// `<struct>`
    Struct(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true for the `<nil/>` value.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// The boolean payload, if this value is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this value is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The floating-point payload; integers widen for convenience since the
    /// server is loose about which numeric type a balance comes back as.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The string payload, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members, if this value is a struct.
    pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Struct(members) => Some(members),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Nil,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for Value {
    fn from(items: &[&str]) -> Self {
        Value::Array(items.iter().map(|s| Value::from(*s)).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(members: BTreeMap<String, Value>) -> Self {
        Value::Struct(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<&str>), Value::Nil);
        assert_eq!(
            Value::from(Some("note")),
            Value::String("note".to_string())
        );
        assert_eq!(Value::from(Some(7)), Value::Int(7));
    }

    #[test]
    fn test_numeric_accessors() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Double(1.25).as_f64(), Some(1.25));
        assert_eq!(Value::String("3".into()).as_i64(), None);
    }

    #[test]
    fn test_slice_conversion() {
        let v = Value::from(&["a", "b"][..]);
        assert_eq!(
            v,
            Value::Array(vec![Value::from("a"), Value::from("b")])
        );
    }
}
