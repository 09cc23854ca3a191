//! Loosely-shaped input values
//!
//! Validators in this crate operate over data that arrives with no static
//! shape: form fields, query parameters, decoded JSON. Instead of probing
//! runtime types, the input is modeled as an explicit tagged sum so every
//! predicate pattern-matches exhaustively.
//!
//! # Examples
//!
//! ```
//! use shallows::Value;
//!
//! let name = Value::from("Alice");
//! let age = Value::from(30);
//! let missing = Value::Absent;
//!
//! assert!(name.is_str());
//! assert!(age.is_number());
//! assert_eq!(missing.to_string(), "undefined");
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// A candidate value to be validated.
///
/// `Absent` and `Null` are distinct variants: `Absent` models a value that
/// was never supplied at all, `Null` one that was supplied as an explicit
/// null. Both count as "missing" for [`required`](crate::required), but
/// predicates can tell them apart.
///
/// # Examples
///
/// ```
/// use shallows::Value;
///
/// let v = Value::from(vec![Value::from(1), Value::from(2)]);
/// assert_eq!(v.to_string(), "1,2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value was supplied.
    Absent,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integral and fractional numbers share one representation.
    Number(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    Seq(Vec<Value>),
    /// A keyed mapping with stable iteration order.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Check if this value is a string.
    #[inline]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if this value is a number.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Check if this value is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// The string content, if this value is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use shallows::Value;
    ///
    /// assert_eq!(Value::from("hi").as_str(), Some("hi"));
    /// assert_eq!(Value::Null.as_str(), None);
    /// ```
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent value",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
        }
    }
}

/// Renders the loose string form used in default error messages.
///
/// Numbers print without a trailing `.0` when integral, so a failed
/// string check on `2` reads `2 is not of type string` rather than
/// `2.0 is not of type string`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                // 2^53 bounds the integers exactly representable in f64
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Value::Seq(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    #[inline]
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Value::Map(entries)
    }
}

#[cfg(feature = "serde")]
mod serde_interop {
    use super::Value;

    /// JSON null maps to `Value::Null`; `Value::Absent` has no JSON form
    /// and only appears when a field is missing entirely.
    impl From<serde_json::Value> for Value {
        fn from(json: serde_json::Value) -> Self {
            match json {
                serde_json::Value::Null => Value::Null,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
                serde_json::Value::String(s) => Value::Str(s),
                serde_json::Value::Array(items) => {
                    Value::Seq(items.into_iter().map(Value::from).collect())
                }
                serde_json::Value::Object(entries) => Value::Map(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k, Value::from(v)))
                        .collect(),
                ),
            }
        }
    }

    impl From<Value> for serde_json::Value {
        fn from(value: Value) -> Self {
            match value {
                Value::Absent | Value::Null => serde_json::Value::Null,
                Value::Bool(b) => serde_json::Value::Bool(b),
                Value::Number(n) => serde_json::Number::from_f64(n)
                    .map(serde_json::Value::Number)
                    .unwrap_or(serde_json::Value::Null),
                Value::Str(s) => serde_json::Value::String(s),
                Value::Seq(items) => {
                    serde_json::Value::Array(items.into_iter().map(Into::into).collect())
                }
                Value::Map(entries) => serde_json::Value::Object(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k, serde_json::Value::from(v)))
                        .collect(),
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Absent.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from("hello").to_string(), "hello");
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::from(2).to_string(), "2");
        assert_eq!(Value::from(-1).to_string(), "-1");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(0).to_string(), "0");
    }

    #[test]
    fn test_display_seq() {
        let seq = Value::from(vec![Value::from(1), Value::from("a")]);
        assert_eq!(seq.to_string(), "1,a");
        assert_eq!(Value::Seq(vec![]).to_string(), "");
    }

    #[test]
    fn test_display_map() {
        let mut entries = BTreeMap::new();
        entries.insert("a".to_string(), Value::from(1));
        entries.insert("b".to_string(), Value::from("x"));
        assert_eq!(Value::Map(entries).to_string(), "{a: 1, b: x}");
    }

    #[test]
    fn test_variant_checks() {
        assert!(Value::from("s").is_str());
        assert!(Value::from(1).is_number());
        assert!(Value::from(false).is_bool());
        assert!(!Value::Null.is_str());
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::from("a"), Value::from("a"));
        assert_ne!(Value::from("a"), Value::from("b"));
        assert_ne!(Value::from(1), Value::from("1"));
        assert_ne!(Value::Null, Value::Absent);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let json: serde_json::Value = serde_json::json!({
            "name": "Alice",
            "age": 30,
            "tags": ["a", "b"],
            "extra": null
        });
        let value = Value::from(json.clone());
        assert_eq!(serde_json::Value::from(value), json);
    }
}
