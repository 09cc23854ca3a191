//! Strict boolean normalization
//!
//! [`normalize_boolean`] coerces loosely-typed truthy/falsy
//! representations into a strict boolean. Unlike the validators, which
//! report rule violations as values, the normalizer has a contract
//! boundary: textual input other than exactly `"true"` or `"false"` is
//! ambiguous, and rather than guessing, normalization fails with an
//! error. Hosts are expected to validate before normalizing, not to use
//! normalization as validation.

use thiserror::Error;

use crate::check::is_empty;
use crate::value::Value;

/// Input the normalization contract does not support.
///
/// These are programmer/contract errors, distinct from the
/// expected-invalid channel the validators use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// A string that is neither `"true"`, `"false"`, nor empty.
    #[error("cannot normalize ambiguous string '{0}' to a boolean")]
    AmbiguousString(String),
    /// A non-empty sequence or mapping.
    #[error("cannot normalize a non-empty {0} to a boolean")]
    UnsupportedValue(&'static str),
}

/// Coerce a loosely-typed value into a strict boolean.
///
/// Rules:
/// - booleans pass through unchanged
/// - numbers are `true` iff exactly `1` (zero, negatives, and everything
///   above `1` are `false`)
/// - the strings `"true"` and `"false"` parse to their boolean; the
///   empty string is `false`
/// - null, absent, and empty sequences/mappings are `false`
/// - any other string, and any non-empty sequence or mapping, is an
///   error rather than a guess
///
/// # Examples
///
/// ```
/// use shallows::{normalize_boolean, Value};
///
/// assert_eq!(normalize_boolean(&Value::from(1)), Ok(true));
/// assert_eq!(normalize_boolean(&Value::from(0)), Ok(false));
/// assert_eq!(normalize_boolean(&Value::from("true")), Ok(true));
/// assert_eq!(normalize_boolean(&Value::Null), Ok(false));
/// assert!(normalize_boolean(&Value::from("falsea")).is_err());
/// ```
pub fn normalize_boolean(val: &Value) -> Result<bool, NormalizeError> {
    let normalized = match val {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => Ok(*n == 1.0),
        Value::Str(s) => match s.as_str() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(NormalizeError::AmbiguousString(other.to_owned())),
        },
        Value::Null | Value::Absent => Ok(false),
        Value::Seq(_) | Value::Map(_) => {
            if is_empty(val) {
                Ok(false)
            } else {
                Err(NormalizeError::UnsupportedValue(val.variant_name()))
            }
        }
    };

    #[cfg(feature = "tracing")]
    if normalized.is_err() {
        tracing::trace!(input = %val, "boolean normalization rejected input");
    }

    normalized
}
