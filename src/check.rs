//! Leaf predicates
//!
//! Pure, total, side-effect-free checks over a [`Value`]. These are the
//! primitives the validator factories and combinators build on, and they
//! are exported directly for hosts that only need a boolean answer.
//!
//! Format checks match fixed anchored patterns and deliberately perform
//! no calendar validation: `"2021-13-99"` satisfies [`is_date`].

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid")
});

static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("date-time pattern is valid")
});

static DATE_UTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("UTC date-time pattern is valid")
});

/// Check if the value was never supplied.
///
/// # Example
///
/// ```
/// use shallows::{is_undef, Value};
///
/// assert!(is_undef(&Value::Absent));
/// assert!(!is_undef(&Value::Null));
/// ```
#[inline]
pub fn is_undef(val: &Value) -> bool {
    matches!(val, Value::Absent)
}

/// Check if the value is an explicit null.
///
/// # Example
///
/// ```
/// use shallows::{is_null, Value};
///
/// assert!(is_null(&Value::Null));
/// assert!(!is_null(&Value::Absent));
/// ```
#[inline]
pub fn is_null(val: &Value) -> bool {
    matches!(val, Value::Null)
}

/// Check if the value is either null or absent.
#[inline]
pub fn is_null_or_undef(val: &Value) -> bool {
    is_null(val) || is_undef(val)
}

/// Check if the value is a string.
#[inline]
pub fn is_string(val: &Value) -> bool {
    matches!(val, Value::Str(_))
}

/// Check if the value is a number.
#[inline]
pub fn is_number(val: &Value) -> bool {
    matches!(val, Value::Number(_))
}

/// Check if the value is a boolean.
#[inline]
pub fn is_bool(val: &Value) -> bool {
    matches!(val, Value::Bool(_))
}

/// Check if the value is a string of the form `YYYY-MM-DD`.
///
/// Pattern-only: digits and dashes in the right places. No calendar
/// validity check is performed.
///
/// # Example
///
/// ```
/// use shallows::{is_date, Value};
///
/// assert!(is_date(&Value::from("2016-12-06")));
/// assert!(is_date(&Value::from("2021-13-99"))); // pattern match only
/// assert!(!is_date(&Value::from("123-11-11")));
/// assert!(!is_date(&Value::from(1)));
/// ```
#[inline]
pub fn is_date(val: &Value) -> bool {
    matches!(val, Value::Str(s) if DATE.is_match(s))
}

/// Check if the value is a string of the form `YYYY-MM-DD hh:mm:ss`.
///
/// # Example
///
/// ```
/// use shallows::{is_date_time, Value};
///
/// assert!(is_date_time(&Value::from("2016-12-06 22:12:00")));
/// assert!(!is_date_time(&Value::from("2016-12-06")));
/// ```
#[inline]
pub fn is_date_time(val: &Value) -> bool {
    matches!(val, Value::Str(s) if DATE_TIME.is_match(s))
}

/// Check if the value is a string of the form `YYYY-MM-DDThh:mm:ssZ`.
///
/// # Example
///
/// ```
/// use shallows::{is_date_utc, Value};
///
/// assert!(is_date_utc(&Value::from("2016-12-06T22:12:00Z")));
/// assert!(!is_date_utc(&Value::from("2016-12-06 22:12:00")));
/// ```
#[inline]
pub fn is_date_utc(val: &Value) -> bool {
    matches!(val, Value::Str(s) if DATE_UTC.is_match(s))
}

/// Check if the value is an empty string, an empty sequence, or an empty
/// mapping.
///
/// Numbers, booleans, null, and absent values are never "empty". Callers
/// that also want to reject those must guard with [`is_null_or_undef`]
/// first, which [`required`](crate::required) does.
///
/// # Example
///
/// ```
/// use shallows::{is_empty, Value};
///
/// assert!(is_empty(&Value::from("")));
/// assert!(is_empty(&Value::Seq(vec![])));
/// assert!(!is_empty(&Value::from(0)));
/// assert!(!is_empty(&Value::Null));
/// ```
#[inline]
pub fn is_empty(val: &Value) -> bool {
    match val {
        Value::Str(s) => s.is_empty(),
        Value::Seq(items) => items.is_empty(),
        Value::Map(entries) => entries.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_absence_checks() {
        assert!(is_undef(&Value::Absent));
        assert!(is_null(&Value::Null));
        assert!(is_null_or_undef(&Value::Null));
        assert!(is_null_or_undef(&Value::Absent));
        assert!(!is_null_or_undef(&Value::from(0)));
        assert!(!is_null_or_undef(&Value::from("")));
    }

    #[test]
    fn test_type_checks() {
        assert!(is_string(&Value::from("")));
        assert!(is_number(&Value::from(-1)));
        assert!(is_bool(&Value::from(false)));
        assert!(!is_string(&Value::from(1)));
        assert!(!is_number(&Value::from("1")));
        assert!(!is_bool(&Value::from(1)));
    }

    #[test]
    fn test_is_date() {
        assert!(is_date(&Value::from("2016-12-06")));
        assert!(is_date(&Value::from("1990-05-31")));
        // pattern only, no calendar check
        assert!(is_date(&Value::from("2021-13-99")));
        assert!(!is_date(&Value::from("123-11-11")));
        assert!(!is_date(&Value::from("asdd-as-as")));
        assert!(!is_date(&Value::from("2016-12-06 ")));
        assert!(!is_date(&Value::from(20161206)));
        assert!(!is_date(&Value::Null));
    }

    #[test]
    fn test_is_date_time() {
        assert!(is_date_time(&Value::from("2016-12-06 22:12:00")));
        assert!(is_date_time(&Value::from("1990-05-31 10:09:10")));
        assert!(!is_date_time(&Value::from("2016-12-06T22:12:00Z")));
        assert!(!is_date_time(&Value::from("2016-12-06")));
    }

    #[test]
    fn test_is_date_utc() {
        assert!(is_date_utc(&Value::from("2016-12-06T22:12:00Z")));
        assert!(is_date_utc(&Value::from("1990-05-31T10:09:10Z")));
        assert!(!is_date_utc(&Value::from("2016-12-06 22:12:00")));
        assert!(!is_date_utc(&Value::from("2016-12-06T22:12:00")));
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::from("")));
        assert!(is_empty(&Value::Seq(vec![])));
        assert!(is_empty(&Value::Map(BTreeMap::new())));
        assert!(!is_empty(&Value::from("a")));
        assert!(!is_empty(&Value::Seq(vec![Value::Null])));
        assert!(!is_empty(&Value::from(0)));
        assert!(!is_empty(&Value::from(false)));
        assert!(!is_empty(&Value::Null));
        assert!(!is_empty(&Value::Absent));
    }
}
