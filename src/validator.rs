//! Validator factories
//!
//! Each factory takes an optional error-message override and returns a
//! ready-to-run [`Validator`]. The predicate logic is fixed; the override
//! exists so the same check can carry contextual, field-specific wording
//! supplied by the host, while the defaults stay usable out of the box.
//!
//! # Examples
//!
//! ```
//! use shallows::{valid_number, Value, Verdict};
//!
//! // Default message
//! let check = valid_number(None);
//! assert_eq!(
//!     check(&Value::from("asd")),
//!     Verdict::Fail("asd is not of type number".to_string())
//! );
//!
//! // Field-specific wording
//! let check = valid_number(Some("age must be a number"));
//! assert_eq!(
//!     check(&Value::from("asd")),
//!     Verdict::Fail("age must be a number".to_string())
//! );
//! ```

use crate::check::{
    is_bool, is_date, is_date_time, is_date_utc, is_empty, is_null_or_undef, is_number, is_string,
};
use crate::message::{message, message_list, Kind};
use crate::value::Value;
use crate::verdict::{Validator, Verdict};

fn typed(err: Option<&str>, kind: Kind, check: fn(&Value) -> bool) -> Validator {
    let err = err.map(str::to_owned);
    Box::new(move |val: &Value| {
        if check(val) {
            Verdict::Pass
        } else {
            Verdict::Fail(message(err.as_deref(), val, kind))
        }
    })
}

/// Validator that passes iff the value is a string.
///
/// # Example
///
/// ```
/// use shallows::{valid_string, Value};
///
/// let check = valid_string(None);
/// assert!(check(&Value::from("hello")).is_pass());
/// assert!(check(&Value::from("")).is_pass());
/// assert!(check(&Value::from(1)).is_fail());
/// ```
pub fn valid_string(err: Option<&str>) -> Validator {
    typed(err, Kind::String, is_string)
}

/// Validator that passes iff the value is a number.
///
/// # Example
///
/// ```
/// use shallows::{valid_number, Value};
///
/// let check = valid_number(Some("nope"));
/// assert!(check(&Value::from(-1)).is_pass());
/// assert!(check(&Value::Null).is_fail());
/// ```
pub fn valid_number(err: Option<&str>) -> Validator {
    typed(err, Kind::Number, is_number)
}

/// Validator that passes iff the value is a boolean.
pub fn valid_bool(err: Option<&str>) -> Validator {
    typed(err, Kind::Bool, is_bool)
}

/// Validator that passes iff the value is a string matching `YYYY-MM-DD`.
///
/// Non-string inputs fail with the same message; they never panic.
///
/// # Example
///
/// ```
/// use shallows::{valid_date_format, Value, Verdict};
///
/// let check = valid_date_format(None);
/// assert!(check(&Value::from("2016-12-06")).is_pass());
/// assert_eq!(
///     check(&Value::from(2)),
///     Verdict::Fail("2 date format must be 'YYYY-MM-DD'".to_string())
/// );
/// ```
pub fn valid_date_format(err: Option<&str>) -> Validator {
    typed(err, Kind::Date, is_date)
}

/// Validator that passes iff the value is a string matching
/// `YYYY-MM-DD hh:mm:ss`.
pub fn valid_date_time_format(err: Option<&str>) -> Validator {
    typed(err, Kind::DateTime, is_date_time)
}

/// Validator that passes iff the value is a string matching
/// `YYYY-MM-DDThh:mm:ssZ`.
pub fn valid_date_utc_format(err: Option<&str>) -> Validator {
    typed(err, Kind::DateUtc, is_date_utc)
}

/// Validator that passes iff the value equals some element of `allowed`.
///
/// Equality is structural; `Value::from(1)` is not `Value::from("1")`.
/// The default message lists the allowed values in their given order.
///
/// # Example
///
/// ```
/// use shallows::{one_of, Value, Verdict};
///
/// let allowed = vec![Value::from("single"), Value::from("family")];
/// let check = one_of(allowed, None);
///
/// assert!(check(&Value::from("single")).is_pass());
/// assert_eq!(
///     check(&Value::from("x")),
///     Verdict::Fail("'x' is not one of: 'single', 'family'".to_string())
/// );
/// ```
pub fn one_of(allowed: Vec<Value>, err: Option<&str>) -> Validator {
    let err = err.map(str::to_owned);
    Box::new(move |val: &Value| {
        if allowed.iter().any(|item| item == val) {
            Verdict::Pass
        } else {
            Verdict::Fail(message_list(err.as_deref(), val, &allowed))
        }
    })
}

/// Validator that passes iff the value is neither null/absent nor empty.
///
/// "Empty" is an empty string, sequence, or mapping, per
/// [`is_empty`](crate::is_empty); numbers and booleans always pass. The
/// default message ignores the value entirely.
///
/// # Example
///
/// ```
/// use shallows::{required, Value, Verdict};
///
/// let check = required(None);
/// assert!(check(&Value::from("x")).is_pass());
/// assert!(check(&Value::from(false)).is_pass());
/// assert_eq!(
///     check(&Value::from("")),
///     Verdict::Fail("A non empty value is required".to_string())
/// );
/// ```
pub fn required(err: Option<&str>) -> Validator {
    let err = err.map(str::to_owned);
    Box::new(move |val: &Value| {
        if !is_null_or_undef(val) && !is_empty(val) {
            Verdict::Pass
        } else {
            Verdict::Fail(message(err.as_deref(), val, Kind::Required))
        }
    })
}
