//! Verdict type for single-value checks
//!
//! This module provides the `Verdict` type, the structural replacement for
//! an ad hoc "success sentinel or error message" return: a check either
//! passes, or fails with a payload. The payload defaults to `String` but
//! is generic so hosts can fail with structured error types.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use shallows::Verdict;
//!
//! let pass = Verdict::<String>::Pass;
//! let fail = Verdict::Fail("too short".to_string());
//!
//! assert!(pass.is_pass());
//! assert!(fail.is_fail());
//! ```
//!
//! ## Converting to Result
//!
//! ```
//! use shallows::Verdict;
//!
//! let fail = Verdict::Fail("bad input".to_string());
//! assert_eq!(fail.into_result(), Err("bad input".to_string()));
//! ```

use crate::value::Value;

/// The outcome of running one validator against one value.
///
/// Unlike `Result`, `Verdict` carries no success payload: validators are
/// read-only predicates, so a pass needs no data. A failure carries the
/// error payload, usually a human-readable `String`.
///
/// # Examples
///
/// ```
/// use shallows::{valid_number, Value, Verdict};
///
/// let check = valid_number(None);
/// assert_eq!(check(&Value::from(1)), Verdict::Pass);
/// assert_eq!(
///     check(&Value::from("a")),
///     Verdict::Fail("a is not of type number".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict<E = String> {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule; the payload says how.
    Fail(E),
}

impl<E> Verdict<E> {
    /// Check if this verdict is a pass.
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Check if this verdict is a failure.
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail(_))
    }

    /// Transform the failure payload if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use shallows::Verdict;
    ///
    /// let v = Verdict::Fail("oops".to_string());
    /// assert_eq!(v.map_fail(|e| e.len()), Verdict::Fail(4));
    /// ```
    #[inline]
    pub fn map_fail<E2, F>(self, f: F) -> Verdict<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Verdict::Pass => Verdict::Pass,
            Verdict::Fail(e) => Verdict::Fail(f(e)),
        }
    }

    /// Convert to a `Result`, with `()` as the success value.
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            Verdict::Pass => Ok(()),
            Verdict::Fail(e) => Err(e),
        }
    }

    /// Create a verdict from a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shallows::Verdict;
    ///
    /// assert!(Verdict::from_result(Ok::<(), String>(())).is_pass());
    /// assert!(Verdict::from_result(Err::<(), _>("e".to_string())).is_fail());
    /// ```
    #[inline]
    pub fn from_result(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Verdict::Pass,
            Err(e) => Verdict::Fail(e),
        }
    }

    /// The failure payload, if any.
    #[inline]
    pub fn fail_payload(self) -> Option<E> {
        match self {
            Verdict::Pass => None,
            Verdict::Fail(e) => Some(e),
        }
    }
}

impl<E> From<Result<(), E>> for Verdict<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        Verdict::from_result(result)
    }
}

/// A single-value check: pass, or fail with a payload.
///
/// Validators are stateless closures, created once by a factory and
/// invoked any number of times. They never mutate the value and never
/// panic on expected-invalid input.
///
/// # Examples
///
/// ```
/// use shallows::{Validator, Value, Verdict};
///
/// let has_chars: Validator = Box::new(|val: &Value| match val.as_str() {
///     Some(s) if !s.is_empty() => Verdict::Pass,
///     _ => Verdict::Fail("nope".to_string()),
/// });
///
/// assert!(has_chars(&Value::from("hello")).is_pass());
/// assert!(has_chars(&Value::from("")).is_fail());
/// ```
pub type Validator<E = String> = Box<dyn Fn(&Value) -> Verdict<E> + Send + Sync>;
