//! Combinators for sequencing validators
//!
//! Two ways to run a list of validators against one value:
//!
//! - [`chain`] runs every validator and collects every failure, for
//!   callers that want the complete list of violations.
//! - [`first_error`] stops at the first failure, for callers that only
//!   care whether the value is valid and why it first broke.
//!
//! Both preserve invocation order and return an empty vec when every
//! validator passes. Both are generic over the failure payload, so
//! structured error types compose the same way strings do.
//!
//! # Examples
//!
//! ```
//! use shallows::{chain, first_error, required, valid_string, Value};
//!
//! let all = chain(vec![valid_string(None), required(None)]);
//! let errors = all(&Value::from(2));
//! assert_eq!(errors, vec!["2 is not of type string".to_string()]);
//!
//! let first = first_error(vec![valid_string(None), required(None)]);
//! assert!(first(&Value::from("hello")).is_empty());
//! ```

use crate::value::Value;
use crate::verdict::{Validator, Verdict};

/// Compose validators so every one runs and every failure is collected.
///
/// The result holds one payload per failing validator, in invocation
/// order; an empty vec means the value passed everything. There is no
/// short-circuit, so side-effect-free validators may all report at once.
///
/// # Examples
///
/// ```
/// use shallows::{chain, required, valid_string, Value};
///
/// let check = chain(vec![valid_string(Some("not text")), required(Some("missing"))]);
///
/// assert!(check(&Value::from("hi")).is_empty());
/// assert_eq!(check(&Value::Null), vec!["not text".to_string(), "missing".to_string()]);
/// ```
pub fn chain<E: 'static>(
    validators: Vec<Validator<E>>,
) -> impl Fn(&Value) -> Vec<E> + Send + Sync {
    move |val| {
        let errors: Vec<E> = validators
            .iter()
            .filter_map(|validator| validator(val).fail_payload())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            failures = errors.len(),
            total = validators.len(),
            "chain complete"
        );

        errors
    }
}

/// Compose validators so evaluation stops at the first failure.
///
/// Returns a one-element vec holding the first failing payload, or an
/// empty vec iff every validator passes. Cheaper than [`chain`] when only
/// the first violation matters.
///
/// # Examples
///
/// ```
/// use shallows::{first_error, required, valid_string, Value};
///
/// let check = first_error(vec![valid_string(Some("not text")), required(Some("missing"))]);
///
/// // Both checks fail, only the first is reported
/// assert_eq!(check(&Value::Null), vec!["not text".to_string()]);
/// ```
pub fn first_error<E: 'static>(
    validators: Vec<Validator<E>>,
) -> impl Fn(&Value) -> Vec<E> + Send + Sync {
    move |val| {
        for validator in &validators {
            if let Verdict::Fail(error) = validator(val) {
                #[cfg(feature = "tracing")]
                tracing::trace!("first_error short-circuited");

                return vec![error];
            }
        }

        vec![]
    }
}
