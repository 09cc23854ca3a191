//! # Shallows
//!
//! > *Shallow waters are easy to inspect*
//!
//! A tiny library of composable value validators: pure predicate
//! functions that check a loosely-shaped input against a type or format
//! rule and either pass or fail with a human-readable message, plus
//! combinators that sequence multiple checks over one value.
//!
//! ## Design
//!
//! - Input values are an explicit tagged sum ([`Value`]), so every
//!   predicate pattern-matches instead of probing runtime types.
//! - A check's outcome is a tagged result ([`Verdict`]), never an ad hoc
//!   sentinel; expected-invalid input flows through return values, not
//!   panics.
//! - Validator factories are curried on an optional error-message
//!   override, so one predicate serves many fields with contextual
//!   wording.
//! - Everything is pure, synchronous, and reentrant; no state is shared
//!   between calls.
//!
//! ## Quick Example
//!
//! ```rust
//! use shallows::{chain, required, valid_string, Value};
//!
//! let check_name = chain(vec![
//!     valid_string(None),
//!     required(Some("a name is required")),
//! ]);
//!
//! assert!(check_name(&Value::from("Alice")).is_empty());
//! assert_eq!(
//!     check_name(&Value::from("")),
//!     vec!["a name is required".to_string()],
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod combinator;
pub mod message;
pub mod normalize;
pub mod validator;
pub mod value;
pub mod verdict;

// Re-exports
pub use check::{
    is_bool, is_date, is_date_time, is_date_utc, is_empty, is_null, is_null_or_undef, is_number,
    is_string, is_undef,
};
pub use combinator::{chain, first_error};
pub use message::Kind;
pub use normalize::{normalize_boolean, NormalizeError};
pub use validator::{
    one_of, required, valid_bool, valid_date_format, valid_date_time_format,
    valid_date_utc_format, valid_number, valid_string,
};
pub use value::Value;
pub use verdict::{Validator, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::check::{
        is_bool, is_date, is_date_time, is_date_utc, is_empty, is_null, is_null_or_undef,
        is_number, is_string, is_undef,
    };
    pub use crate::combinator::{chain, first_error};
    pub use crate::message::Kind;
    pub use crate::normalize::{normalize_boolean, NormalizeError};
    pub use crate::validator::{
        one_of, required, valid_bool, valid_date_format, valid_date_time_format,
        valid_date_utc_format, valid_number, valid_string,
    };
    pub use crate::value::Value;
    pub use crate::verdict::{Validator, Verdict};
}
