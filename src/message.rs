//! Default error messages
//!
//! A fixed table mapping each check kind to a human-readable message
//! template, plus the rendering helpers that substitute a caller-supplied
//! override when one is given.

use crate::value::Value;

/// The kind of check a validator performs.
///
/// Keys the fixed table of default message templates. The table is
/// immutable and process-wide; callers customize wording per validator
/// via the factory override argument instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Runtime string type check.
    String,
    /// Runtime number type check.
    Number,
    /// Runtime boolean type check.
    Bool,
    /// `YYYY-MM-DD` format check.
    Date,
    /// `YYYY-MM-DD hh:mm:ss` format check.
    DateTime,
    /// `YYYY-MM-DDThh:mm:ssZ` format check.
    DateUtc,
    /// Non-empty presence check.
    Required,
}

impl Kind {
    /// The default message template for this kind.
    ///
    /// All templates except `Required` are suffixes appended to the
    /// rendered value; `Required` is a complete sentence on its own.
    pub fn template(self) -> &'static str {
        match self {
            Kind::String => " is not of type string",
            Kind::Number => " is not of type number",
            Kind::Bool => " is not of type boolean",
            Kind::Date => " date format must be 'YYYY-MM-DD'",
            Kind::DateTime => " dateTime format must be 'YYYY-MM-DD hh:mm:ss'",
            Kind::DateUtc => " date format must be UTC: 'YYYY-MM-DDThh:mm:ssZ'",
            Kind::Required => "A non empty value is required",
        }
    }
}

/// Render the failure message for a single-kind check.
///
/// The override wins verbatim when present. Otherwise the value's loose
/// string form is prefixed to the kind's template; `Required` renders the
/// bare template without the value.
pub(crate) fn message(err: Option<&str>, val: &Value, kind: Kind) -> String {
    match err {
        Some(err) => err.to_owned(),
        None if kind == Kind::Required => kind.template().to_owned(),
        None => format!("{val}{}", kind.template()),
    }
}

/// Render the failure message for a membership check.
///
/// The allowed values are single-quoted and joined in their given order.
pub(crate) fn message_list(err: Option<&str>, val: &Value, allowed: &[Value]) -> String {
    match err {
        Some(err) => err.to_owned(),
        None => {
            let rendered: Vec<String> = allowed.iter().map(|v| format!("'{v}'")).collect();
            format!("'{val}' is not one of: {}", rendered.join(", "))
        }
    }
}
