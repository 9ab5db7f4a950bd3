//! Numeric normalizer for loosely-typed upstream values.
//!
//! The routing service reports numbers inconsistently: sometimes as JSON
//! numbers, sometimes as Brazilian locale strings (`"1.234,56"`), and
//! sometimes not at all. Every numeric field read from raw input goes
//! through [`safe_number`], which never fails.

use serde_json::Value;

/// Convert a raw upstream value into an `f64`, total over all inputs.
///
/// - A JSON number is returned as-is.
/// - A string is parsed as a Brazilian locale number: all `.` characters
///   are stripped as thousands separators first, then `,` becomes the
///   decimal point. A failed parse yields `0`.
/// - Anything else (absent, null, bool, object, array) yields `0`.
///
/// The strip-then-replace order means `"1.234,56"` yields `1234.56` and
/// `"12,5"` yields `12.5`. An ambiguous value like `"1.234"` is read as
/// thousands-separated and yields `1234`, not `1.234`. Intentional:
/// the dashboard has always displayed it that way.
pub fn safe_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .replace('.', "")
            .replace(',', ".")
            .parse::<f64>()
            .unwrap_or(0.0),
        _ => 0.0,
    }
}
