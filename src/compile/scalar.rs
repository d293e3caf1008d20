//! Scalar-to-wire-literal coercion.

use time::{OffsetDateTime, UtcOffset};

use crate::expr::Scalar;

/// Render a scalar as its wire literal token.
///
/// Dates become unquoted UTC timestamps, numbers become unquoted decimal
/// integer tokens (fractions truncated), and everything else is quoted.
/// Every scalar kind has a rendering; unrenderable inputs (booleans, nulls)
/// are rejected at the parse boundary before they can reach this layer.
pub fn coerce(value: &Scalar) -> String {
    match value {
        Scalar::Str(s) => quote(s),
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => (f.trunc() as i64).to_string(),
        Scalar::Date(dt) => format_utc(dt),
    }
}

/// Wrap text in single quotes, backslash-escaping embedded quotes and
/// backslashes so a literal can never terminate its own quoting.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for ch in text.chars() {
        if ch == '\'' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// UTC timestamp literal: `YYYY-MM-DDTHH:MM:SSZ`, unquoted
fn format_utc(dt: &OffsetDateTime) -> String {
    let utc = dt.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}
