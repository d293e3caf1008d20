//! Loose-input boundary: `serde_json::Value` into [`Expression`].
//!
//! Callers that don't build expression trees by hand describe their intent
//! as nested JSON: field/value pairs, reserved grouping keys, bound pairs,
//! prefix payloads. This module is the single place where that untyped form
//! is checked; past it, the compilers match exhaustively on the union.
//!
//! Reserved mapping keys (`and`, `or`, `not`, `range`, `prefix`) are grammar
//! keywords, never field names.

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::expr::{Expression, Op, Scalar};

/// Short kind name for a JSON value, used in error messages
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Expression {
    /// Parse a loosely structured JSON value into an expression tree.
    ///
    /// Booleans and nulls have no rendering in any dialect and are rejected
    /// here, naming the offending kind.
    pub fn from_json(value: &Value) -> Result<Self> {
        parse_value(value)
    }
}

fn parse_value(value: &Value) -> Result<Expression> {
    match value {
        Value::Null | Value::Bool(_) => Err(Error::UnsupportedKind {
            kind: json_kind(value),
        }),
        Value::Number(n) => Ok(Expression::Literal(number_scalar(n))),
        Value::String(s) => Ok(Expression::Literal(Scalar::Str(s.clone()))),
        Value::Array(items) => Ok(Expression::Seq(
            items.iter().map(parse_value).collect::<Result<Vec<_>>>()?,
        )),
        Value::Object(map) => parse_mapping(map),
    }
}

fn number_scalar(n: &serde_json::Number) -> Scalar {
    match n.as_i64() {
        Some(i) => Scalar::Int(i),
        None => Scalar::Float(n.as_f64().unwrap_or_default()),
    }
}

fn parse_mapping(map: &Map<String, Value>) -> Result<Expression> {
    let mut clauses = map
        .iter()
        .map(|(key, value)| parse_pair(key, value))
        .collect::<Result<Vec<_>>>()?;
    match clauses.len() {
        0 => Err(Error::UnsupportedKind {
            kind: "empty mapping",
        }),
        1 => Ok(clauses.pop().unwrap()),
        // Multiple pairs in one mapping are filter clauses: all must hold.
        _ => Ok(Expression::Group {
            op: Op::And,
            children: clauses,
        }),
    }
}

fn parse_pair(key: &str, value: &Value) -> Result<Expression> {
    match key {
        "and" => parse_group(Op::And, value),
        "or" => parse_group(Op::Or, value),
        "not" => parse_group(Op::Not, value),
        "range" => parse_range_payload(value),
        "prefix" => parse_prefix_payload(value),
        _ => Ok(Expression::Field {
            name: Some(key.to_string()),
            value: Box::new(parse_clause_value(value)?),
        }),
    }
}

fn parse_group(op: Op, value: &Value) -> Result<Expression> {
    let children = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| parse_pair(key, value))
            .collect::<Result<Vec<_>>>()?,
        Value::Array(items) => items.iter().map(parse_value).collect::<Result<Vec<_>>>()?,
        other => vec![parse_value(other)?],
    };
    Ok(Expression::Group { op, children })
}

/// Parse the value side of a field clause.
///
/// A mapping value must be range-shaped (`min`/`max` keys) or prefix-shaped
/// (`prefix` key) to mean anything under a field. Other mappings still parse
/// structurally; the structured compiler rejects them with a clause-type
/// error at the clause site.
fn parse_clause_value(value: &Value) -> Result<Expression> {
    if let Value::Object(map) = value {
        if map.contains_key("min") || map.contains_key("max") {
            return parse_range_map(map);
        }
        if let Some(text) = map.get("prefix") {
            return parse_prefix_payload(text);
        }
    }
    parse_value(value)
}

/// Parse a standalone `range` payload: a `{min, max, field?}` map or a
/// `[min, max]` / `[min, max, {"field": f}]` bound list.
///
/// Both forms are inclusive at the max when a max is present; only the typed
/// Rust interval constructors carry an exclusive-end marker.
fn parse_range_payload(value: &Value) -> Result<Expression> {
    match value {
        Value::Object(map) => parse_range_map(map),
        Value::Array(items) => parse_range_list(items),
        other => Err(Error::UnsupportedKind {
            kind: json_kind(other),
        }),
    }
}

fn parse_range_map(map: &Map<String, Value>) -> Result<Expression> {
    Ok(Expression::Range {
        field: map
            .get("field")
            .and_then(Value::as_str)
            .map(str::to_string),
        min: parse_bound(map.get("min"))?,
        max: parse_bound(map.get("max"))?,
        max_exclusive: false,
    })
}

fn parse_range_list(items: &[Value]) -> Result<Expression> {
    // Trailing option on the list carries the field: [min, max, {"field": f}]
    let (bounds, field) = match items {
        [rest @ .., Value::Object(opts)] if opts.contains_key("field") => (
            rest,
            opts.get("field").and_then(Value::as_str).map(str::to_string),
        ),
        _ => (items, None),
    };
    let (min, max) = match bounds {
        [min, max] => (parse_bound(Some(min))?, parse_bound(Some(max))?),
        _ => {
            return Err(Error::UnsupportedKind {
                kind: "range bound list",
            });
        }
    };
    Ok(Expression::Range {
        field,
        min,
        max,
        max_exclusive: false,
    })
}

/// Bounds accept dates (not expressible in JSON), numbers, and strings.
/// An absent or null bound leaves that end of the interval open.
fn parse_bound(value: Option<&Value>) -> Result<Option<Scalar>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(number_scalar(n))),
        Some(Value::String(s)) => Ok(Some(Scalar::Str(s.clone()))),
        Some(other) => Err(Error::InvalidBound {
            kind: json_kind(other),
        }),
    }
}

fn parse_prefix_payload(value: &Value) -> Result<Expression> {
    match value {
        Value::String(text) => Ok(Expression::Prefix {
            field: None,
            text: text.clone(),
        }),
        Value::Object(map) => {
            let text = map
                .get("text")
                .and_then(Value::as_str)
                .ok_or(Error::UnsupportedKind {
                    kind: "prefix payload",
                })?;
            Ok(Expression::Prefix {
                field: map
                    .get("field")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                text: text.to_string(),
            })
        }
        other => Err(Error::UnsupportedKind {
            kind: json_kind(other),
        }),
    }
}
