//! Expression trees: the compiler's input model.
//!
//! `Expression` is the tagged union every dialect compiles from. Callers can
//! build it directly through the typed constructors here, or hand the crate
//! a loose `serde_json::Value` and let [`Expression::from_json`] parse it
//! into this union at the boundary (see [`parse`]).

pub mod parse;

use std::ops::{Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};
use time::OffsetDateTime;

/// A scalar value renderable as a wire literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Date(OffsetDateTime),
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<OffsetDateTime> for Scalar {
    fn from(v: OffsetDateTime) -> Self {
        Self::Date(v)
    }
}

/// Boolean grouping operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Not,
}

impl Op {
    /// The dialect keyword for this operator
    pub fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
        }
    }
}

/// A search expression.
///
/// One constructor per input kind; the compilers match exhaustively, so any
/// new kind forces a compile-time update instead of a runtime "unknown kind"
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A scalar term
    Literal(Scalar),
    /// A key/value pair from a mapping. The name may be absent when the
    /// clause inherits its field from an enclosing clause.
    Field {
        name: Option<String>,
        value: Box<Expression>,
    },
    /// Explicit boolean grouping
    Group {
        op: Op,
        children: Vec<Expression>,
    },
    /// A bounded interval. `max_exclusive` can only be set through the Rust
    /// interval types (`a..b`, `..b`); bound-pair forms parsed from loose
    /// input are always inclusive at the max.
    Range {
        field: Option<String>,
        min: Option<Scalar>,
        max: Option<Scalar>,
        max_exclusive: bool,
    },
    /// A wildcard/prefix match
    Prefix {
        field: Option<String>,
        text: String,
    },
    /// Multiple values grouped under the context's default operator
    Seq(Vec<Expression>),
}

impl Expression {
    /// A scalar literal term
    pub fn literal(value: impl Into<Scalar>) -> Self {
        Self::Literal(value.into())
    }

    /// A field clause binding `name` to `value`
    pub fn field(name: impl Into<String>, value: impl Into<Self>) -> Self {
        Self::Field {
            name: Some(name.into()),
            value: Box::new(value.into()),
        }
    }

    /// An AND grouping
    pub fn and(children: Vec<Self>) -> Self {
        Self::Group {
            op: Op::And,
            children,
        }
    }

    /// An OR grouping
    pub fn or(children: Vec<Self>) -> Self {
        Self::Group {
            op: Op::Or,
            children,
        }
    }

    /// A NOT grouping around a single child
    pub fn not(child: Self) -> Self {
        Self::Group {
            op: Op::Not,
            children: vec![child],
        }
    }

    /// A prefix clause with no field of its own
    pub fn prefix(text: impl Into<String>) -> Self {
        Self::Prefix {
            field: None,
            text: text.into(),
        }
    }
}

impl From<Scalar> for Expression {
    fn from(value: Scalar) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        Self::Literal(value.into())
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        Self::Literal(value.into())
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Self::Literal(value.into())
    }
}

impl From<OffsetDateTime> for Expression {
    fn from(value: OffsetDateTime) -> Self {
        Self::Literal(value.into())
    }
}

impl From<Vec<Expression>> for Expression {
    fn from(items: Vec<Expression>) -> Self {
        Self::Seq(items)
    }
}

// The Rust interval types are the only source of an exclusive max: `a..b`
// carries the exclusive-end marker, `a..=b` does not. Bound pairs coming in
// through the loose JSON forms never set it.

impl From<Range<i64>> for Expression {
    fn from(r: Range<i64>) -> Self {
        Self::Range {
            field: None,
            min: Some(Scalar::Int(r.start)),
            max: Some(Scalar::Int(r.end)),
            max_exclusive: true,
        }
    }
}

impl From<RangeInclusive<i64>> for Expression {
    fn from(r: RangeInclusive<i64>) -> Self {
        Self::Range {
            field: None,
            min: Some(Scalar::Int(*r.start())),
            max: Some(Scalar::Int(*r.end())),
            max_exclusive: false,
        }
    }
}

impl From<RangeFrom<i64>> for Expression {
    fn from(r: RangeFrom<i64>) -> Self {
        Self::Range {
            field: None,
            min: Some(Scalar::Int(r.start)),
            max: None,
            max_exclusive: false,
        }
    }
}

impl From<RangeTo<i64>> for Expression {
    fn from(r: RangeTo<i64>) -> Self {
        Self::Range {
            field: None,
            min: None,
            max: Some(Scalar::Int(r.end)),
            max_exclusive: true,
        }
    }
}

impl From<RangeToInclusive<i64>> for Expression {
    fn from(r: RangeToInclusive<i64>) -> Self {
        Self::Range {
            field: None,
            min: None,
            max: Some(Scalar::Int(r.end)),
            max_exclusive: false,
        }
    }
}
