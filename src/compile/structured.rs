//! Structured-dialect compiler (the current wire syntax).
//!
//! Recursively lowers an [`Expression`] into parenthesized structured-query
//! text: `(and genre:'jazz' (or year:[1959,1965] title:'kind of blue'))`.
//! The output is the raw value for the `q`/`fq` parameter (with
//! `q.parser=structured`); the transport percent-encodes it.

use crate::compile::{prefix, range, scalar};
use crate::error::{Error, Result};
use crate::expr::{Expression, Op, Scalar};

/// Compile context threaded through the recursion.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Implicit operator applied when a field or top-level expression
    /// resolves to multiple values without an explicit grouping keyword.
    pub default_op: Op,
    /// Compound mode renders range/prefix clauses as standalone
    /// parenthesized filters; inline mode embeds them as operands.
    pub compound: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            default_op: Op::Or,
            compound: true,
        }
    }
}

impl Context {
    /// Context for an operand embedded among several grouped terms
    fn inline(self) -> Self {
        Self {
            compound: false,
            ..self
        }
    }

    /// Propagate an explicit grouping operator into nested sequences, so
    /// multi-value children pick the right implicit grouping. NOT is not a
    /// sequence joiner; children under it keep the surrounding default.
    fn with_op(self, op: Op) -> Self {
        match op {
            Op::And | Op::Or => Self {
                default_op: op,
                ..self
            },
            Op::Not => self,
        }
    }
}

/// Compile an expression as a standalone query (compound mode, OR default).
pub fn compile(expr: &Expression) -> Result<String> {
    compile_with(expr, Context::default())
}

/// Compile an expression under an explicit context.
pub fn compile_with(expr: &Expression, ctx: Context) -> Result<String> {
    compile_node(expr, None, ctx)
}

/// Central recursive dispatcher. `field` is the name inherited from an
/// enclosing clause, consumed by range/prefix/literal leaves.
fn compile_node(expr: &Expression, field: Option<&str>, ctx: Context) -> Result<String> {
    match expr {
        Expression::Literal(value) => compile_literal(value, field, ctx),

        Expression::Field { name, value } => {
            // The clause's own name wins over an inherited one.
            compile_clause(name.as_deref().or(field), value, ctx)
        }

        Expression::Group { op, children } => {
            if children.is_empty() {
                return Err(Error::UnsupportedKind {
                    kind: "empty group",
                });
            }
            let inner = ctx.with_op(*op).inline();
            let parts = children
                .iter()
                .map(|child| compile_node(child, field, inner))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("({} {})", op.keyword(), parts.join(" ")))
        }

        Expression::Range {
            field: own,
            min,
            max,
            max_exclusive,
        } => range::format_range(
            field.or(own.as_deref()),
            min.as_ref(),
            max.as_ref(),
            *max_exclusive,
            ctx.compound,
        ),

        Expression::Prefix { field: own, text } => Ok(prefix::format_prefix(
            text,
            field.or(own.as_deref()),
            ctx.compound,
        )),

        Expression::Seq(items) => compile_seq(items, field, ctx),
    }
}

/// Compile the value side of a field clause with the field bound.
fn compile_clause(field: Option<&str>, value: &Expression, ctx: Context) -> Result<String> {
    match value {
        // Range- and prefix-shaped values delegate with the field bound.
        Expression::Range { .. } | Expression::Prefix { .. } => compile_node(value, field, ctx),

        Expression::Literal(scalar) => compile_literal(scalar, field, ctx),

        // Multiple values for one field group under the default operator,
        // the field implicitly bound to each element.
        Expression::Seq(items) => compile_seq(items, field, ctx),

        // Neither range- nor prefix-shaped, nor scalar/sequence.
        Expression::Field { .. } | Expression::Group { .. } => Err(Error::ClauseType {
            field: field.unwrap_or("<none>").to_string(),
        }),
    }
}

fn compile_literal(value: &Scalar, field: Option<&str>, ctx: Context) -> Result<String> {
    // A string ending in a wildcard marker is a prefix clause.
    if let Scalar::Str(text) = value {
        if text.ends_with('*') {
            return Ok(prefix::format_prefix(text, field, ctx.compound));
        }
    }
    let token = scalar::coerce(value);
    match field {
        Some(f) => Ok(format!("{f}:{token}")),
        None => Ok(token),
    }
}

fn compile_seq(items: &[Expression], field: Option<&str>, ctx: Context) -> Result<String> {
    match items {
        [] => Err(Error::UnsupportedKind {
            kind: "empty sequence",
        }),
        // A singleton compiles as its sole element, never wrapped.
        [sole] => compile_node(sole, field, ctx),
        _ => {
            let inner = ctx.inline();
            let parts = items
                .iter()
                .map(|item| compile_node(item, field, inner))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!("({} {})", ctx.default_op.keyword(), parts.join(" ")))
        }
    }
}
