//! Interval rendering for range clauses.

use crate::compile::scalar;
use crate::error::{Error, Result};
use crate::expr::Scalar;

/// Render the bracketed bound pair of an interval.
///
/// The opening delimiter is `[` when a min is present, `{` otherwise. The
/// closing delimiter is `]` when a max is present and inclusive, `}` when
/// the max is absent or exclusive. Absent bounds render empty:
/// `[1,5]`, `{,5]`, `[1,5}`.
pub fn format_bounds(min: Option<&Scalar>, max: Option<&Scalar>, max_exclusive: bool) -> String {
    let open = if min.is_some() { '[' } else { '{' };
    let close = if max.is_some() && !max_exclusive { ']' } else { '}' };
    let lo = min.map(scalar::coerce).unwrap_or_default();
    let hi = max.map(scalar::coerce).unwrap_or_default();
    format!("{open}{lo},{hi}{close}")
}

/// Render a full range clause.
///
/// A range must bind to a field: explicit at the clause site or inherited
/// from the enclosing clause. Compound form wraps a standalone filter
/// clause, inline form embeds among grouped operands.
pub fn format_range(
    field: Option<&str>,
    min: Option<&Scalar>,
    max: Option<&Scalar>,
    max_exclusive: bool,
    compound: bool,
) -> Result<String> {
    let field = field.ok_or(Error::MissingField { clause: "range" })?;
    let bounds = format_bounds(min, max, max_exclusive);
    if compound {
        Ok(format!("(range field:{field} {bounds})"))
    } else {
        Ok(format!("{field}:{bounds}"))
    }
}
