//! Wildcard/prefix clause rendering.

use crate::compile::scalar;

/// Strip any trailing wildcard markers from the source text.
///
/// Stripping then re-appending is idempotent, so text that already carries
/// a `*` renders the same as text that doesn't.
pub fn strip_wildcard(text: &str) -> &str {
    text.trim_end_matches('*')
}

/// Render a prefix clause.
///
/// Compound form is the standalone filter clause `(prefix field:f 'text')`,
/// with the field segment omitted when none resolves. Inline form is the
/// bare `text*` operand, field-qualified when one is bound.
pub fn format_prefix(text: &str, field: Option<&str>, compound: bool) -> String {
    let stem = strip_wildcard(text);
    match (compound, field) {
        (true, Some(f)) => format!("(prefix field:{f} {})", scalar::quote(stem)),
        (true, None) => format!("(prefix {})", scalar::quote(stem)),
        (false, Some(f)) => format!("{f}:{stem}*"),
        (false, None) => format!("{stem}*"),
    }
}
