//! Extraction of pagination, sort, and field-selection directives from a
//! loosely typed options bag.
//!
//! Independent of the dialect compilers: every input shape has a defined
//! fallback and nothing here ever errors. Outputs are raw parameter values;
//! the transport encodes them.

use serde_json::{Map, Value};

/// Server-side page size applied when the caller requests nothing
pub const DEFAULT_SIZE: u64 = 10;

/// Relevance rank expression used when a sort spec names an order only
pub const DEFAULT_SORT_FIELD: &str = "_score";

/// Directives extracted from an options bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Result offset; `None` leaves the server default in place
    pub start: Option<u64>,
    /// Page size
    pub size: u64,
    /// Rendered sort clause, e.g. `"created_at desc"`
    pub sort: Option<String>,
    /// Fields to return; empty applies no restriction
    pub fields: Vec<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start: None,
            size: DEFAULT_SIZE,
            sort: None,
            fields: Vec::new(),
        }
    }
}

impl SearchOptions {
    /// Extract directives from an options bag. A non-mapping bag yields
    /// the defaults.
    pub fn extract(bag: &Value) -> Self {
        let Some(map) = bag.as_object() else {
            return Self::default();
        };
        let (start, size) = paginate(map);
        Self {
            start,
            size,
            sort: sort_clause(map.get("sort")),
            fields: return_fields(map.get("return")),
        }
    }
}

/// Resolve `(start, size)` from the bag.
///
/// Precedence: an explicit `start` wins outright (size falls back to an
/// explicit `size` or the default); else `(page, per)` converts to
/// `((page-1)*per, per)`; else a lone `size`/`per` sets the size with the
/// start left to the server default; else the default size applies.
pub fn paginate(map: &Map<String, Value>) -> (Option<u64>, u64) {
    let size = uint(map.get("size"));
    if let Some(start) = uint(map.get("start")) {
        return (Some(start), size.unwrap_or(DEFAULT_SIZE));
    }
    let per = uint(map.get("per"));
    if let (Some(page), Some(per)) = (uint(map.get("page")), per) {
        return (Some(page.saturating_sub(1).saturating_mul(per)), per);
    }
    if let Some(n) = size.or(per) {
        return (None, n);
    }
    (None, DEFAULT_SIZE)
}

/// Render a sort clause from its spec.
///
/// A `{by, order}` mapping fills in the relevance field and descending
/// order where absent. A bare string always renders descending, whatever
/// the caller meant; the scalar form has no way to say otherwise.
pub fn sort_clause(spec: Option<&Value>) -> Option<String> {
    match spec? {
        Value::Object(map) => {
            let by = map
                .get("by")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_SORT_FIELD);
            let order = map.get("order").and_then(Value::as_str).unwrap_or("desc");
            Some(format!("{by} {order}"))
        }
        Value::String(s) if !s.is_empty() => Some(format!("{s} desc")),
        _ => None,
    }
}

/// Resolve the return-field list: a sequence passes through, a single
/// string becomes a singleton, anything else applies no restriction.
pub fn return_fields(spec: Option<&Value>) -> Vec<String> {
    match spec {
        Some(Value::Array(items)) => items.iter().filter_map(field_name).collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

fn field_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Accept counts as JSON numbers or numeric strings
fn uint(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(v: Value) -> SearchOptions {
        SearchOptions::extract(&v)
    }

    #[test]
    fn test_defaults() {
        let o = bag(json!({}));
        assert_eq!(o, SearchOptions::default());
        assert_eq!(o.size, 10);
        assert_eq!(o.start, None);
    }

    #[test]
    fn test_explicit_start_size() {
        let o = bag(json!({"start": 30, "size": 15}));
        assert_eq!((o.start, o.size), (Some(30), 15));
    }

    #[test]
    fn test_page_per_conversion() {
        let o = bag(json!({"page": 2, "per": 20}));
        assert_eq!((o.start, o.size), (Some(20), 20));
    }

    #[test]
    fn test_first_page_starts_at_zero() {
        let o = bag(json!({"page": 1, "per": 25}));
        assert_eq!((o.start, o.size), (Some(0), 25));
    }

    #[test]
    fn test_lone_size_leaves_start_unset() {
        let o = bag(json!({"size": 50}));
        assert_eq!((o.start, o.size), (None, 50));
        let o = bag(json!({"per": 5}));
        assert_eq!((o.start, o.size), (None, 5));
    }

    #[test]
    fn test_extreme_page_saturates_instead_of_panicking() {
        // Huge but valid counts must fall back to a defined value, never
        // overflow.
        let o = bag(json!({"page": u64::MAX, "per": 1000}));
        assert_eq!((o.start, o.size), (Some(u64::MAX), 1000));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let o = bag(json!({"page": "3", "per": "10"}));
        assert_eq!((o.start, o.size), (Some(20), 10));
    }

    #[test]
    fn test_scalar_sort_is_always_descending() {
        let o = bag(json!({"sort": "created_at"}));
        assert_eq!(o.sort.as_deref(), Some("created_at desc"));
    }

    #[test]
    fn test_structured_sort() {
        let o = bag(json!({"sort": {"by": "created_at", "order": "asc"}}));
        assert_eq!(o.sort.as_deref(), Some("created_at asc"));
    }

    #[test]
    fn test_sort_defaults_fill_in() {
        let o = bag(json!({"sort": {"order": "asc"}}));
        assert_eq!(o.sort.as_deref(), Some("_score asc"));
        let o = bag(json!({"sort": {"by": "year"}}));
        assert_eq!(o.sort.as_deref(), Some("year desc"));
    }

    #[test]
    fn test_return_field_shapes() {
        assert_eq!(
            bag(json!({"return": ["title", "year"]})).fields,
            vec!["title", "year"]
        );
        assert_eq!(bag(json!({"return": "title"})).fields, vec!["title"]);
        assert!(bag(json!({"return": 7.5})).fields.is_empty());
        assert!(bag(json!({})).fields.is_empty());
    }
}
