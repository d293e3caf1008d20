//! End-to-end dialect tests: loose JSON input through the parse boundary,
//! the dialect compilers, options extraction, and parameter assembly.

use csq::compile::{compile, compile_boolean, compile_with, Context};
use csq::expr::{Expression, Op};
use csq::options::SearchOptions;
use csq::request::{ApiVersion, SearchRequest};
use serde_json::json;

fn structured(input: serde_json::Value) -> String {
    compile(&Expression::from_json(&input).expect("parse")).expect("compile")
}

#[test]
fn structured_field_scalar() {
    assert_eq!(structured(json!({"f": "x"})), "f:'x'");
    assert_eq!(structured(json!({"year": 1959})), "year:1959");
}

#[test]
fn structured_singleton_list_never_wraps() {
    assert_eq!(structured(json!(["x"])), "'x'");
}

#[test]
fn structured_plural_list_defaults_to_or() {
    assert_eq!(structured(json!(["a", "b"])), "(or 'a' 'b')");
}

#[test]
fn structured_field_list_binds_field() {
    assert_eq!(
        structured(json!({"genre": ["jazz", "bop"]})),
        "(or genre:'jazz' genre:'bop')"
    );
}

#[test]
fn structured_and_overrides_default_operator() {
    assert_eq!(
        structured(json!({"and": {"genre": ["jazz", "bop"]}})),
        "(and (and genre:'jazz' genre:'bop'))"
    );
}

#[test]
fn structured_nested_groups() {
    assert_eq!(
        structured(json!({"and": {"genre": "jazz", "or": {"year": 1959, "title": "x"}}})),
        "(and genre:'jazz' (or title:'x' year:1959))"
    );
}

#[test]
fn structured_field_range_shapes() {
    assert_eq!(
        structured(json!({"year": {"min": 1959, "max": 1965}})),
        "(range field:year [1959,1965])"
    );
    assert_eq!(structured(json!({"year": {"max": 1965}})), "(range field:year {,1965])");
    assert_eq!(
        structured(json!({"and": {"genre": "jazz", "year": {"min": 1959}}})),
        "(and genre:'jazz' year:[1959,})"
    );
}

#[test]
fn structured_standalone_range_payloads() {
    assert_eq!(
        structured(json!({"range": [1959, 1965, {"field": "year"}]})),
        "(range field:year [1959,1965])"
    );
    assert_eq!(
        structured(json!({"range": {"field": "year", "min": 1959}})),
        "(range field:year [1959,})"
    );
}

#[test]
fn structured_prefix_shapes() {
    assert_eq!(
        structured(json!({"title": {"prefix": "kind"}})),
        "(prefix field:title 'kind')"
    );
    assert_eq!(structured(json!("kind*")), "(prefix 'kind')");
    assert_eq!(structured(json!(["kind*", "blue"])), "(or kind* 'blue')");
}

#[test]
fn structured_quotes_are_escaped() {
    assert_eq!(structured(json!({"f": "o'clock"})), r"f:'o\'clock'");
}

#[test]
fn structured_inline_context_for_filter_assembly() {
    let expr = Expression::from_json(&json!({"year": {"min": 1, "max": 5}})).unwrap();
    let inline = Context {
        default_op: Op::And,
        compound: false,
    };
    assert_eq!(compile_with(&expr, inline).unwrap(), "year:[1,5]");
}

#[test]
fn structured_errors() {
    let range = Expression::from_json(&json!({"range": [1, 5]})).unwrap();
    assert!(compile(&range).is_err(), "range without a field must fail");

    let clause = Expression::from_json(&json!({"f": {"nested": {"x": 1}}})).unwrap();
    assert!(compile(&clause).is_err(), "unrecognized clause shape must fail");

    assert!(Expression::from_json(&json!({"f": true})).is_err());
}

#[test]
fn boolean_group_and_elision() {
    assert_eq!(
        compile_boolean(&json!({"and": {"type": "donuts"}})).unwrap(),
        "(and type:'donuts')"
    );
    assert_eq!(compile_boolean(&json!({"and": {"type": ""}})).unwrap(), "");
}

#[test]
fn boolean_mixed_values() {
    assert_eq!(
        compile_boolean(&json!({"and": {"filling": "jam", "price": 3, "year": [2010, 2012]}}))
            .unwrap(),
        "(and filling:'jam' price:3 year:2010..2012)"
    );
}

#[test]
fn options_pagination_and_sort() {
    let opts = SearchOptions::extract(&json!({"page": 2, "per": 20, "sort": "created_at"}));
    assert_eq!(opts.start, Some(20));
    assert_eq!(opts.size, 20);
    assert_eq!(opts.sort.as_deref(), Some("created_at desc"));

    let opts = SearchOptions::extract(&json!({"sort": {"by": "created_at", "order": "asc"}}));
    assert_eq!(opts.sort.as_deref(), Some("created_at asc"));
}

#[test]
fn request_params_per_dialect() {
    let current = SearchRequest::new(ApiVersion::V2013, json!({"genre": "jazz"}))
        .with_options(SearchOptions::extract(&json!({"size": 3})));
    let params = current.params().unwrap();
    assert!(params.contains(&("q".to_string(), "genre:'jazz'".to_string())));
    assert!(params.contains(&("q.parser".to_string(), "structured".to_string())));
    assert!(params.contains(&("size".to_string(), "3".to_string())));

    let legacy = SearchRequest::new(ApiVersion::V2011, json!({"and": {"genre": "jazz"}}));
    let params = legacy.params().unwrap();
    assert!(params.contains(&("bq".to_string(), "(and genre:'jazz')".to_string())));
    assert!(!params.iter().any(|(k, _)| k == "q.parser"));
}
