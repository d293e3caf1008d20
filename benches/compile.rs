//! Compile throughput benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{criterion_group, criterion_main, Criterion};
use csq::compile::{compile, compile_boolean};
use csq::expr::Expression;
use serde_json::json;

/// A wide, moderately nested expression shaped like a real faceted search
fn wide_expression() -> Expression {
    let facets: Vec<Expression> = (0i64..50)
        .map(|i| {
            Expression::and(vec![
                Expression::field("genre", format!("genre-{i}")),
                Expression::field("year", 1950 + i..=1960 + i),
                Expression::field("title", Expression::prefix(format!("title-{i}"))),
            ])
        })
        .collect();
    Expression::or(facets)
}

fn bench_structured(c: &mut Criterion) {
    let expr = wide_expression();
    c.bench_function("structured_wide", |b| {
        b.iter(|| compile(std::hint::black_box(&expr)).unwrap())
    });
}

fn bench_parse_and_compile(c: &mut Criterion) {
    let input = json!({"and": {
        "genre": ["jazz", "bop", "modal"],
        "year": {"min": 1950, "max": 1970},
        "title": {"prefix": "kind"}
    }});
    c.bench_function("parse_and_compile", |b| {
        b.iter(|| {
            let expr = Expression::from_json(std::hint::black_box(&input)).unwrap();
            compile(&expr).unwrap()
        })
    });
}

fn bench_boolean(c: &mut Criterion) {
    let input = json!({"and": {
        "type": "donuts",
        "price": 3,
        "year": [2010, 2012],
        "not": {"filling": "jam"}
    }});
    c.bench_function("boolean_mapping", |b| {
        b.iter(|| compile_boolean(std::hint::black_box(&input)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_structured,
    bench_parse_and_compile,
    bench_boolean
);
criterion_main!(benches);
