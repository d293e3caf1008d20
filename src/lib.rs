//! # CSQ - CloudSearch Query Compiler
//!
//! CSQ turns nested, loosely structured search expressions (field/value
//! pairs, boolean groupings, ranges, prefixes, lists) into the exact query
//! text a CloudSearch-style document-search service expects, over both of
//! its wire dialects.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`expr`] - Expression trees and the loose-JSON parse boundary
//! - [`compile`] - The two dialect compilers (structured + legacy boolean)
//! - [`options`] - Pagination, sort, and return-field extraction
//! - [`request`] - Raw parameter assembly per API version
//! - [`error`] - Structural compile errors
//!
//! ## Quick Start
//!
//! ```
//! use csq::compile::compile;
//! use csq::expr::Expression;
//!
//! let expr = Expression::and(vec![
//!     Expression::field("genre", "jazz"),
//!     Expression::field("year", 1959..=1965),
//! ]);
//! assert_eq!(compile(&expr).unwrap(), "(and genre:'jazz' year:[1959,1965])");
//! ```
//!
//! Loosely structured input goes through the same pipeline:
//!
//! ```
//! use csq::compile::compile;
//! use csq::expr::Expression;
//! use serde_json::json;
//!
//! let expr = Expression::from_json(&json!({"or": {"genre": "jazz", "year": 1959}})).unwrap();
//! assert_eq!(compile(&expr).unwrap(), "(or genre:'jazz' year:1959)");
//! ```
//!
//! Everything here is pure, synchronous computation over caller-owned
//! values: no shared state, no I/O, safe to call concurrently. Output
//! strings are raw parameter values; percent-encoding, URL construction,
//! and HTTP belong to the transport layer.

pub mod compile;
pub mod error;
pub mod expr;
pub mod options;
pub mod request;

pub use error::{Error, Result};
pub use expr::{Expression, Scalar};
