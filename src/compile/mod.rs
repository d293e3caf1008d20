//! Query compilation: expression trees into wire query text.
//!
//! Two dialects are supported:
//!
//! - [`structured`] - the current parenthesized, keyword-prefixed syntax
//!   (`(and genre:'jazz' year:[1959,1965])`)
//! - [`boolean`] - the legacy flat boolean syntax (`(and genre:'jazz')`)
//!
//! Both produce raw, unencoded strings meant as single query-parameter
//! values; the transport layer percent-encodes them.

pub mod boolean;
pub mod prefix;
pub mod range;
pub mod scalar;
pub mod structured;

pub use boolean::compile_boolean;
pub use structured::{compile, compile_with, Context};
