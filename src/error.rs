//! Compile errors for the query dialects.
//!
//! Every failure here is a structural error in the caller-supplied
//! expression, raised immediately with no partial output. Nothing in this
//! crate retries; transport-level concerns live outside it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A range clause was reachable without a field name, either explicit
    /// at the clause site or inherited from an enclosing clause. Prefix
    /// clauses tolerate a missing field by omitting the field segment.
    #[error("missing field for {clause} clause")]
    MissingField { clause: &'static str },

    /// A field was mapped to a value that is neither range- nor
    /// prefix-shaped, nor a scalar or sequence.
    #[error("cannot determine clause type for field `{field}`")]
    ClauseType { field: String },

    /// An expression kind with no defined rendering (booleans, nulls,
    /// empty groupings).
    #[error("cannot compile value of kind `{kind}`")]
    UnsupportedKind { kind: &'static str },

    /// Range bounds accept only date/time, numeric, and string values.
    #[error("unsupported range bound of kind `{kind}`")]
    InvalidBound { kind: &'static str },

    /// The legacy boolean dialect compiles mappings only.
    #[error("boolean query input must be a mapping, got `{kind}`")]
    NotAMapping { kind: &'static str },
}
