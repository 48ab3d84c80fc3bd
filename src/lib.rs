//! mailq: compile structured search expressions into mail-engine query strings.
//!
//! The input is an s-expression-like tree of [`Expr`] nodes; the output is
//! the textual query the full-text mail-search engine consumes. Field
//! names, flag states, and priorities are validated against static
//! registries; `one-of`/`all-of` sugar expands into `or`/`and` before
//! serialization.
//!
//! # Example
//!
//! ```
//! use mailq::{Expr, Range, Value, compile};
//!
//! let query = compile(&[
//!     Expr::field("from", "alice@example.com"),
//!     Expr::field("flag", Value::one_of([Expr::symbol("seen"), Expr::symbol("flagged")])),
//!     Expr::field("date", Range::until(mailq::Literal::Symbol("now".into()))),
//! ]).unwrap();
//!
//! assert_eq!(
//!     query,
//!     "from:alice@example.com (flag:seen or flag:flagged) date:..now"
//! );
//! ```
//!
//! Compilation is a pure function: no I/O, no shared state, safe to call
//! from any thread. Recursion depth is bounded only by the depth of the
//! caller-supplied tree.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod expr;
pub mod fields;

#[cfg(test)]
mod expr_tests;
#[cfg(test)]
mod fields_tests;

pub use compile::{Compiler, Reifier, compile};
pub use expr::{Expr, Literal, Range, RxForm, SetOp, Value};
pub use fields::FieldKind;

/// Errors raised while compiling a query expression.
///
/// All variants are raised synchronously at the offending node; there is
/// no recovery inside the compiler and no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Field tag not present in the registry, by name or alias.
    #[error("unknown search field `{0}`")]
    UnknownField(String),

    /// Flag or priority token outside the closed vocabulary.
    #[error("invalid value `{value}` for field `{field}`")]
    InvalidFlagOrPriority { field: String, value: String },

    /// A range where none is allowed, or a non-range value on a
    /// range-capable field.
    #[error("invalid range value `{value}` for field `{field}`")]
    InvalidRangeShape { field: String, value: String },

    /// `one-of`/`all-of` with zero elements.
    #[error("empty `{op}` set for field `{field}`")]
    EmptySugarSet { field: String, op: SetOp },

    /// A node shape the compiler does not accept in this position.
    #[error("unrecognized query expression `{0}`")]
    UnrecognizedExpression(String),

    /// An `rx` node was reached but no reifier is configured.
    #[error("structured regex form requires a reifier")]
    MissingReifier,
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
