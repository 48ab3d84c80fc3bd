//! Expression tree model for search queries.
//!
//! A query is a sibling list of [`Expr`] nodes. Hosts construct the tree
//! directly (or deserialize it via serde) and hand it to the compiler;
//! there is no text parser on this side.
//!
//! The `Display` impls render nodes back in their symbolic surface form,
//! e.g. `(subject "hello world")`. That rendering exists for diagnostics
//! and is not the compiled query string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An atomic value: free text, a number, or a bare symbolic token.
///
/// Symbols stand for constant tokens like flag names or date keywords
/// (`seen`, `now`). Text is free-form and gets quoted when it contains
/// whitespace; symbols and numbers always render plain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    Text(String),
    Int(i64),
    Symbol(String),
}

impl Literal {
    /// Plain textual form, without any quoting.
    pub fn as_plain(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Literal::Text(s) | Literal::Symbol(s) => std::borrow::Cow::Borrowed(s.as_str()),
            Literal::Int(n) => std::borrow::Cow::Owned(n.to_string()),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Text(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Text(s)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Text(s) => write!(f, "\"{s}\""),
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// An interval with optionally unbounded sides, e.g. `2w..now` or `..1M`.
///
/// Only the two range-capable fields (`date`, `size`) accept ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    pub start: Option<Literal>,
    pub end: Option<Literal>,
}

impl Range {
    pub fn between(start: impl Into<Literal>, end: impl Into<Literal>) -> Self {
        Range {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// Bounded below, open above: `start..`.
    pub fn from_start(start: impl Into<Literal>) -> Self {
        Range {
            start: Some(start.into()),
            end: None,
        }
    }

    /// Open below, bounded above: `..end`.
    pub fn until(end: impl Into<Literal>) -> Self {
        Range {
            start: None,
            end: Some(end.into()),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        if let Some(start) = &self.start {
            write!(f, "{start} ")?;
        }
        write!(f, "..")?;
        if let Some(end) = &self.end {
            write!(f, " {end}")?;
        }
        write!(f, ")")
    }
}

/// Which connective a set-sugar node expands into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOp {
    /// Expands to `or`.
    OneOf,
    /// Expands to `and`.
    AllOf,
}

impl fmt::Display for SetOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetOp::OneOf => write!(f, "one-of"),
            SetOp::AllOf => write!(f, "all-of"),
        }
    }
}

/// Structured regex description, handed verbatim to the injected reifier.
///
/// The compiler never inspects these; the shape exists only so hosts can
/// express engine-specific pattern descriptions as data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RxForm {
    Symbol(String),
    Text(String),
    Int(i64),
    List(Vec<RxForm>),
}

impl fmt::Display for RxForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RxForm::Symbol(s) => write!(f, "{s}"),
            RxForm::Text(s) => write!(f, "\"{s}\""),
            RxForm::Int(n) => write!(f, "{n}"),
            RxForm::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// The value side of a field node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Any nested expression, most commonly a literal.
    Expr(Box<Expr>),
    /// An interval; only legal on range-capable fields.
    Range(Range),
    /// `one-of`/`all-of` sugar over the enclosing field. Must be non-empty.
    Set(SetOp, Vec<Value>),
}

impl Value {
    /// `one-of` sugar: the enclosing field OR-applied to each element.
    pub fn one_of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Set(SetOp::OneOf, values.into_iter().map(Into::into).collect())
    }

    /// `all-of` sugar: the enclosing field AND-applied to each element.
    pub fn all_of<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Set(SetOp::AllOf, values.into_iter().map(Into::into).collect())
    }
}

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        Value::Expr(Box::new(expr))
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        Value::Expr(Box::new(Expr::Literal(lit)))
    }
}

impl From<Range> for Value {
    fn from(range: Range) -> Self {
        Value::Range(range)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::from(Literal::from(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::from(Literal::from(n))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Expr(e) => write!(f, "{e}"),
            Value::Range(r) => write!(f, "{r}"),
            Value::Set(op, values) => {
                write!(f, "({op}")?;
                for v in values {
                    write!(f, " {v}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A query expression node.
///
/// The closed set of shapes the compiler accepts; anything a host wants to
/// search for is spelled with these. Logical connectives take sibling
/// lists, matching the implicit space-joined top level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// Free-text term or bare constant token.
    Literal(Literal),
    /// `(field value)` pair; the name must resolve in the field registry.
    Field { name: String, value: Value },
    /// Raw regex pattern text, compiled to `/pattern/`.
    Regex(String),
    /// Structured pattern description for the injected reifier.
    Rx(RxForm),
    /// Negation over a sibling list. Zero operands compile to nothing.
    Not(Vec<Expr>),
    Or(Vec<Expr>),
    And(Vec<Expr>),
}

impl Expr {
    pub fn text(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::Text(s.into()))
    }

    pub fn symbol(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::Symbol(s.into()))
    }

    pub fn int(n: i64) -> Self {
        Expr::Literal(Literal::Int(n))
    }

    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Expr::Field {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn regex(pattern: impl Into<String>) -> Self {
        Expr::Regex(pattern.into())
    }

    pub fn rx(form: RxForm) -> Self {
        Expr::Rx(form)
    }

    pub fn not<I: IntoIterator<Item = Expr>>(operands: I) -> Self {
        Expr::Not(operands.into_iter().collect())
    }

    pub fn or_of<I: IntoIterator<Item = Expr>>(operands: I) -> Self {
        Expr::Or(operands.into_iter().collect())
    }

    pub fn and_of<I: IntoIterator<Item = Expr>>(operands: I) -> Self {
        Expr::And(operands.into_iter().collect())
    }
}

impl From<Literal> for Expr {
    fn from(lit: Literal) -> Self {
        Expr::Literal(lit)
    }
}

impl From<&str> for Expr {
    fn from(s: &str) -> Self {
        Expr::text(s)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::int(n)
    }
}

fn write_siblings(f: &mut fmt::Formatter<'_>, tag: &str, operands: &[Expr]) -> fmt::Result {
    write!(f, "({tag}")?;
    for op in operands {
        write!(f, " {op}")?;
    }
    write!(f, ")")
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{lit}"),
            Expr::Field { name, value } => write!(f, "({name} {value})"),
            Expr::Regex(pattern) => write!(f, "(regex \"{pattern}\")"),
            Expr::Rx(form) => write!(f, "(rx {form})"),
            Expr::Not(operands) => write_siblings(f, "not", operands),
            Expr::Or(operands) => write_siblings(f, "or", operands),
            Expr::And(operands) => write_siblings(f, "and", operands),
        }
    }
}
