//! The expression compiler: tree in, query string out.
//!
//! Dispatch follows a fixed precedence over the node shapes: range fields,
//! priority, flags, generic fields, regex forms, logical connectives, bare
//! literals. Set-sugar (`one-of`/`all-of`) rewrites into the matching
//! connective over per-element field compilations, so every element is
//! validated exactly as if it had been written out longhand.
//!
//! Compilation is all-or-nothing: the first invalid node aborts the call
//! with an error naming the offending field and value.

use std::borrow::Cow;

use crate::expr::{Expr, Literal, Range, RxForm, SetOp, Value};
use crate::fields::{self, FieldDef, FieldKind};
use crate::{Error, Result};

/// Turns a structured pattern description into regex source text.
///
/// Supplied by the host's regex-building facility; the compiler treats it
/// as a black box and wraps whatever it returns in `/` delimiters. Any
/// `Fn(&RxForm) -> String` closure qualifies.
pub trait Reifier {
    fn reify(&self, form: &RxForm) -> String;
}

impl<F> Reifier for F
where
    F: Fn(&RxForm) -> String,
{
    fn reify(&self, form: &RxForm) -> String {
        self(form)
    }
}

/// Compile a sibling list of expressions with no reifier configured.
///
/// Trees containing [`Expr::Rx`] need [`Compiler::with_reifier`]; raw
/// [`Expr::Regex`] patterns work here.
///
/// # Example
/// ```
/// use mailq::{Expr, compile};
///
/// let query = compile(&[
///     Expr::field("subject", "rust meetup"),
///     Expr::not([Expr::field("flag", Expr::symbol("trashed"))]),
/// ])?;
/// assert_eq!(query, r#"subject:"rust meetup" (not flag:trashed)"#);
/// # Ok::<(), mailq::Error>(())
/// ```
pub fn compile(exprs: &[Expr]) -> Result<String> {
    Compiler::new().compile(exprs)
}

/// The expression compiler.
///
/// Pure and reentrant; holds no state beyond an optional reifier
/// reference, so a single value can be shared across threads.
#[derive(Clone, Copy, Default)]
pub struct Compiler<'r> {
    reifier: Option<&'r dyn Reifier>,
}

impl<'r> Compiler<'r> {
    pub fn new() -> Self {
        Compiler { reifier: None }
    }

    /// Inject the regex reifier used for [`Expr::Rx`] nodes.
    pub fn with_reifier(mut self, reifier: &'r dyn Reifier) -> Self {
        self.reifier = Some(reifier);
        self
    }

    /// Compile a sibling list, joining the parts with single spaces.
    ///
    /// The space join is how the engine expresses implicit top-level
    /// conjunction; the same rule applies to operand lists inside `not`.
    pub fn compile(&self, exprs: &[Expr]) -> Result<String> {
        let parts = exprs
            .iter()
            .map(|e| self.expr(e))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(" "))
    }

    fn expr(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Field { name, value } => {
                let def =
                    fields::lookup(name).ok_or_else(|| Error::UnknownField(name.clone()))?;
                self.field(def, value)
            }
            Expr::Regex(pattern) => Ok(format!("/{pattern}/")),
            Expr::Rx(form) => {
                let reifier = self.reifier.ok_or(Error::MissingReifier)?;
                Ok(format!("/{}/", reifier.reify(form)))
            }
            Expr::Not(operands) => {
                if operands.is_empty() {
                    Ok(String::new())
                } else {
                    Ok(format!("(not {})", self.compile(operands)?))
                }
            }
            Expr::Or(operands) => self.connective(" or ", operands),
            Expr::And(operands) => self.connective(" and ", operands),
            Expr::Literal(lit) => Ok(quote(lit).into_owned()),
        }
    }

    fn connective(&self, joiner: &str, operands: &[Expr]) -> Result<String> {
        if operands.is_empty() {
            return Ok(String::new());
        }
        let parts = operands
            .iter()
            .map(|e| self.expr(e))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", parts.join(joiner)))
    }

    /// Compile one `(field value)` pair. `def` is already resolved, so the
    /// canonical name is what gets emitted regardless of the alias used.
    fn field(&self, def: &FieldDef, value: &Value) -> Result<String> {
        match value {
            Value::Set(op, elements) => self.expand_set(def, *op, elements),
            Value::Range(range) => {
                if def.kind == FieldKind::Range {
                    Ok(range_str(def.name, range))
                } else {
                    Err(Error::InvalidRangeShape {
                        field: def.name.to_string(),
                        value: range.to_string(),
                    })
                }
            }
            Value::Expr(expr) => self.field_value(def, expr),
        }
    }

    /// Rewrite `(field (one-of v1 .. vn))` into the `or`-joined compilation
    /// of `(field v1) .. (field vn)`, and `all-of` into `and`. Each element
    /// goes back through full field compilation, which re-applies flag,
    /// priority, and range validation per element.
    fn expand_set(&self, def: &FieldDef, op: SetOp, elements: &[Value]) -> Result<String> {
        if elements.is_empty() {
            return Err(Error::EmptySugarSet {
                field: def.name.to_string(),
                op,
            });
        }
        let joiner = match op {
            SetOp::OneOf => " or ",
            SetOp::AllOf => " and ",
        };
        let parts = elements
            .iter()
            .map(|v| self.field(def, v))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", parts.join(joiner)))
    }

    /// Format `field:value` for a non-range, non-set value.
    ///
    /// Flag and priority fields only take tokens from their closed
    /// vocabularies here. Generic fields take a quoted literal, or any
    /// nested expression compiled through the full compiler (which is what
    /// permits `(subject (regex ".."))`).
    fn field_value(&self, def: &FieldDef, value: &Expr) -> Result<String> {
        match def.kind {
            FieldKind::Flag | FieldKind::Priority => {
                let Expr::Literal(lit) = value else {
                    return Err(Error::UnrecognizedExpression(value.to_string()));
                };
                let token = lit.as_plain();
                let known = match def.kind {
                    FieldKind::Flag => fields::flag(&token).is_some(),
                    _ => fields::is_priority(&token),
                };
                if !known {
                    return Err(Error::InvalidFlagOrPriority {
                        field: def.name.to_string(),
                        value: token.into_owned(),
                    });
                }
                Ok(format!("{}:{}", def.name, token))
            }
            FieldKind::Range => {
                // Range fields take intervals or set sugar, nothing else.
                Err(Error::InvalidRangeShape {
                    field: def.name.to_string(),
                    value: value.to_string(),
                })
            }
            FieldKind::Generic => match value {
                Expr::Literal(lit) => Ok(format!("{}:{}", def.name, quote(lit))),
                other => Ok(format!("{}:{}", def.name, self.expr(other)?)),
            },
        }
    }
}

/// Format `field:start..end`; an unbounded side renders as nothing.
fn range_str(name: &str, range: &Range) -> String {
    let side = |s: &Option<Literal>| match s {
        Some(lit) => lit.as_plain().into_owned(),
        None => String::new(),
    };
    format!("{}:{}..{}", name, side(&range.start), side(&range.end))
}

/// Wrap text containing whitespace in double quotes; everything else
/// renders plain.
fn quote(lit: &Literal) -> Cow<'_, str> {
    match lit {
        Literal::Text(s) if s.chars().any(char::is_whitespace) => {
            Cow::Owned(format!("\"{s}\""))
        }
        _ => lit.as_plain(),
    }
}
