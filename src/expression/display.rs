//! Display and Debug formatting for boolean expressions
//!
//! Expressions print with minimal parentheses in standard boolean algebra
//! notation: `*` for AND, `+` for OR, `~` for NOT, `1`/`0` for constants.

use super::{BoolExpr, BoolExprInner};
use std::fmt;

/// Binding strength, loosest first: OR, then AND, then NOT and atoms.
const PREC_OR: u8 = 0;
const PREC_AND: u8 = 1;
const PREC_NOT: u8 = 2;

impl BoolExpr {
    fn fmt_with_precedence(&self, f: &mut fmt::Formatter<'_>, parent: u8) -> fmt::Result {
        match self.inner() {
            BoolExprInner::Variable(name) => write!(f, "{}", name),
            BoolExprInner::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            BoolExprInner::And(left, right) => {
                let parens = parent > PREC_AND;
                if parens {
                    write!(f, "(")?;
                }
                left.fmt_with_precedence(f, PREC_AND)?;
                write!(f, " * ")?;
                right.fmt_with_precedence(f, PREC_AND)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
            BoolExprInner::Or(left, right) => {
                let parens = parent > PREC_OR;
                if parens {
                    write!(f, "(")?;
                }
                left.fmt_with_precedence(f, PREC_OR)?;
                write!(f, " + ")?;
                right.fmt_with_precedence(f, PREC_OR)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
            BoolExprInner::Not(expr) => {
                write!(f, "~")?;
                expr.fmt_with_precedence(f, PREC_NOT)
            }
        }
    }
}

/// Display formatting with minimal parentheses
///
/// # Examples
///
/// ```
/// use mccluskey_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let c = BoolExpr::variable("c");
/// let expr = a.and(&b).or(&c);
///
/// assert_eq!(expr.to_string(), "a * b + c");
/// ```
impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_precedence(f, PREC_OR)
    }
}

impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
