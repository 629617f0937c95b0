//! Boolean expression trees
//!
//! [`BoolExpr`] is an immutable, cheaply clonable expression tree over
//! `{and, or, not, variable, constant}`. Subtrees are shared through `Arc`,
//! so the builder methods never copy their operands.
//!
//! Expressions are the outer interface of the minimizer: the parser produces
//! them, [`crate::qm`] consumes and emits them, and the canonical-form
//! transformations in [`forms`] rewrite them.

mod cover;
mod display;
mod error;
mod eval;
mod forms;
mod parser;

pub use error::ExpressionParseError;
pub use eval::TruthTable;

use std::collections::BTreeSet;
use std::ops::{Add, Mul, Not};
use std::sync::Arc;

/// An immutable Boolean expression tree
///
/// # Examples
///
/// ```
/// use mccluskey_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let expr = a.and(&b.not());
/// assert_eq!(expr.to_string(), "a * ~b");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BoolExpr {
    inner: Arc<BoolExprInner>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BoolExprInner {
    /// A named variable
    Variable(Arc<str>),
    /// Logical AND of two expressions
    And(BoolExpr, BoolExpr),
    /// Logical OR of two expressions
    Or(BoolExpr, BoolExpr),
    /// Logical NOT of an expression
    Not(BoolExpr),
    /// A constant value
    Constant(bool),
}

impl BoolExpr {
    fn wrap(inner: BoolExprInner) -> Self {
        BoolExpr {
            inner: Arc::new(inner),
        }
    }

    pub(crate) fn inner(&self) -> &BoolExprInner {
        &self.inner
    }

    /// A variable leaf with the given name
    pub fn variable(name: &str) -> Self {
        Self::wrap(BoolExprInner::Variable(Arc::from(name)))
    }

    /// A constant leaf
    pub fn constant(value: bool) -> Self {
        Self::wrap(BoolExprInner::Constant(value))
    }

    /// The conjunction of this expression and `other`
    pub fn and(&self, other: &BoolExpr) -> BoolExpr {
        Self::wrap(BoolExprInner::And(self.clone(), other.clone()))
    }

    /// The disjunction of this expression and `other`
    pub fn or(&self, other: &BoolExpr) -> BoolExpr {
        Self::wrap(BoolExprInner::Or(self.clone(), other.clone()))
    }

    /// The negation of this expression
    pub fn not(&self) -> BoolExpr {
        Self::wrap(BoolExprInner::Not(self.clone()))
    }

    /// The constant value of this leaf, if it is one
    pub fn as_constant(&self) -> Option<bool> {
        match self.inner.as_ref() {
            BoolExprInner::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Every variable name occurring in the tree, sorted
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut variables = BTreeSet::new();
        self.collect_variables_into(&mut variables);
        variables
    }

    fn collect_variables_into(&self, variables: &mut BTreeSet<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                variables.insert(Arc::clone(name));
            }
            BoolExprInner::And(left, right) | BoolExprInner::Or(left, right) => {
                left.collect_variables_into(variables);
                right.collect_variables_into(variables);
            }
            BoolExprInner::Not(expr) => expr.collect_variables_into(variables),
            BoolExprInner::Constant(_) => {}
        }
    }
}

/// The conjunction of a non-empty clause list
pub(crate) fn conjunction(clauses: Vec<BoolExpr>) -> BoolExpr {
    clauses
        .into_iter()
        .reduce(|acc, clause| acc.and(&clause))
        .expect("conjunction of an empty clause list")
}

/// The disjunction of a non-empty clause list
pub(crate) fn disjunction(clauses: Vec<BoolExpr>) -> BoolExpr {
    clauses
        .into_iter()
        .reduce(|acc, clause| acc.or(&clause))
        .expect("disjunction of an empty clause list")
}

impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}

#[cfg(test)]
mod tests;
