//! Evaluation, minterm enumeration and truth tables
//!
//! The canonical variable order of an expression is its sorted variable
//! list; it induces the bit positions of every minterm the expression
//! produces. Assignments are enumerated with the first variable as the most
//! significant bit, so the emitted minterm bit-strings come out sorted.

use super::{BoolExpr, BoolExprInner};
use crate::cover::Cube;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression under a variable assignment
    ///
    /// Variables missing from the assignment read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("a * ~b").unwrap();
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assert!(expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self.inner() {
            BoolExprInner::Variable(name) => assignment.get(name).copied().unwrap_or(false),
            BoolExprInner::And(left, right) => {
                left.evaluate(assignment) && right.evaluate(assignment)
            }
            BoolExprInner::Or(left, right) => {
                left.evaluate(assignment) || right.evaluate(assignment)
            }
            BoolExprInner::Not(expr) => !expr.evaluate(assignment),
            BoolExprInner::Constant(value) => *value,
        }
    }

    /// The variable list in canonical (sorted) order
    pub fn variables(&self) -> Vec<Arc<str>> {
        self.collect_variables().into_iter().collect()
    }

    /// The on-set of the expression as minterm cubes over `variables`
    ///
    /// Assignments are enumerated with `variables[0]` as the most
    /// significant bit, so the result is sorted by bit-string.
    pub fn on_set_minterms(&self, variables: &[Arc<str>]) -> Vec<Cube> {
        let mut minterms = Vec::new();
        self.for_each_assignment(variables, |bits, value| {
            if value {
                minterms.push(Cube::from_bits(bits.iter().map(|&b| Some(b)).collect()));
            }
        });
        minterms
    }

    /// True iff both expressions agree on every assignment
    ///
    /// The comparison ranges over the union of both variable lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::BoolExpr;
    ///
    /// let left = BoolExpr::parse("a * b").unwrap();
    /// let right = BoolExpr::parse("b * a").unwrap();
    /// assert!(left.equivalent_to(&right));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        let mut variables = self.collect_variables();
        variables.extend(other.collect_variables());
        let variables: Vec<Arc<str>> = variables.into_iter().collect();
        self.on_set_minterms(&variables) == other.on_set_minterms(&variables)
    }

    /// The full truth table of the expression
    pub fn truth_table(&self) -> TruthTable {
        let variables = self.variables();
        let mut rows = Vec::new();
        self.for_each_assignment(&variables, |bits, value| {
            rows.push((bits.to_vec(), value));
        });
        TruthTable { variables, rows }
    }

    /// Visit every assignment of `variables` in ascending bit-string order
    pub(crate) fn for_each_assignment<F>(&self, variables: &[Arc<str>], mut visit: F)
    where
        F: FnMut(&[bool], bool),
    {
        let width = variables.len();
        let mut assignment: HashMap<Arc<str>, bool> = HashMap::with_capacity(width);
        let mut bits = vec![false; width];
        for selector in 0..(1u64 << width) {
            for (index, variable) in variables.iter().enumerate() {
                let value = (selector >> (width - 1 - index)) & 1 == 1;
                assignment.insert(Arc::clone(variable), value);
                bits[index] = value;
            }
            visit(&bits, self.evaluate(&assignment));
        }
    }
}

/// A rendered truth table: one row per assignment, value column last
///
/// # Examples
///
/// ```
/// use mccluskey_logic::BoolExpr;
///
/// let table = BoolExpr::parse("a * b").unwrap().truth_table();
/// let rendered = table.to_string();
/// assert!(rendered.starts_with("a b | f\n"));
/// assert!(rendered.ends_with("1 1 | 1\n"));
/// ```
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// The variable list heading the columns
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The assignment rows with their function values
    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variables.is_empty() {
            // A constant function has a single valueless row.
            for (_, value) in &self.rows {
                writeln!(f, "{}", if *value { '1' } else { '0' })?;
            }
            return Ok(());
        }
        writeln!(f, "{} | f", self.variables.iter().format(" "))?;
        for (bits, value) in &self.rows {
            writeln!(
                f,
                "{} | {}",
                bits.iter().map(|&b| if b { '1' } else { '0' }).format(" "),
                if *value { '1' } else { '0' }
            )?;
        }
        Ok(())
    }
}
