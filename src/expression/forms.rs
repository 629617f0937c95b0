//! Canonical normal forms
//!
//! `std_dij` rewrites an expression as its canonical disjunctive form (the
//! sum of its on-set minterms); `std_conj` as its canonical conjunctive form
//! (the product of its off-set maxterms). Degenerate inputs fold to the
//! constants `1` and `0`.

use super::{conjunction, disjunction, BoolExpr};
use std::collections::HashMap;

impl BoolExpr {
    /// The canonical disjunctive form: one conjunction per on-set minterm
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("a + b").unwrap();
    /// assert_eq!(
    ///     expr.std_dij().to_string(),
    ///     "~a * b + a * ~b + a * b"
    /// );
    /// ```
    pub fn std_dij(&self) -> BoolExpr {
        let variables = self.variables();
        if variables.is_empty() {
            return BoolExpr::constant(self.evaluate(&HashMap::new()));
        }
        let mut clauses = Vec::new();
        self.for_each_assignment(&variables, |bits, value| {
            if value {
                let literals = variables
                    .iter()
                    .zip(bits.iter())
                    .map(|(variable, &bit)| {
                        let literal = BoolExpr::variable(variable);
                        if bit {
                            literal
                        } else {
                            literal.not()
                        }
                    })
                    .collect();
                clauses.push(conjunction(literals));
            }
        });
        if clauses.is_empty() {
            return BoolExpr::constant(false);
        }
        disjunction(clauses)
    }

    /// The canonical conjunctive form: one disjunction per off-set maxterm
    ///
    /// Each maxterm is the clause that excludes one falsifying assignment:
    /// a variable appears positive where the assignment holds `0`, negated
    /// where it holds `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("a * b").unwrap();
    /// assert_eq!(
    ///     expr.std_conj().to_string(),
    ///     "(a + b) * (a + ~b) * (~a + b)"
    /// );
    /// ```
    pub fn std_conj(&self) -> BoolExpr {
        let variables = self.variables();
        if variables.is_empty() {
            return BoolExpr::constant(self.evaluate(&HashMap::new()));
        }
        let mut clauses = Vec::new();
        self.for_each_assignment(&variables, |bits, value| {
            if !value {
                let literals = variables
                    .iter()
                    .zip(bits.iter())
                    .map(|(variable, &bit)| {
                        let literal = BoolExpr::variable(variable);
                        if bit {
                            literal.not()
                        } else {
                            literal
                        }
                    })
                    .collect();
                clauses.push(disjunction(literals));
            }
        });
        if clauses.is_empty() {
            return BoolExpr::constant(true);
        }
        conjunction(clauses)
    }
}
