//! Conversions between expressions and covers
//!
//! An expression becomes a cover by enumerating its on-set minterms over its
//! canonical variable order; a cover becomes an expression by emitting one
//! conjunction per cube under a disjunction.

use super::{conjunction, disjunction, BoolExpr};
use crate::cover::{Cover, Cube};

impl Cover {
    /// The on-set minterm cover of an expression
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::{BoolExpr, Cover};
    ///
    /// let expr = BoolExpr::parse("a * ~b").unwrap();
    /// let cover = Cover::from_expr(&expr);
    /// assert_eq!(cover.to_string(), "a,b,10");
    /// ```
    pub fn from_expr(expr: &BoolExpr) -> Cover {
        let variables = expr.variables();
        let minterms = expr.on_set_minterms(&variables);
        Cover::from_parts(variables, minterms)
    }

    /// Render the cover as a sum-of-products expression
    ///
    /// Clauses are ordered by cube bit-string with `1`s first, so positive
    /// literals lead the output. The empty cover is the constant `0`; a
    /// cover containing the all-dash cube is the constant `1`.
    pub fn to_expr(&self) -> BoolExpr {
        if self.is_empty() {
            return BoolExpr::constant(false);
        }
        let mut cubes = self.cubes().to_vec();
        cubes.sort_by(|a, b| b.cmp(a));
        cubes.dedup();
        let mut clauses = Vec::with_capacity(cubes.len());
        for cube in &cubes {
            if cube.dash_count() == cube.width() {
                return BoolExpr::constant(true);
            }
            clauses.push(cube_to_conjunction(cube, self));
        }
        disjunction(clauses)
    }
}

/// One conjunction per non-dash cube position, in variable order
fn cube_to_conjunction(cube: &Cube, cover: &Cover) -> BoolExpr {
    let literals = cube
        .bits()
        .iter()
        .enumerate()
        .filter_map(|(index, bit)| {
            bit.map(|value| {
                let literal = BoolExpr::variable(&cover.variables()[index]);
                if value {
                    literal
                } else {
                    literal.not()
                }
            })
        })
        .collect();
    conjunction(literals)
}
