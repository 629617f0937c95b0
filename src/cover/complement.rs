//! Tautology checking and complementation over cube covers
//!
//! Both operations follow the unate recursive paradigm: a unate cover is
//! handled directly, a binate cover is Shannon-split on a binate variable
//! and the cofactors are handled recursively. A variable that is binate in
//! the parent is fixed in each child, so the recursion depth is bounded by
//! the cover width.
//!
//! The unate complement reduces to a minimal-column-cover problem: each
//! minimal set of "blocked" columns yields one cube of the complement.

use super::{Cover, Cube};
use crate::mincov::{minimal_column_covers, Matrix};
use log::debug;

impl Cover {
    /// True iff the cover evaluates to true on every assignment
    ///
    /// A unate cover is a tautology iff it contains the all-dash cube; a
    /// binate cover is a tautology iff both Shannon cofactors of its first
    /// binate variable are. The empty cover is not a tautology.
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::Cover;
    ///
    /// let cover = Cover::from_strings(["a", "b"], ["1-", "-1", "00"]).unwrap();
    /// assert!(cover.is_tautology());
    /// ```
    pub fn is_tautology(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        match self.find_binate() {
            None => {
                let universe = Cube::dashes(self.width());
                self.cubes().contains(&universe)
            }
            Some(variable) => {
                self.cofactor(variable, false).is_tautology()
                    && self.cofactor(variable, true).is_tautology()
            }
        }
    }

    /// The complement cover: true exactly where this cover is false
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::Cover;
    ///
    /// let cover = Cover::from_strings(["a", "b"], ["11"]).unwrap();
    /// let complement = cover.complement();
    /// assert_eq!(complement.to_string(), "a,b,0-,-0");
    /// ```
    pub fn complement(&self) -> Cover {
        if self.is_empty() {
            let mut result = Cover::with_variables(self.variables().to_vec());
            result.cubes.push(Cube::dashes(self.width()));
            return result;
        }
        match self.find_binate() {
            None => self.complement_unate(),
            Some(variable) => self.complement_binate(variable),
        }
    }

    /// Complement of a unate cover via minimal column covers
    ///
    /// Row `i`, column `j` of the mask matrix is 1 iff cube `i` constrains
    /// variable `j`. A minimal column cover picks, for every cube, at least
    /// one constrained variable; fixing each picked variable to the polarity
    /// the cover never satisfies produces one cube of the complement.
    fn complement_unate(&self) -> Cover {
        let mut matrix = Matrix::new(self.width());
        for cube in self.cubes() {
            matrix.push_row(cube.bits().iter().map(|b| b.is_some()).collect());
        }
        let covers = minimal_column_covers(&matrix, false, None);
        debug!(
            "complement: unate cover of {} cubes gave {} mask covers",
            self.num_cubes(),
            covers.len()
        );

        let mut result = Cover::with_variables(self.variables().to_vec());
        for columns in covers {
            let mut piece = Cube::dashes(self.width());
            for column in columns {
                let blocked = self
                    .cubes()
                    .iter()
                    .any(|cube| cube.bit(column) == Some(true));
                piece = piece.with_bit(column, Some(!blocked));
            }
            result.cubes.push(piece);
        }
        result.uniq();
        result
    }

    /// Complement of a binate cover by Shannon expansion on `variable`
    fn complement_binate(&self, variable: usize) -> Cover {
        debug!(
            "complement: splitting on binate variable {} ({})",
            variable,
            self.variables()[variable]
        );
        let negative = self.cofactor(variable, false).complement();
        let positive = self.cofactor(variable, true).complement();

        let mut result = Cover::with_variables(self.variables().to_vec());
        for cube in negative.cubes() {
            if cube.bit(variable) != Some(true) {
                result.cubes.push(cube.with_bit(variable, Some(false)));
            }
        }
        for cube in positive.cubes() {
            if cube.bit(variable) != Some(false) {
                result.cubes.push(cube.with_bit(variable, Some(true)));
            }
        }
        result.uniq();
        result
    }
}
