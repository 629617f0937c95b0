//! Minimal column covers over a 0/1 incidence matrix
//!
//! Given a matrix whose rows must each be "covered" by at least one selected
//! column holding a `1`, [`minimal_column_covers`] finds either one smallest
//! cover or every minimal cover. The algorithm is the classical reduction
//! pipeline: essential columns, covered-row deletion, dominating-row removal
//! to a fixed point, then a Petrick product-of-sums expansion with
//! absorption.
//!
//! The expansion is worst-case exponential; a cooperative deadline bounds it
//! when a single smallest cover is requested.

use log::debug;
use std::collections::BTreeSet;
use std::fmt;
use std::io;
use std::time::Instant;

/// Errors raised when parsing an incidence matrix from its wire form
///
/// The wire form is an array of equal-length strings over `{0, 1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixParseError {
    /// A row contains a character other than `0` or `1`
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Row index of the offending character
        row: usize,
        /// Column index of the offending character
        column: usize,
    },
    /// A row's length differs from the first row's
    RaggedRow {
        /// Row index of the short or long row
        row: usize,
        /// Expected row length
        expected: usize,
        /// Actual row length
        actual: usize,
    },
}

impl fmt::Display for MatrixParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixParseError::InvalidCharacter {
                character,
                row,
                column,
            } => write!(
                f,
                "Invalid matrix character '{}' at row {}, column {}. Expected '0' or '1'.",
                character, row, column
            ),
            MatrixParseError::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "Matrix row {} has length {} but earlier rows have length {}",
                row, actual, expected
            ),
        }
    }
}

impl std::error::Error for MatrixParseError {}

impl From<MatrixParseError> for io::Error {
    fn from(err: MatrixParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// A row-major 0/1 incidence matrix
///
/// Rows are minterms (or cubes), columns are candidate covering objects.
/// The matrix is built transiently per minimization and discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    num_columns: usize,
    rows: Vec<Vec<bool>>,
}

impl Matrix {
    /// Create an empty matrix with the given column count
    pub fn new(num_columns: usize) -> Self {
        Matrix {
            num_columns,
            rows: Vec::new(),
        }
    }

    /// Parse the wire form: equal-length strings over `{0, 1}`
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::mincov::Matrix;
    ///
    /// let matrix = Matrix::parse_rows(&["110", "101", "011"]).unwrap();
    /// assert_eq!(matrix.num_rows(), 3);
    /// assert_eq!(matrix.num_columns(), 3);
    /// ```
    pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MatrixParseError> {
        let num_columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut matrix = Matrix::new(num_columns);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_columns {
                return Err(MatrixParseError::RaggedRow {
                    row: row_index,
                    expected: num_columns,
                    actual: row.len(),
                });
            }
            let mut bits = Vec::with_capacity(num_columns);
            for (column, character) in row.chars().enumerate() {
                match character {
                    '0' => bits.push(false),
                    '1' => bits.push(true),
                    _ => {
                        return Err(MatrixParseError::InvalidCharacter {
                            character,
                            row: row_index,
                            column,
                        })
                    }
                }
            }
            matrix.rows.push(bits);
        }
        Ok(matrix)
    }

    /// Append a row; its length must equal the column count
    pub fn push_row(&mut self, row: Vec<bool>) {
        assert_eq!(
            row.len(),
            self.num_columns,
            "matrix row length mismatch: {} vs {}",
            row.len(),
            self.num_columns
        );
        self.rows.push(row);
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }
}

/// Find minimal column covers of `matrix`
///
/// With `smallest` set, returns a single cover of minimum cardinality
/// (ties broken by order of appearance in the Petrick expansion). Otherwise
/// returns every minimal cover, each extended with the essential columns.
/// Covers are sorted lists of column indices.
///
/// The optional `deadline` bounds the Petrick expansion when `smallest` is
/// set: on expiry the best product term found so far is returned. An
/// uncoverable matrix (a row with no `1` that no essential column deletes)
/// yields no covers at all.
///
/// # Examples
///
/// ```
/// use mccluskey_logic::mincov::{minimal_column_covers, Matrix};
///
/// let matrix = Matrix::parse_rows(&["110", "101", "011"]).unwrap();
/// let covers = minimal_column_covers(&matrix, true, None);
/// assert_eq!(covers, vec![vec![0, 1]]);
/// ```
pub fn minimal_column_covers(
    matrix: &Matrix,
    smallest: bool,
    deadline: Option<Instant>,
) -> Vec<Vec<usize>> {
    // A column is essential when some row's sole 1 lies in it.
    let mut essentials: BTreeSet<usize> = BTreeSet::new();
    for row in &matrix.rows {
        let mut ones = row.iter().enumerate().filter(|(_, &b)| b);
        if let (Some((column, _)), None) = (ones.next(), ones.next()) {
            essentials.insert(column);
        }
    }

    // Rows covered by an essential column are already satisfied.
    let mut rows: Vec<Vec<bool>> = matrix
        .rows
        .iter()
        .filter(|row| !essentials.iter().any(|&c| row[c]))
        .cloned()
        .collect();

    reduce_dominance(&mut rows);
    debug!(
        "mincov: {} essential columns, {} rows after reduction",
        essentials.len(),
        rows.len()
    );

    // Petrick: the reduced problem is a product of per-row column sums;
    // distribute it into a sum of products, absorbing as we go.
    let mut terms: Vec<BTreeSet<usize>> = vec![BTreeSet::new()];
    let mut expired = false;
    for row in &rows {
        let columns: Vec<usize> = row
            .iter()
            .enumerate()
            .filter_map(|(c, &b)| b.then_some(c))
            .collect();
        if columns.is_empty() {
            // This row can never be covered.
            return Vec::new();
        }
        if smallest {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    debug!("mincov: deadline expired with {} terms", terms.len());
                    expired = true;
                    break;
                }
            }
        }
        let mut next: Vec<BTreeSet<usize>> = Vec::new();
        for term in &terms {
            for &column in &columns {
                let mut extended = term.clone();
                extended.insert(column);
                if !next.contains(&extended) {
                    next.push(extended);
                }
            }
        }
        absorb(&mut next);
        terms = next;
    }
    if expired {
        debug!("mincov: returning best-effort cover");
    }
    terms.sort_by_key(|term| term.len());

    let essentials: Vec<usize> = essentials.into_iter().collect();
    if smallest {
        let best = terms.first().cloned().unwrap_or_default();
        vec![assemble(&essentials, &best)]
    } else {
        terms
            .iter()
            .map(|term| assemble(&essentials, term))
            .collect()
    }
}

/// Delete duplicate and dominating rows until nothing changes
///
/// A row dominates another when its 1-set is a superset of the other's;
/// covering the dominated row covers the dominating one for free, so the
/// superset row is redundant. Column dominance is deliberately not applied:
/// it can drop optima when enumerating all minimal covers.
fn reduce_dominance(rows: &mut Vec<Vec<bool>>) {
    loop {
        let before = rows.len();
        let mut seen: Vec<Vec<bool>> = Vec::with_capacity(rows.len());
        rows.retain(|row| {
            if seen.contains(row) {
                false
            } else {
                seen.push(row.clone());
                true
            }
        });
        let snapshot = rows.clone();
        rows.retain(|row| {
            !snapshot
                .iter()
                .any(|other| other != row && dominates(row, other))
        });
        if rows.len() == before {
            return;
        }
    }
}

/// True iff `row` has a 1 wherever `other` does
fn dominates(row: &[bool], other: &[bool]) -> bool {
    row.iter().zip(other.iter()).all(|(&r, &o)| r || !o)
}

/// Drop every term that strictly contains another term
fn absorb(terms: &mut Vec<BTreeSet<usize>>) {
    let snapshot = terms.clone();
    terms.retain(|term| {
        !snapshot
            .iter()
            .any(|other| other != term && other.is_subset(term))
    });
}

fn assemble(essentials: &[usize], term: &BTreeSet<usize>) -> Vec<usize> {
    let mut cover: Vec<usize> = essentials.to_vec();
    cover.extend(term.iter().copied());
    cover.sort_unstable();
    cover.dedup();
    cover
}
