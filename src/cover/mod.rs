//! Covers: ordered cube lists over a shared variable list
//!
//! A [`Cover`] is a sum-of-products representation of a Boolean function:
//! an ordered list of [`Cube`]s, all of the same width, over an ordered list
//! of variable names. Cube order is deterministic for a given construction
//! but carries no meaning; duplicates are allowed until [`Cover::uniq`].
//!
//! Beyond the set operations (`unite`, `subtract`), the cover algebra
//! provides Shannon cofactors, unate detection and, in [`complement`], the
//! unate recursive tautology check and complementation.

mod complement;
mod cubes;
mod display;
mod error;

pub use cubes::{Cube, Minterms};
pub use error::{CoverError, CoverParseError, CubeParseError};

use std::sync::Arc;

/// An ordered list of cubes over a shared, ordered variable list
///
/// # Examples
///
/// ```
/// use mccluskey_logic::{Cover, Cube};
///
/// let mut cover = Cover::new(["a", "b", "c"]);
/// cover.push(Cube::parse("10-").unwrap()).unwrap();
/// cover.push(Cube::parse("-01").unwrap()).unwrap();
/// assert_eq!(cover.to_string(), "a,b,c,10-,-01");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Cover {
    variables: Vec<Arc<str>>,
    cubes: Vec<Cube>,
}

impl Cover {
    /// Create an empty cover over the given variables
    pub fn new<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Cover {
            variables: variables
                .into_iter()
                .map(|s| Arc::from(s.as_ref()))
                .collect(),
            cubes: Vec::new(),
        }
    }

    /// Create an empty cover sharing an already-interned variable list
    pub fn with_variables(variables: Vec<Arc<str>>) -> Self {
        Cover {
            variables,
            cubes: Vec::new(),
        }
    }

    /// Assemble a cover from pre-validated parts
    pub(crate) fn from_parts(variables: Vec<Arc<str>>, cubes: Vec<Cube>) -> Self {
        let width = variables.len();
        for cube in &cubes {
            assert_eq!(
                cube.width(),
                width,
                "cube width mismatch: {} vs {}",
                cube.width(),
                width
            );
        }
        Cover { variables, cubes }
    }

    /// Parse the textual cover form, the inverse of the `Display` rendering
    ///
    /// The input is a comma-joined variable list followed by the cube
    /// strings, e.g. `a,b,c,10-,-01`. The split between the two sections is
    /// the first one where every remaining token is a `{0,1,-}` string as
    /// wide as the variable list, so an ambiguous input (variables named
    /// like cubes) resolves to the reading with the most cubes. At least
    /// one variable is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use mccluskey_logic::Cover;
    ///
    /// let cover = Cover::parse("a,b,c,10-,-01").unwrap();
    /// assert_eq!(cover.width(), 3);
    /// assert_eq!(cover.num_cubes(), 2);
    /// assert_eq!(cover.to_string(), "a,b,c,10-,-01");
    /// ```
    pub fn parse(input: &str) -> Result<Self, CoverParseError> {
        let tokens: Vec<&str> = input.split(',').collect();
        'splits: for split in 1..=tokens.len() {
            let (variables, cube_strings) = tokens.split_at(split);
            if variables.iter().any(|v| v.is_empty()) {
                // Every larger split keeps the empty token as a variable.
                break;
            }
            let mut cubes = Vec::with_capacity(cube_strings.len());
            for cube in cube_strings {
                match Cube::parse(cube) {
                    Ok(parsed) if parsed.width() == split => cubes.push(parsed),
                    _ => continue 'splits,
                }
            }
            let mut cover = Cover::new(variables.iter().copied());
            cover.cubes = cubes;
            return Ok(cover);
        }
        Err(CoverParseError::MalformedCover {
            input: input.to_string(),
        })
    }

    /// Build a cover from textual cube strings, for tests and diagnostics
    ///
    /// Panics if a cube's width differs from the variable count.
    pub fn from_strings<I, S, C, T>(variables: I, cubes: C) -> Result<Self, CubeParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        C: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut cover = Cover::new(variables);
        for cube in cubes {
            let cube = Cube::parse(cube.as_ref())?;
            assert_eq!(
                cube.width(),
                cover.width(),
                "cube width mismatch: {} vs {}",
                cube.width(),
                cover.width()
            );
            cover.cubes.push(cube);
        }
        Ok(cover)
    }

    /// Number of variables (cube width)
    pub fn width(&self) -> usize {
        self.variables.len()
    }

    /// The variable list, in bit-position order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The cubes, in construction order
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Number of cubes, duplicates included
    pub fn num_cubes(&self) -> usize {
        self.cubes.len()
    }

    /// True iff the cover holds no cubes
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    /// Append a cube, checking its width against the cover's
    pub fn push(&mut self, cube: Cube) -> Result<(), CoverError> {
        if cube.width() != self.width() {
            return Err(CoverError::WidthMismatch {
                expected: self.width(),
                actual: cube.width(),
            });
        }
        self.cubes.push(cube);
        Ok(())
    }

    /// Set union: the cubes of both covers, duplicates preserved
    pub fn unite(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_variables(other)?;
        let mut cubes = self.cubes.clone();
        cubes.extend(other.cubes.iter().cloned());
        Ok(Cover {
            variables: self.variables.clone(),
            cubes,
        })
    }

    /// Set difference: drops every cube of `self` equal to a cube of `other`
    pub fn subtract(&self, other: &Cover) -> Result<Cover, CoverError> {
        self.check_variables(other)?;
        let cubes = self
            .cubes
            .iter()
            .filter(|cube| !other.cubes.contains(cube))
            .cloned()
            .collect();
        Ok(Cover {
            variables: self.variables.clone(),
            cubes,
        })
    }

    /// Drop duplicate cubes, keeping first occurrences in order
    pub fn uniq(&mut self) {
        let mut seen: Vec<Cube> = Vec::with_capacity(self.cubes.len());
        self.cubes.retain(|cube| {
            if seen.contains(cube) {
                false
            } else {
                seen.push(cube.clone());
                true
            }
        });
    }

    /// The Shannon cofactor with respect to `variable = value`
    ///
    /// Cubes whose bit at `variable` equals `value` have that bit raised to
    /// `-`; cubes holding the opposite value are dropped; cubes already
    /// indifferent are kept unchanged. The result is deduplicated.
    pub fn cofactor(&self, variable: usize, value: bool) -> Cover {
        let mut result = Cover::with_variables(self.variables.clone());
        for cube in &self.cubes {
            match cube.bit(variable) {
                Some(b) if b == value => result.cubes.push(cube.with_bit(variable, None)),
                Some(_) => {}
                None => result.cubes.push(cube.clone()),
            }
        }
        result.uniq();
        result
    }

    /// The generalized Shannon cofactor with respect to a cube
    ///
    /// Every position where `part` is non-dash is cofactored at once: an
    /// agreeing bit is raised to `-`, a conflicting bit drops the cube.
    pub fn cofactor_cube(&self, part: &Cube) -> Cover {
        assert_eq!(
            part.width(),
            self.width(),
            "cube width mismatch: {} vs {}",
            part.width(),
            self.width()
        );
        let mut result = Cover::with_variables(self.variables.clone());
        'cubes: for cube in &self.cubes {
            let mut bits = cube.bits().to_vec();
            for index in 0..self.width() {
                if let Some(p) = part.bit(index) {
                    match cube.bit(index) {
                        Some(b) if b == p => bits[index] = None,
                        Some(_) => continue 'cubes,
                        None => {}
                    }
                }
            }
            result.cubes.push(Cube::from_bits(bits));
        }
        result.uniq();
        result
    }

    /// Find the first binate variable, or `None` when the cover is unate
    ///
    /// Walks the cubes accumulating a merged signature; the first position
    /// seen with both a `0` and a `1` somewhere in its column identifies the
    /// binate variable.
    pub fn find_binate(&self) -> Option<usize> {
        let mut signature: Vec<Option<bool>> = vec![None; self.width()];
        for cube in &self.cubes {
            for index in 0..self.width() {
                if let Some(b) = cube.bit(index) {
                    match signature[index] {
                        Some(seen) if seen != b => return Some(index),
                        _ => signature[index] = Some(b),
                    }
                }
            }
        }
        None
    }

    /// True iff no variable occurs in both polarities
    pub fn is_unate(&self) -> bool {
        self.find_binate().is_none()
    }

    fn check_variables(&self, other: &Cover) -> Result<(), CoverError> {
        if self.variables != other.variables {
            return Err(CoverError::VariableMismatch {
                left: self.variables.iter().map(|v| v.to_string()).collect(),
                right: other.variables.iter().map(|v| v.to_string()).collect(),
            });
        }
        Ok(())
    }
}
