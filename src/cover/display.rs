//! Textual rendering of cubes and covers
//!
//! A cube prints as its bit-string over `{0, 1, -}`. A cover prints as its
//! comma-joined variable list followed by a comma and the comma-joined cube
//! strings, e.g. `a,b,c,10-,-01`.

use super::{Cover, Cube};
use itertools::Itertools;
use std::fmt;

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            let c = match bit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({})", self)
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variables().iter().format(","))?;
        for cube in self.cubes() {
            write!(f, ",{}", cube)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cover")
            .field("variables", &self.variables().iter().join(","))
            .field("cubes", &self.cubes().iter().join(","))
            .finish()
    }
}
