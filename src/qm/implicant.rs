//! Implicants and mask groups for the Quine-McCluskey merger
//!
//! An [`Implicant`] is a cube annotated with the set of original on-set
//! minterms it covers (as indices into the minterm universe fixed at the
//! start of a minimization) and a prime flag, cleared the moment the
//! implicant takes part in a successful merge.
//!
//! Implicants are bucketed by their dash pattern: only cubes with identical
//! patterns can merge, so each generation of the merger is a map from dash
//! pattern to a [`MaskGroup`].

use crate::cover::Cube;
use std::collections::BTreeSet;

/// A cube plus merge bookkeeping
#[derive(Clone, Debug)]
pub(crate) struct Implicant {
    /// The underlying product term
    pub(crate) cube: Cube,
    /// Indices of the original minterms this implicant dominates
    pub(crate) covers: BTreeSet<usize>,
    /// True until the implicant participates in a successful merge
    pub(crate) prime: bool,
}

impl Implicant {
    /// Wrap an original minterm as a generation-zero implicant
    pub(crate) fn from_minterm(cube: Cube, index: usize) -> Self {
        let mut covers = BTreeSet::new();
        covers.insert(index);
        Implicant {
            cube,
            covers,
            prime: true,
        }
    }

    /// Number of `1` bits, the sort key within a mask group
    pub(crate) fn ones(&self) -> usize {
        self.cube.ones()
    }

    /// Merge two implicants whose cubes differ in exactly one position
    ///
    /// The merged implicant covers the union of both parents' minterms and
    /// starts out prime.
    pub(crate) fn merge(&self, other: &Implicant) -> Option<Implicant> {
        let cube = self.cube.merge(&other.cube)?;
        let covers = self.covers.union(&other.covers).copied().collect();
        Some(Implicant {
            cube,
            covers,
            prime: true,
        })
    }
}

/// An ordered, duplicate-free collection of implicants sharing a dash pattern
#[derive(Clone, Debug, Default)]
pub(crate) struct MaskGroup {
    members: Vec<Implicant>,
}

impl MaskGroup {
    /// Insert unless an implicant with the same bit-string is present
    ///
    /// Two derivations of the same cube cover the same minterms, so the
    /// duplicate carries no extra information.
    pub(crate) fn insert(&mut self, implicant: Implicant) {
        if !self.members.iter().any(|m| m.cube == implicant.cube) {
            self.members.push(implicant);
        }
    }

    /// Sort by ones-count, ties by bit-string, so pair scans are deterministic
    pub(crate) fn sort_by_ones(&mut self) {
        self.members
            .sort_by(|a, b| a.ones().cmp(&b.ones()).then_with(|| a.cube.cmp(&b.cube)));
    }

    pub(crate) fn members(&self) -> &[Implicant] {
        &self.members
    }

    pub(crate) fn members_mut(&mut self) -> &mut [Implicant] {
        &mut self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn implicant(bits: &str, index: usize) -> Implicant {
        Implicant::from_minterm(Cube::parse(bits).unwrap(), index)
    }

    #[test]
    fn test_merge_unions_covers() {
        let a = implicant("010", 2);
        let b = implicant("011", 3);
        let merged = a.merge(&b).unwrap();
        assert_eq!(merged.cube.to_string(), "01-");
        assert_eq!(merged.covers, BTreeSet::from([2, 3]));
        assert!(merged.prime);
    }

    #[test]
    fn test_merge_requires_distance_one() {
        let a = implicant("010", 2);
        let b = implicant("101", 5);
        assert!(a.merge(&b).is_none());
    }

    #[test]
    fn test_merge_requires_matching_masks() {
        let a = Implicant {
            cube: Cube::parse("01-").unwrap(),
            covers: BTreeSet::from([2, 3]),
            prime: true,
        };
        let b = implicant("011", 3);
        assert!(a.merge(&b).is_none());
    }

    #[test]
    fn test_group_deduplicates_by_bit_string() {
        let mut group = MaskGroup::default();
        group.insert(implicant("010", 2));
        group.insert(implicant("010", 2));
        group.insert(implicant("110", 6));
        assert_eq!(group.members().len(), 2);
    }

    #[test]
    fn test_group_sorts_by_ones() {
        let mut group = MaskGroup::default();
        group.insert(implicant("111", 7));
        group.insert(implicant("000", 0));
        group.insert(implicant("010", 2));
        group.sort_by_ones();
        let ones: Vec<usize> = group.members().iter().map(|m| m.ones()).collect();
        assert_eq!(ones, vec![0, 1, 3]);
    }
}
