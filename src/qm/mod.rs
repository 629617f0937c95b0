//! Exact two-level minimization with Quine-McCluskey
//!
//! The pipeline: enumerate the on-set minterms, merge implicants pairwise
//! until every prime implicant has been generated, build the incidence
//! matrix between original minterms and primes, and select a smallest set
//! of primes with [`minimal_column_covers`]. The selected primes become the
//! clauses of the resulting sum-of-products.
//!
//! All intermediate collections are canonically ordered (bit-strings,
//! ones-counts, column indices), so identical inputs produce byte-identical
//! output.

mod implicant;

use crate::cover::{Cover, Cube};
use crate::expression::BoolExpr;
use crate::mincov::{minimal_column_covers, Matrix};
use implicant::{Implicant, MaskGroup};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Tuning knobs for a minimization run
///
/// # Examples
///
/// ```
/// use mccluskey_logic::qm::MinimizeConfig;
/// use std::time::Duration;
///
/// let config = MinimizeConfig {
///     petrick_deadline: Some(Duration::from_millis(250)),
/// };
/// assert!(config.petrick_deadline.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MinimizeConfig {
    /// Wall-clock budget for the Petrick expansion during prime selection.
    /// On expiry the best cover found so far is used; `None` means no bound.
    pub petrick_deadline: Option<Duration>,
}

impl Default for MinimizeConfig {
    fn default() -> Self {
        MinimizeConfig {
            petrick_deadline: None,
        }
    }
}

/// Minimize an expression with the default configuration
///
/// # Examples
///
/// ```
/// use mccluskey_logic::{qm, BoolExpr};
///
/// let expr = BoolExpr::parse("a * b + a * b * c").unwrap();
/// assert_eq!(qm::minimize(&expr).to_string(), "a * b");
/// ```
pub fn minimize(expr: &BoolExpr) -> BoolExpr {
    minimize_with_config(expr, &MinimizeConfig::default())
}

/// Minimize an expression into a minimal sum-of-products tree
///
/// Constant inputs (and inputs without variables) fold to a constant leaf.
/// An empty on-set yields the constant `0`; a full on-set yields the
/// constant `1`. Otherwise the result is a disjunction of the selected
/// prime implicants, clauses ordered by their cube bit-strings.
pub fn minimize_with_config(expr: &BoolExpr, config: &MinimizeConfig) -> BoolExpr {
    let variables = expr.variables();
    if variables.is_empty() {
        return BoolExpr::constant(expr.evaluate(&HashMap::new()));
    }
    let minterms = expr.on_set_minterms(&variables);
    let cover = minimize_on_set(variables, minterms, config);
    if cover.is_empty() {
        return BoolExpr::constant(false);
    }
    if cover.num_cubes() == 1 && cover.cubes()[0].dash_count() == cover.width() {
        // The all-dash prime only arises when the on-set was the full
        // universe, so the function is a tautology.
        return BoolExpr::constant(true);
    }
    cover.to_expr()
}

/// Minimize an on-set given directly as minterm cubes
///
/// The minterms must be dash-free and as wide as the variable list. The
/// returned cover holds the selected prime implicants sorted by bit-string;
/// an empty on-set gives an empty cover.
pub fn minimize_on_set(
    variables: Vec<Arc<str>>,
    minterms: Vec<Cube>,
    config: &MinimizeConfig,
) -> Cover {
    let width = variables.len();
    for minterm in &minterms {
        assert_eq!(
            minterm.width(),
            width,
            "cube width mismatch: {} vs {}",
            minterm.width(),
            width
        );
        assert!(
            minterm.is_minterm(),
            "on-set entry {} contains don't-care positions",
            minterm
        );
    }

    // The minterm universe is fixed for the whole run; implicants refer to
    // minterms by index into it.
    let mut universe = minterms;
    universe.sort();
    universe.dedup();
    if universe.is_empty() {
        return Cover::with_variables(variables);
    }

    let generators = prime_generators(&universe);
    debug!(
        "qm: {} minterms produced {} prime generators",
        universe.len(),
        generators.len()
    );

    let mut matrix = Matrix::new(generators.len());
    for row in 0..universe.len() {
        matrix.push_row(generators.iter().map(|g| g.covers.contains(&row)).collect());
    }

    let deadline = config.petrick_deadline.map(|budget| Instant::now() + budget);
    let covers = minimal_column_covers(&matrix, true, deadline);
    let selected = covers.into_iter().next().unwrap_or_default();
    debug!("qm: selected {} of {} generators", selected.len(), generators.len());

    let mut cubes: Vec<Cube> = selected
        .into_iter()
        .map(|column| generators[column].cube.clone())
        .collect();
    // Bit-string order with 1s first, so positive literals lead the output.
    cubes.sort_by(|a, b| b.cmp(a));
    Cover::from_parts(variables, cubes)
}

/// Generate every prime implicant of the universe by iterative merging
///
/// Each pass scans every mask group: members are sorted by ones-count and
/// merged pairwise (a pair can only merge when the counts differ by one, so
/// the inner scan stops early). Successful merges feed the next generation's
/// buckets and demote both parents; whatever is still prime when its group
/// has been scanned is a generator.
fn prime_generators(universe: &[Cube]) -> Vec<Implicant> {
    let mut current: BTreeMap<Vec<bool>, MaskGroup> = BTreeMap::new();
    for (index, minterm) in universe.iter().enumerate() {
        current
            .entry(minterm.dash_pattern())
            .or_default()
            .insert(Implicant::from_minterm(minterm.clone(), index));
    }

    let mut generators: Vec<Implicant> = Vec::new();
    let mut merged_any = true;
    let mut generation = 0usize;
    while merged_any {
        merged_any = false;
        let mut next: BTreeMap<Vec<bool>, MaskGroup> = BTreeMap::new();
        for group in current.values_mut() {
            group.sort_by_ones();
            let members = group.members_mut();
            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    if members[j].ones() > members[i].ones() + 1 {
                        break;
                    }
                    if let Some(merged) = members[i].merge(&members[j]) {
                        members[i].prime = false;
                        members[j].prime = false;
                        merged_any = true;
                        next.entry(merged.cube.dash_pattern())
                            .or_default()
                            .insert(merged);
                    }
                }
            }
            for member in group.members() {
                if member.prime {
                    generators.push(member.clone());
                }
            }
        }
        debug!(
            "qm: generation {} scanned {} groups, {} generators so far",
            generation,
            current.len(),
            generators.len()
        );
        generation += 1;
        current = next;
    }
    generators
}

impl BoolExpr {
    /// Minimize this expression with Quine-McCluskey
    ///
    /// Convenience wrapper around [`minimize`].
    pub fn simplify_qm(&self) -> BoolExpr {
        minimize(self)
    }
}
