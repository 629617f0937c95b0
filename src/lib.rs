//! # mccluskey-logic
//!
//! An exact two-level Boolean minimizer. The crate takes a function given as
//! an expression tree or as a set of on-set minterms and produces a minimal
//! sum-of-products cover, using three cooperating algorithms:
//!
//! 1. **Prime implicant generation** with Quine-McCluskey iterative pairwise
//!    merging ([`qm`]).
//! 2. **Minimal column cover selection** over the prime/minterm incidence
//!    matrix, with dominance reduction and a Petrick product-of-sums
//!    expansion ([`mincov`]).
//! 3. **Unate recursive complementation and tautology checking** over cube
//!    covers ([`Cover::complement`], [`Cover::is_tautology`]) — the unate
//!    base case reduces to the same minimal-column-cover problem.
//!
//! ## Example
//!
//! ```
//! use mccluskey_logic::{qm, BoolExpr};
//!
//! let expr = BoolExpr::parse("~a*b*c + a*~b*c + a*b*~c + a*b*c").unwrap();
//! let minimal = qm::minimize(&expr);
//! assert_eq!(minimal.to_string(), "a * b + a * c + b * c");
//! ```
//!
//! ## Covers
//!
//! Covers can also be manipulated directly:
//!
//! ```
//! use mccluskey_logic::Cover;
//!
//! let cover = Cover::from_strings(["a", "b", "c"], ["1--", "-1-", "--1", "000"]).unwrap();
//! assert!(cover.is_tautology());
//! ```
//!
//! The engine is single-threaded and synchronous, holds no global state, and
//! performs no I/O; the only cooperative cancellation point is the optional
//! Petrick deadline in [`qm::MinimizeConfig`].

pub mod cli;
pub mod cover;
pub mod expression;
pub mod mincov;
pub mod qm;

pub use cover::{Cover, CoverError, CoverParseError, Cube, CubeParseError};
pub use expression::{BoolExpr, ExpressionParseError, TruthTable};
pub use qm::MinimizeConfig;
