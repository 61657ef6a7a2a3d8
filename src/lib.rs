//! # synth-bench: reproducible benchmarks for loop-free program synthesis
//!
//! **`synth-bench`** supplies parameterized benchmark *instances* for a
//! program-synthesis engine that searches for loop-free programs over a
//! library of primitive operations. Each instance couples a formal
//! behavioral specification, an operator library with usage bounds, an
//! optional constant pool, and metadata.
//!
//! ## Key pieces
//!
//! - **[`random`]**: the randomized formula generators. [`random::random_formula`]
//!   builds an expression tree of an exact node count; [`random::random_dnf`]
//!   enumerates the full truth-assignment space and probabilistically keeps
//!   clauses. Both are seeded and bit-for-bit reproducible.
//! - **[`spec`]**: relational ([`spec::Spec`]) and functional ([`spec::Func`])
//!   specifications, validated at construction.
//! - **[`bench`]**: the [`bench::Bench`] record, the unit handed to the
//!   external synthesis engine.
//! - **[`catalog`]**: the [`catalog::Base`] suite of ready-made benchmarks.
//!
//! ## Quick start
//!
//! ```rust
//! use synth_bench::expr::Expr;
//! use synth_bench::ops::{BoolOp, Op};
//! use synth_bench::random::{random_formula, DEFAULT_SEED};
//!
//! let inputs = vec![Expr::bool_var("x0"), Expr::bool_var("x1")];
//! let ops = [Op::binary(BoolOp::And), Op::unary(BoolOp::Not)];
//!
//! let f = random_formula(&inputs, 7, &ops, DEFAULT_SEED).unwrap();
//! assert_eq!(f.size(), 7);
//!
//! // Same parameters, same tree.
//! let g = random_formula(&inputs, 7, &ops, DEFAULT_SEED).unwrap();
//! assert_eq!(f, g);
//! ```
//!
//! The generators never solve, simplify, or validate the formulas they
//! build, and the DNF generator is deliberately `Θ(2^n)` in the number of
//! variables; callers keep `n` small.

use thiserror::Error;

pub mod bench;
pub mod catalog;
pub mod expr;
pub mod oplib;
pub mod ops;
pub mod random;
pub mod spec;

/// Any error a catalog entry can surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Gen(#[from] random::GenError),
    #[error(transparent)]
    Spec(#[from] spec::SpecError),
}
