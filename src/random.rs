//! Randomized formula generation.
//!
//! Two independent generators for stress-testing a synthesis engine with
//! formulas that are not hand-crafted:
//!
//! - [`random_formula`] builds one expression tree of an *exact* node count
//!   by recursive size-budgeted construction;
//! - [`random_dnf`] enumerates the full truth-assignment space over a
//!   variable set and probabilistically keeps each conjunctive clause.
//!
//! Both are deterministic given their seed: every call owns a private
//! [`ChaCha8Rng`] stream and draws from it in a fixed order, so identical
//! parameters reproduce the identical tree bit-for-bit, across runs and
//! platforms. Nothing here is shared between calls, so concurrent calls
//! with their own seeds are safe and independently reproducible.
//!
//! Neither generator solves, simplifies, or validates the formulas it
//! builds.

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::expr::Expr;
use crate::ops::{BoolOp, Op};

/// Seed used by the reference catalog.
pub const DEFAULT_SEED: u64 = 0x5aab_199e;

/// Fatal configuration errors of the generators.
///
/// Generation is pure and deterministic, so a failure for given inputs is
/// reproducible and will recur identically; there is nothing to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenError {
    #[error("no leaf expressions to draw from")]
    NoInputs,
    #[error("operator set is empty")]
    NoOperators,
    #[error("formula size must be positive")]
    ZeroSize,
    #[error("operator set insufficient: no arity-1 operator for a subterm of size 2")]
    NoUnaryOp,
    #[error("operator {op} declared with unsupported arity {arity}")]
    UnsupportedArity { op: BoolOp, arity: u32 },
    #[error("operator {op} declared with arity {declared}, but {op} takes {natural} operands")]
    MisdeclaredArity {
        op: BoolOp,
        declared: u32,
        natural: u32,
    },
}

/// Generates a random formula over `inputs` with exactly `size` nodes.
///
/// `size` counts leaves as well as operator applications: `size == 1` is a
/// single leaf, `size == 2` is one unary application over a leaf, and
/// larger trees spend one node on the operator at each level.
///
/// All random choices draw from one private stream seeded with `seed`, in a
/// fixed order (leaf choice, operator choice, split choice; left subtree
/// before right), so the result is a pure function of the arguments.
///
/// # Errors
///
/// - [`GenError::NoInputs`] / [`GenError::NoOperators`] / [`GenError::ZeroSize`]
///   for empty inputs, an empty operator set, or `size == 0`;
/// - [`GenError::NoUnaryOp`] when some recursive call reaches size 2 and no
///   arity-1 operator is registered;
/// - [`GenError::UnsupportedArity`] when a descriptor declares an arity
///   outside `{1, 2}`;
/// - [`GenError::MisdeclaredArity`] when a descriptor's declared arity is in
///   `{1, 2}` but disagrees with the connective's natural arity (say,
///   `not/2`). Descriptors are checked before any drawing, so a bad one is
///   rejected even if the stream would never have picked it.
///
/// No partial tree is ever returned.
pub fn random_formula(inputs: &[Expr], size: usize, ops: &[Op], seed: u64) -> Result<Expr, GenError> {
    if inputs.is_empty() {
        return Err(GenError::NoInputs);
    }
    if ops.is_empty() {
        return Err(GenError::NoOperators);
    }
    if size == 0 {
        return Err(GenError::ZeroSize);
    }
    for op in ops {
        let natural = op.op.arity();
        match op.arity {
            1 | 2 if op.arity == natural => {}
            1 | 2 => {
                return Err(GenError::MisdeclaredArity {
                    op: op.op,
                    declared: op.arity,
                    natural,
                })
            }
            arity => return Err(GenError::UnsupportedArity { op: op.op, arity }),
        }
    }
    debug!("random_formula(|inputs| = {}, size = {}, |ops| = {}, seed = {:#x})", inputs.len(), size, ops.len(), seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    build(inputs, size, ops, &mut rng)
}

fn build(inputs: &[Expr], size: usize, ops: &[Op], rng: &mut ChaCha8Rng) -> Result<Expr, GenError> {
    debug_assert!(size >= 1);
    if size == 1 {
        let leaf = &inputs[rng.gen_range(0..inputs.len())];
        return Ok(leaf.clone());
    }
    if size == 2 {
        let unary: Vec<Op> = ops.iter().copied().filter(|op| op.arity == 1).collect();
        if unary.is_empty() {
            return Err(GenError::NoUnaryOp);
        }
        let op = unary[rng.gen_range(0..unary.len())];
        let arg = build(inputs, 1, ops, rng)?;
        return Ok(op.op.apply(&[arg]));
    }
    // One node is spent on the operator at this level.
    let remaining = size - 1;
    let op = ops[rng.gen_range(0..ops.len())];
    match op.arity {
        1 => {
            let arg = build(inputs, remaining, ops, rng)?;
            Ok(op.op.apply(&[arg]))
        }
        2 => {
            let szl = rng.gen_range(1..remaining);
            let szr = remaining - szl;
            // Left before right: the stream is sequential, so evaluation
            // order is part of the reproducibility contract.
            let lhs = build(inputs, szl, ops, rng)?;
            let rhs = build(inputs, szr, ops, rng)?;
            Ok(op.op.apply(&[lhs, rhs]))
        }
        arity => Err(GenError::UnsupportedArity { op: op.op, arity }),
    }
}

/// Generates a random formula in disjunctive normal form over `inputs`.
///
/// All `2^n` truth assignments to the `n` inputs are enumerated in binary
/// counting order with the *first* input as the most significant bit; the
/// order is fixed because it determines which draw of the stream each
/// assignment sees. For each assignment one uniform integer in `[0, 100)`
/// is drawn, and if it is below `clause_probability` the corresponding
/// clause (the conjunction of one literal per input, in registered order)
/// is kept. The result is the disjunction of the kept clauses; when none
/// survive it degenerates to the constant `false`, which is a valid result,
/// not an error.
///
/// Running time and memory are `Θ(2^n)` by design. There is no internal
/// guard: the caller is responsible for keeping `n` small.
pub fn random_dnf(inputs: &[Expr], clause_probability: u8, seed: u64) -> Expr {
    let n = inputs.len();
    debug!("random_dnf(n = {}, clause_probability = {}, seed = {:#x})", n, clause_probability, seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut clauses = Vec::new();
    for assignment in 0..(1u64 << n) {
        if rng.gen_range(0..100u32) < u32::from(clause_probability) {
            let literals = inputs
                .iter()
                .enumerate()
                .map(|(i, input)| {
                    let positive = (assignment >> (n - 1 - i)) & 1 == 1;
                    if positive {
                        input.clone()
                    } else {
                        Expr::not(input.clone())
                    }
                })
                .collect();
            clauses.push(Expr::and(literals));
        }
    }
    debug!("random_dnf: kept {} of {} clauses", clauses.len(), 1u64 << n);
    Expr::or(clauses)
}
