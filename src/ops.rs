//! Operator descriptors for the random formula generator.
//!
//! The connective set is closed and known at compile time, so operators are
//! a tagged variant ([`BoolOp`]) with a single `apply` capability rather
//! than open-ended dynamic dispatch. A descriptor ([`Op`]) pairs a
//! connective with its *declared* arity; the declared arity is plain data
//! and is only validated when generation actually uses the descriptor.

use std::fmt;

use crate::expr::Expr;

/// A boolean connective.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BoolOp {
    Not,
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Implies,
    Iff,
}

impl BoolOp {
    /// The natural arity of the connective.
    pub fn arity(self) -> u32 {
        match self {
            BoolOp::Not => 1,
            _ => 2,
        }
    }

    /// Applies the connective to the given operands.
    ///
    /// Every application produces exactly one expression node on top of
    /// its operands, so the generator's node accounting stays exact for
    /// any connective.
    ///
    /// # Panics
    ///
    /// Panics if `args.len()` does not match [`BoolOp::arity`]. The
    /// generator only calls this after checking the descriptor's arity.
    pub fn apply(self, args: &[Expr]) -> Expr {
        assert_eq!(args.len(), self.arity() as usize, "arity mismatch for {}", self);
        match self {
            BoolOp::Not => Expr::not(args[0].clone()),
            BoolOp::And => Expr::and(args.to_vec()),
            BoolOp::Or => Expr::or(args.to_vec()),
            BoolOp::Xor => Expr::xor(args[0].clone(), args[1].clone()),
            BoolOp::Nand => Expr::nand(args.to_vec()),
            BoolOp::Nor => Expr::nor(args.to_vec()),
            BoolOp::Implies => Expr::implies(args[0].clone(), args[1].clone()),
            BoolOp::Iff => Expr::eq(args[0].clone(), args[1].clone()),
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoolOp::Not => "not",
            BoolOp::And => "and",
            BoolOp::Or => "or",
            BoolOp::Xor => "xor",
            BoolOp::Nand => "nand",
            BoolOp::Nor => "nor",
            BoolOp::Implies => "implies",
            BoolOp::Iff => "iff",
        };
        write!(f, "{}", s)
    }
}

/// An operator descriptor: a connective plus its declared arity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Op {
    pub op: BoolOp,
    pub arity: u32,
}

// Constructors
impl Op {
    pub fn new(op: BoolOp, arity: u32) -> Self {
        Op { op, arity }
    }

    pub fn unary(op: BoolOp) -> Self {
        Op::new(op, 1)
    }

    pub fn binary(op: BoolOp) -> Self {
        Op::new(op, 2)
    }
}

impl From<BoolOp> for Op {
    fn from(op: BoolOp) -> Self {
        Op::new(op, op.arity())
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.op, self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arities() {
        assert_eq!(BoolOp::Not.arity(), 1);
        assert_eq!(BoolOp::And.arity(), 2);
        assert_eq!(Op::from(BoolOp::Xor).arity, 2);
    }

    #[test]
    fn test_apply() {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        assert_eq!(BoolOp::Not.apply(&[x.clone()]), Expr::not(x.clone()));
        assert_eq!(
            BoolOp::And.apply(&[x.clone(), y.clone()]),
            Expr::and(vec![x.clone(), y.clone()])
        );
        assert_eq!(
            BoolOp::Nor.apply(&[x.clone(), y.clone()]),
            Expr::nor(vec![x.clone(), y.clone()])
        );
    }

    #[test]
    fn test_apply_is_one_node() {
        // One application = one node on top of the operands, for every
        // binary connective.
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        for op in [
            BoolOp::And,
            BoolOp::Or,
            BoolOp::Xor,
            BoolOp::Nand,
            BoolOp::Nor,
            BoolOp::Implies,
            BoolOp::Iff,
        ] {
            assert_eq!(op.apply(&[x.clone(), y.clone()]).size(), 3, "{}", op);
        }
        assert_eq!(BoolOp::Not.apply(&[x]).size(), 2);
    }

    #[test]
    #[should_panic(expected = "arity mismatch")]
    fn test_apply_wrong_arity() {
        let x = Expr::bool_var("x");
        BoolOp::And.apply(&[x]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Op::binary(BoolOp::And).to_string(), "and/2");
        assert_eq!(Op::unary(BoolOp::Not).to_string(), "not/1");
    }
}
