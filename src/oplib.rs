//! Standard operator libraries for the benchmark catalog.
//!
//! Library operators are [`Func`]s: named functions of their parameters.
//! [`Bl`] is the boolean gate library; [`Bv`] builds a bit-vector library
//! for a fixed width.

use crate::expr::{Expr, Sort};
use crate::spec::Func;

fn gate_vars(n: usize) -> Vec<Expr> {
    ["x", "y", "z", "w"][..n]
        .iter()
        .map(|name| Expr::bool_var(*name))
        .collect()
}

/// The boolean gate library.
pub struct Bl;

impl Bl {
    pub fn not1() -> Func {
        Func::new("not1", Expr::not(Expr::bool_var("x")))
    }

    pub fn and2() -> Func {
        Func::new("and2", Expr::and(gate_vars(2)))
    }

    pub fn or2() -> Func {
        Func::new("or2", Expr::or(gate_vars(2)))
    }

    pub fn xor2() -> Func {
        Func::new("xor2", Expr::xor(Expr::bool_var("x"), Expr::bool_var("y")))
    }

    pub fn nand2() -> Func {
        Func::new("nand2", Expr::nand(gate_vars(2)))
    }

    pub fn nor2() -> Func {
        Func::new("nor2", Expr::nor(gate_vars(2)))
    }

    pub fn and3() -> Func {
        Func::new("and3", Expr::and(gate_vars(3)))
    }

    pub fn or3() -> Func {
        Func::new("or3", Expr::or(gate_vars(3)))
    }

    pub fn nand3() -> Func {
        Func::new("nand3", Expr::nand(gate_vars(3)))
    }

    pub fn nor3() -> Func {
        Func::new("nor3", Expr::nor(gate_vars(3)))
    }

    pub fn and4() -> Func {
        Func::new("and4", Expr::and(gate_vars(4)))
    }

    pub fn or4() -> Func {
        Func::new("or4", Expr::or(gate_vars(4)))
    }

    pub fn nand4() -> Func {
        Func::new("nand4", Expr::nand(gate_vars(4)))
    }

    pub fn nor4() -> Func {
        Func::new("nor4", Expr::nor(gate_vars(4)))
    }

    /// Multiplexer: `x` selects between `y` and `z`.
    pub fn mux2() -> Func {
        Func::new(
            "mux2",
            Expr::ite(Expr::bool_var("x"), Expr::bool_var("y"), Expr::bool_var("z")),
        )
    }

    /// Majority of three.
    pub fn maj3() -> Func {
        Func::new("maj3", Expr::at_least(2, gate_vars(3)))
    }

    /// The full boolean library.
    pub fn ops() -> Vec<Func> {
        vec![
            Self::not1(),
            Self::and2(),
            Self::or2(),
            Self::xor2(),
            Self::nand2(),
            Self::nor2(),
            Self::and3(),
            Self::or3(),
            Self::nand3(),
            Self::nor3(),
            Self::and4(),
            Self::or4(),
            Self::nand4(),
            Self::nor4(),
            Self::mux2(),
            Self::maj3(),
        ]
    }
}

/// A bit-vector operator library for a fixed width.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bv {
    pub width: u32,
}

impl Bv {
    pub fn new(width: u32) -> Self {
        Bv { width }
    }

    fn x(self) -> Expr {
        Expr::bv_var("x", self.width)
    }

    fn y(self) -> Expr {
        Expr::bv_var("y", self.width)
    }

    pub fn not(self) -> Func {
        Func::new("not", Expr::not(self.x()))
    }

    pub fn neg(self) -> Func {
        Func::new("neg", Expr::neg(self.x()))
    }

    pub fn and(self) -> Func {
        Func::new("and", Expr::and(vec![self.x(), self.y()]))
    }

    pub fn or(self) -> Func {
        Func::new("or", Expr::or(vec![self.x(), self.y()]))
    }

    pub fn xor(self) -> Func {
        Func::new("xor", Expr::xor(self.x(), self.y()))
    }

    pub fn add(self) -> Func {
        Func::new("add", Expr::add(self.x(), self.y()))
    }

    pub fn sub(self) -> Func {
        Func::new("sub", Expr::sub(self.x(), self.y()))
    }

    pub fn mul(self) -> Func {
        Func::new("mul", Expr::mul(self.x(), self.y()))
    }

    pub fn shl(self) -> Func {
        Func::new("shl", Expr::shl(self.x(), self.y()))
    }

    pub fn lshr(self) -> Func {
        Func::new("lshr", Expr::lshr(self.x(), self.y()))
    }

    pub fn ashr(self) -> Func {
        Func::new("ashr", Expr::ashr(self.x(), self.y()))
    }

    /// The full library for this width.
    pub fn ops(self) -> Vec<Func> {
        vec![
            self.not(),
            self.neg(),
            self.and(),
            self.or(),
            self.xor(),
            self.add(),
            self.sub(),
            self.mul(),
            self.shl(),
            self.lshr(),
            self.ashr(),
        ]
    }
}

/// The smallest bit-vector sort able to represent `n` distinct values.
pub fn bv_sort(n: u64) -> Sort {
    let width = (u64::BITS - n.saturating_sub(1).leading_zeros()).max(1);
    Sort::BitVec(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bl_arities() {
        assert_eq!(Bl::not1().arity(), 1);
        assert_eq!(Bl::and2().arity(), 2);
        assert_eq!(Bl::nor3().arity(), 3);
        assert_eq!(Bl::nand4().arity(), 4);
        assert_eq!(Bl::mux2().arity(), 3);
        assert_eq!(Bl::maj3().arity(), 3);
    }

    #[test]
    fn test_bl_ops_complete() {
        let ops = Bl::ops();
        assert_eq!(ops.len(), 16);
        assert!(ops.contains(&Bl::xor2()));
    }

    #[test]
    fn test_bl_outputs_are_bool() {
        for op in Bl::ops() {
            assert_eq!(op.output.sort(), Sort::Bool, "{}", op.name);
        }
    }

    #[test]
    fn test_bv_sorts() {
        let bv = Bv::new(32);
        assert_eq!(bv.sub().arity(), 2);
        assert_eq!(bv.not().arity(), 1);
        for op in bv.ops() {
            assert_eq!(op.output.sort(), Sort::BitVec(32), "{}", op.name);
        }
    }

    #[test]
    fn test_bv_sort_widths() {
        assert_eq!(bv_sort(1), Sort::BitVec(1));
        assert_eq!(bv_sort(2), Sort::BitVec(1));
        assert_eq!(bv_sort(3), Sort::BitVec(2));
        assert_eq!(bv_sort(4), Sort::BitVec(2));
        assert_eq!(bv_sort(5), Sort::BitVec(3));
        assert_eq!(bv_sort(256), Sort::BitVec(8));
    }
}
