//! Immutable symbolic expression trees.
//!
//! Expressions are opaque values: the generators and the benchmark catalog
//! build them through the smart constructors below and never look inside.
//! Children are shared via [`Arc`], so cloning a subtree is cheap and
//! persistent structural sharing is safe.
//!
//! The boolean connectives ([`Expr::and`], [`Expr::or`], [`Expr::xor`],
//! [`Expr::not`]) are sort-generic: applied to bit-vector operands they
//! denote the bitwise operation of the same name.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// The sort (type) of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Booleans.
    Bool,
    /// Unbounded integers.
    Int,
    /// Bit-vectors of the given width (in bits).
    BitVec(u32),
    /// Arrays from an index sort to a value sort.
    Array(Box<Sort>, Box<Sort>),
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::BitVec(w) => write!(f, "(_ BitVec {})", w),
            Sort::Array(index, value) => write!(f, "(Array {} {})", index, value),
        }
    }
}

/// Binary operators.
///
/// The comparison operators `Ge`/`Gt`/`Le`/`Lt` are signed; `Uge`/`Ugt`/
/// `Ule`/`Ult` are the unsigned bit-vector comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinOp {
    Eq,
    Xor,
    Implies,
    Add,
    Sub,
    Mul,
    Div,
    Ge,
    Gt,
    Le,
    Lt,
    Uge,
    Ugt,
    Ule,
    Ult,
    Shl,
    Lshr,
    Ashr,
}

impl BinOp {
    fn token(self) -> &'static str {
        match self {
            BinOp::Eq => "=",
            BinOp::Xor => "xor",
            BinOp::Implies => "=>",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "div",
            BinOp::Ge => ">=",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Lt => "<",
            BinOp::Uge => "bvuge",
            BinOp::Ugt => "bvugt",
            BinOp::Ule => "bvule",
            BinOp::Ult => "bvult",
            BinOp::Shl => "bvshl",
            BinOp::Lshr => "bvlshr",
            BinOp::Ashr => "bvashr",
        }
    }
}

/// Variadic operators.
///
/// `Nand` and `Nor` are primitive, not sugar for `not(and(..))`: an
/// application is a single node, which keeps node counts transparent for
/// the size-budgeted generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NAryOp {
    And,
    Or,
    Nand,
    Nor,
    Distinct,
}

impl NAryOp {
    fn token(self) -> &'static str {
        match self {
            NAryOp::And => "and",
            NAryOp::Or => "or",
            NAryOp::Nand => "nand",
            NAryOp::Nor => "nor",
            NAryOp::Distinct => "distinct",
        }
    }
}

/// An immutable expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Boolean literal.
    BoolLit(bool),
    /// Integer literal.
    IntLit(i64),
    /// Bit-vector literal of the given width.
    BitVecLit { value: u64, width: u32 },
    /// A sorted variable.
    Var { name: String, sort: Sort },
    /// Complement (logical on booleans, bitwise on bit-vectors).
    Not(Arc<Expr>),
    /// Arithmetic negation.
    Neg(Arc<Expr>),
    /// Binary operator application.
    BinOp(BinOp, Arc<Expr>, Arc<Expr>),
    /// Variadic operator application (two or more operands).
    NAry(NAryOp, Vec<Expr>),
    /// If-then-else.
    Ite(Arc<Expr>, Arc<Expr>, Arc<Expr>),
    /// At least `k` of the operands are true.
    AtLeast(u32, Vec<Expr>),
    /// Array read.
    Select(Arc<Expr>, Arc<Expr>),
    /// Array write.
    Store(Arc<Expr>, Arc<Expr>, Arc<Expr>),
    /// Zero-extension by the given number of bits.
    ZeroExt(u32, Arc<Expr>),
    /// Integer to bit-vector of the given width.
    Int2Bv(u32, Arc<Expr>),
    /// Bit-vector to integer.
    Bv2Int { signed: bool, arg: Arc<Expr> },
}

// Constructors
impl Expr {
    pub fn bool(value: bool) -> Self {
        Expr::BoolLit(value)
    }

    pub fn int(value: i64) -> Self {
        Expr::IntLit(value)
    }

    pub fn bitvec(value: u64, width: u32) -> Self {
        Expr::BitVecLit { value, width }
    }

    pub fn var(name: impl Into<String>, sort: Sort) -> Self {
        Expr::Var {
            name: name.into(),
            sort,
        }
    }

    pub fn bool_var(name: impl Into<String>) -> Self {
        Self::var(name, Sort::Bool)
    }

    pub fn int_var(name: impl Into<String>) -> Self {
        Self::var(name, Sort::Int)
    }

    pub fn bv_var(name: impl Into<String>, width: u32) -> Self {
        Self::var(name, Sort::BitVec(width))
    }

    pub fn not(arg: Expr) -> Self {
        Expr::Not(Arc::new(arg))
    }

    pub fn neg(arg: Expr) -> Self {
        Expr::Neg(Arc::new(arg))
    }

    /// Conjunction. The empty conjunction is `true`; a singleton collapses
    /// to its operand.
    pub fn and(args: Vec<Expr>) -> Self {
        Self::nary(NAryOp::And, Expr::BoolLit(true), args)
    }

    /// Disjunction. The empty disjunction is `false`; a singleton collapses
    /// to its operand.
    pub fn or(args: Vec<Expr>) -> Self {
        Self::nary(NAryOp::Or, Expr::BoolLit(false), args)
    }

    /// Negated conjunction, as a single application. The empty nand is
    /// `false`; a singleton collapses to the negated operand.
    pub fn nand(mut args: Vec<Expr>) -> Self {
        match args.len() {
            0 => Expr::BoolLit(false),
            1 => Expr::not(args.pop().unwrap()),
            _ => Expr::NAry(NAryOp::Nand, args),
        }
    }

    /// Negated disjunction, as a single application. The empty nor is
    /// `true`; a singleton collapses to the negated operand.
    pub fn nor(mut args: Vec<Expr>) -> Self {
        match args.len() {
            0 => Expr::BoolLit(true),
            1 => Expr::not(args.pop().unwrap()),
            _ => Expr::NAry(NAryOp::Nor, args),
        }
    }

    pub fn distinct(args: Vec<Expr>) -> Self {
        Self::nary(NAryOp::Distinct, Expr::BoolLit(true), args)
    }

    fn nary(op: NAryOp, empty: Expr, mut args: Vec<Expr>) -> Self {
        match args.len() {
            0 => empty,
            1 => args.pop().unwrap(),
            _ => Expr::NAry(op, args),
        }
    }

    pub fn xor(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Implies, lhs, rhs)
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Eq, lhs, rhs)
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Add, lhs, rhs)
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Sub, lhs, rhs)
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Mul, lhs, rhs)
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Div, lhs, rhs)
    }

    pub fn ge(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Ge, lhs, rhs)
    }

    pub fn gt(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Gt, lhs, rhs)
    }

    pub fn le(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Le, lhs, rhs)
    }

    pub fn lt(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Lt, lhs, rhs)
    }

    pub fn uge(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Uge, lhs, rhs)
    }

    pub fn ugt(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Ugt, lhs, rhs)
    }

    pub fn ule(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Ule, lhs, rhs)
    }

    pub fn ult(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Ult, lhs, rhs)
    }

    pub fn shl(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Shl, lhs, rhs)
    }

    pub fn lshr(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Lshr, lhs, rhs)
    }

    pub fn ashr(lhs: Expr, rhs: Expr) -> Self {
        Self::binop(BinOp::Ashr, lhs, rhs)
    }

    fn binop(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::BinOp(op, Arc::new(lhs), Arc::new(rhs))
    }

    pub fn ite(cond: Expr, then: Expr, otherwise: Expr) -> Self {
        Expr::Ite(Arc::new(cond), Arc::new(then), Arc::new(otherwise))
    }

    pub fn at_least(k: u32, args: Vec<Expr>) -> Self {
        Expr::AtLeast(k, args)
    }

    pub fn select(array: Expr, index: Expr) -> Self {
        Expr::Select(Arc::new(array), Arc::new(index))
    }

    pub fn store(array: Expr, index: Expr, value: Expr) -> Self {
        Expr::Store(Arc::new(array), Arc::new(index), Arc::new(value))
    }

    pub fn zero_ext(bits: u32, arg: Expr) -> Self {
        Expr::ZeroExt(bits, Arc::new(arg))
    }

    pub fn int2bv(width: u32, arg: Expr) -> Self {
        Expr::Int2Bv(width, Arc::new(arg))
    }

    pub fn bv2int(arg: Expr, signed: bool) -> Self {
        Expr::Bv2Int {
            signed,
            arg: Arc::new(arg),
        }
    }
}

// Getters
impl Expr {
    /// Returns `(name, sort)` if this expression is a variable.
    pub fn as_var(&self) -> Option<(&str, &Sort)> {
        match self {
            Expr::Var { name, sort } => Some((name, sort)),
            _ => None,
        }
    }

    /// Infers the sort of the expression.
    ///
    /// Inference is structural and total: ill-sorted trees are not detected
    /// here (the crate never builds them), and the result for such trees is
    /// unspecified but never a panic.
    pub fn sort(&self) -> Sort {
        match self {
            Expr::BoolLit(_) => Sort::Bool,
            Expr::IntLit(_) => Sort::Int,
            Expr::BitVecLit { width, .. } => Sort::BitVec(*width),
            Expr::Var { sort, .. } => sort.clone(),
            Expr::Not(arg) => arg.sort(),
            Expr::Neg(arg) => arg.sort(),
            Expr::BinOp(op, lhs, _) => match op {
                BinOp::Eq
                | BinOp::Implies
                | BinOp::Ge
                | BinOp::Gt
                | BinOp::Le
                | BinOp::Lt
                | BinOp::Uge
                | BinOp::Ugt
                | BinOp::Ule
                | BinOp::Ult => Sort::Bool,
                BinOp::Xor
                | BinOp::Add
                | BinOp::Sub
                | BinOp::Mul
                | BinOp::Div
                | BinOp::Shl
                | BinOp::Lshr
                | BinOp::Ashr => lhs.sort(),
            },
            Expr::NAry(op, args) => match op {
                NAryOp::Distinct => Sort::Bool,
                NAryOp::And | NAryOp::Or | NAryOp::Nand | NAryOp::Nor => {
                    args.first().map_or(Sort::Bool, |arg| arg.sort())
                }
            },
            Expr::Ite(_, then, _) => then.sort(),
            Expr::AtLeast(..) => Sort::Bool,
            Expr::Select(array, _) => match array.sort() {
                Sort::Array(_, value) => *value,
                other => other,
            },
            Expr::Store(array, _, _) => array.sort(),
            Expr::ZeroExt(bits, arg) => match arg.sort() {
                Sort::BitVec(w) => Sort::BitVec(w + bits),
                other => other,
            },
            Expr::Int2Bv(width, _) => Sort::BitVec(*width),
            Expr::Bv2Int { .. } => Sort::Int,
        }
    }

    /// Number of nodes in the tree: a leaf counts 1, an application counts
    /// 1 plus the sizes of its children.
    pub fn size(&self) -> usize {
        match self {
            Expr::BoolLit(_) | Expr::IntLit(_) | Expr::BitVecLit { .. } | Expr::Var { .. } => 1,
            Expr::Not(arg)
            | Expr::Neg(arg)
            | Expr::ZeroExt(_, arg)
            | Expr::Int2Bv(_, arg)
            | Expr::Bv2Int { arg, .. } => 1 + arg.size(),
            Expr::BinOp(_, lhs, rhs) | Expr::Select(lhs, rhs) => 1 + lhs.size() + rhs.size(),
            Expr::NAry(_, args) | Expr::AtLeast(_, args) => {
                1 + args.iter().map(Expr::size).sum::<usize>()
            }
            Expr::Ite(a, b, c) | Expr::Store(a, b, c) => 1 + a.size() + b.size() + c.size(),
        }
    }

    /// Free variables in first-occurrence order (depth-first, left to right).
    pub fn free_vars(&self) -> Vec<Expr> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut vars = Vec::new();
        self.collect_vars(&mut seen, &mut vars);
        vars
    }

    fn collect_vars(&self, seen: &mut HashSet<String>, vars: &mut Vec<Expr>) {
        match self {
            Expr::BoolLit(_) | Expr::IntLit(_) | Expr::BitVecLit { .. } => {}
            Expr::Var { name, .. } => {
                if seen.insert(name.clone()) {
                    vars.push(self.clone());
                }
            }
            Expr::Not(arg)
            | Expr::Neg(arg)
            | Expr::ZeroExt(_, arg)
            | Expr::Int2Bv(_, arg)
            | Expr::Bv2Int { arg, .. } => arg.collect_vars(seen, vars),
            Expr::BinOp(_, lhs, rhs) | Expr::Select(lhs, rhs) => {
                lhs.collect_vars(seen, vars);
                rhs.collect_vars(seen, vars);
            }
            Expr::NAry(_, args) | Expr::AtLeast(_, args) => {
                for arg in args {
                    arg.collect_vars(seen, vars);
                }
            }
            Expr::Ite(a, b, c) | Expr::Store(a, b, c) => {
                a.collect_vars(seen, vars);
                b.collect_vars(seen, vars);
                c.collect_vars(seen, vars);
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::BoolLit(b) => write!(f, "{}", b),
            Expr::IntLit(i) => write!(f, "{}", i),
            Expr::BitVecLit { value, width } => write!(f, "(_ bv{} {})", value, width),
            Expr::Var { name, .. } => write!(f, "{}", name),
            Expr::Not(arg) => write!(f, "(not {})", arg),
            Expr::Neg(arg) => write!(f, "(- {})", arg),
            Expr::BinOp(op, lhs, rhs) => write!(f, "({} {} {})", op.token(), lhs, rhs),
            Expr::NAry(op, args) => {
                write!(f, "({}", op.token())?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Ite(cond, then, otherwise) => {
                write!(f, "(ite {} {} {})", cond, then, otherwise)
            }
            Expr::AtLeast(k, args) => {
                write!(f, "((_ at-least {})", k)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Select(array, index) => write!(f, "(select {} {})", array, index),
            Expr::Store(array, index, value) => {
                write!(f, "(store {} {} {})", array, index, value)
            }
            Expr::ZeroExt(bits, arg) => write!(f, "((_ zero_extend {}) {})", bits, arg),
            Expr::Int2Bv(width, arg) => write!(f, "((_ int2bv {}) {})", width, arg),
            Expr::Bv2Int { signed, arg } => {
                if *signed {
                    write!(f, "(bv2int {})", arg)
                } else {
                    write!(f, "(bv2nat {})", arg)
                }
            }
        }
    }
}
