//! Benchmark records handed to a synthesis engine.
//!
//! A [`Bench`] aggregates one specification with the operator library the
//! engine may draw from, an optional constant pool, a theory tag, and a
//! free-text description. It is built once by a catalog entry and immutable
//! afterwards; the engine consumes it as-is.

use std::fmt;

use crate::expr::Expr;
use crate::spec::{Func, Spec};

/// An ordered operator library with per-operator usage bounds.
///
/// `None` means the operator may be used any number of times (a bare
/// sequence of operators implies an unbounded library).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpLib {
    entries: Vec<(Func, Option<u32>)>,
}

impl OpLib {
    /// An empty library.
    pub fn empty() -> Self {
        OpLib::default()
    }

    /// A library where every operator has unbounded multiplicity.
    pub fn unbounded(ops: Vec<Func>) -> Self {
        OpLib {
            entries: ops.into_iter().map(|op| (op, None)).collect(),
        }
    }

    /// A library with an explicit maximum use count per operator.
    pub fn bounded(ops: Vec<(Func, u32)>) -> Self {
        OpLib {
            entries: ops.into_iter().map(|(op, n)| (op, Some(n))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Func, Option<u32>)> {
        self.entries.iter()
    }

    /// Maximum use count for the given operator, if it is in the library.
    pub fn max_uses(&self, op: &Func) -> Option<Option<u32>> {
        self.entries
            .iter()
            .find(|(f, _)| f == op)
            .map(|(_, n)| *n)
    }
}

impl<'a> IntoIterator for &'a OpLib {
    type Item = &'a (Func, Option<u32>);
    type IntoIter = std::slice::Iter<'a, (Func, Option<u32>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// One benchmark instance: the unit handed to the synthesis engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Bench {
    /// Benchmark name, unique within a catalog.
    pub name: String,
    /// The behavioral specification to synthesize against.
    pub spec: Spec,
    /// Operators the engine may use, with usage bounds.
    pub ops: OpLib,
    /// Optional fallback library to fill in when the bounded set is exhausted.
    pub all_ops: Option<Vec<Func>>,
    /// Constant pool usable free of charge. `None` leaves constants
    /// unrestricted; `Some(vec![])` forbids them.
    pub consts: Option<Vec<Expr>>,
    /// SMT theory tag, e.g. `QF_BV`.
    pub theory: Option<String>,
    /// Free-text description.
    pub desc: String,
}

// Constructors
impl Bench {
    pub fn new(name: impl Into<String>, spec: Spec, ops: OpLib) -> Self {
        Bench {
            name: name.into(),
            spec,
            ops,
            all_ops: None,
            consts: None,
            theory: None,
            desc: String::new(),
        }
    }

    pub fn with_all_ops(mut self, ops: Vec<Func>) -> Self {
        self.all_ops = Some(ops);
        self
    }

    pub fn with_consts(mut self, consts: Vec<Expr>) -> Self {
        self.consts = Some(consts);
        self
    }

    pub fn with_theory(mut self, theory: impl Into<String>) -> Self {
        self.theory = Some(theory.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }
}

impl fmt::Display for Bench {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{} ops", self.name, self.ops.len())?;
        if let Some(theory) = &self.theory {
            write!(f, ", {}", theory)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::expr::Expr;
    use crate::spec::Func;

    fn and2() -> Func {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        Func::new("and2", Expr::and(vec![x, y]))
    }

    fn not1() -> Func {
        Func::new("not1", Expr::not(Expr::bool_var("x")))
    }

    #[test]
    fn test_oplib_unbounded() {
        let lib = OpLib::unbounded(vec![and2(), not1()]);
        assert_eq!(lib.len(), 2);
        assert_eq!(lib.max_uses(&and2()), Some(None));
    }

    #[test]
    fn test_oplib_bounded() {
        let lib = OpLib::bounded(vec![(and2(), 2), (not1(), 1)]);
        assert_eq!(lib.max_uses(&and2()), Some(Some(2)));
        assert_eq!(lib.max_uses(&not1()), Some(Some(1)));
    }

    #[test]
    fn test_oplib_missing_op() {
        let lib = OpLib::bounded(vec![(and2(), 2)]);
        assert_eq!(lib.max_uses(&not1()), None);
    }

    #[test]
    fn test_bench_builder() {
        let spec = and2().to_spec();
        let bench = Bench::new("and", spec, OpLib::unbounded(vec![not1()]))
            .with_all_ops(vec![and2(), not1()])
            .with_consts(vec![])
            .with_theory("QF_BV")
            .with_desc("conjunction");
        assert_eq!(bench.name, "and");
        assert_eq!(bench.all_ops.as_ref().map(Vec::len), Some(2));
        assert_eq!(bench.consts, Some(vec![]));
        assert_eq!(bench.theory.as_deref(), Some("QF_BV"));
        assert_eq!(bench.desc, "conjunction");
    }
}
