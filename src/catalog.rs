//! The base benchmark catalog.
//!
//! A named collection of constructor functions, each producing one
//! [`Bench`]. The set showcases the features a synthesis engine has to
//! handle: randomized specifications, usage-bounded libraries, constants,
//! preconditions, multiple theories, and relational (multi-output) specs.

use crate::bench::{Bench, OpLib};
use crate::expr::{Expr, Sort};
use crate::oplib::{bv_sort, Bl, Bv};
use crate::ops::{BoolOp, Op};
use crate::random::{random_dnf, random_formula, DEFAULT_SEED};
use crate::spec::{create_bool_func, Func, Spec};
use crate::Error;

fn bool_vars(n: usize) -> Vec<Expr> {
    (0..n).map(|i| Expr::bool_var(format!("x{}", i))).collect()
}

/// Base benchmark set: some more sophisticated features such as constants,
/// different theories, and preconditions.
#[derive(Debug, Default)]
pub struct Base;

impl Base {
    fn random_test(&self, name: &str, formula: Expr) -> Bench {
        let ops = OpLib::unbounded(vec![Bl::and2(), Bl::or2(), Bl::xor2(), Bl::not1()]);
        let spec = Func::new("rand", formula).to_spec();
        Bench::new(name, spec, ops)
            .with_consts(vec![])
            .with_theory("QF_BV")
    }

    /// A randomly generated formula of exactly `size` nodes over `n_vars`
    /// boolean variables.
    pub fn rand_formula(&self, size: usize, n_vars: usize) -> Result<Bench, Error> {
        let inputs = bool_vars(n_vars);
        let ops = [
            Op::binary(BoolOp::And),
            Op::binary(BoolOp::Or),
            Op::binary(BoolOp::Xor),
            Op::unary(BoolOp::Not),
        ];
        let formula = random_formula(&inputs, size, &ops, DEFAULT_SEED)?;
        Ok(self.random_test("rand_formula", formula))
    }

    /// A random DNF over `n_vars` boolean variables.
    pub fn rand_dnf(&self, n_vars: usize) -> Result<Bench, Error> {
        let inputs = bool_vars(n_vars);
        let formula = random_dnf(&inputs, 50, DEFAULT_SEED);
        Ok(self.random_test("rand_dnf", formula))
    }

    /// The 4-variable NPN class 0x1789 with a tightly bounded library.
    pub fn npn4_1789(&self) -> Result<Bench, Error> {
        let spec = create_bool_func("1789")?;
        let ops = OpLib::bounded(vec![(Bl::xor2(), 3), (Bl::and2(), 2), (Bl::or2(), 1)]);
        Ok(Bench::new("npn4_1789", spec.to_spec(), ops)
            .with_all_ops(Bl::ops())
            .with_consts(vec![])
            .with_theory("QF_BV"))
    }

    /// Conjunction from two NANDs.
    pub fn and(&self) -> Result<Bench, Error> {
        let ops = OpLib::bounded(vec![(Bl::nand2(), 2)]);
        Ok(Bench::new("and", Bl::and2().to_spec(), ops).with_all_ops(Bl::ops()))
    }

    /// Exclusive or from four NANDs.
    pub fn xor(&self) -> Result<Bench, Error> {
        let ops = OpLib::bounded(vec![(Bl::nand2(), 4)]);
        Ok(Bench::new("xor", Bl::xor2().to_spec(), ops).with_all_ops(Bl::ops()))
    }

    /// Multiplexer from one AND and two XORs.
    pub fn mux(&self) -> Result<Bench, Error> {
        let ops = OpLib::bounded(vec![(Bl::and2(), 1), (Bl::xor2(), 2)]);
        Ok(Bench::new("mux", Bl::mux2().to_spec(), ops).with_all_ops(Bl::ops()))
    }

    /// Zero detector over eight inputs.
    pub fn zero(&self) -> Result<Bench, Error> {
        let spec = Func::new("zero", Expr::not(Expr::or(bool_vars(8))));
        let ops = OpLib::bounded(vec![(Bl::and2(), 1), (Bl::nor4(), 2)]);
        Ok(Bench::new("zero", spec.to_spec(), ops)
            .with_all_ops(Bl::ops())
            .with_theory("QF_BV"))
    }

    fn adder_spec(&self) -> Result<Spec, Error> {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        let ci = Expr::bool_var("ci");
        let s = Expr::bool_var("s");
        let co = Expr::bool_var("co");
        let add = Expr::and(vec![
            Expr::eq(
                co.clone(),
                Expr::at_least(2, vec![x.clone(), y.clone(), ci.clone()]),
            ),
            Expr::eq(
                s.clone(),
                Expr::xor(x.clone(), Expr::xor(y.clone(), ci.clone())),
            ),
        ]);
        Ok(Spec::new("adder", add, vec![s, co], vec![x, y, ci])?)
    }

    /// 1-bit full adder.
    pub fn add(&self) -> Result<Bench, Error> {
        let ops = OpLib::bounded(vec![(Bl::xor2(), 2), (Bl::and2(), 2), (Bl::or2(), 1)]);
        Ok(Bench::new("add", self.adder_spec()?, ops)
            .with_all_ops(Bl::ops())
            .with_theory("QF_BV")
            .with_desc("1-bit full adder"))
    }

    /// 1-bit full adder from NOR3 gates only (Apollo guidance computer style).
    pub fn add_nor3(&self) -> Result<Bench, Error> {
        let ops = OpLib::bounded(vec![(Bl::nor3(), 8)]);
        Ok(Bench::new("add_nor3", self.adder_spec()?, ops)
            .with_all_ops(Bl::ops())
            .with_theory("QF_BV")
            .with_desc("1-bit full adder (nor3)"))
    }

    /// The identity function, dressed up: no operators needed at all.
    pub fn identity(&self) -> Result<Bench, Error> {
        let spec = Func::new("magic", Expr::and(vec![Expr::or(vec![Expr::bool_var("x")])]));
        Ok(Bench::new("identity", spec.to_spec(), OpLib::empty()).with_all_ops(Bl::ops()))
    }

    /// A tautology: the synthesized program is the constant `true`.
    pub fn const_true(&self) -> Result<Bench, Error> {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        let z = Expr::bool_var("z");
        let spec = Func::new(
            "magic",
            Expr::or(vec![Expr::or(vec![x.clone(), y, z]), Expr::not(x)]),
        );
        Ok(Bench::new("true", spec.to_spec(), OpLib::empty())
            .with_all_ops(Bl::ops())
            .with_desc("constant true"))
    }

    /// The empty disjunction: the output is the constant `false`.
    pub fn const_false(&self) -> Result<Bench, Error> {
        let x = Expr::bool_var("x");
        let z = Expr::bool_var("z");
        let phi = Expr::eq(z.clone(), Expr::or(vec![]));
        let spec = Spec::new("magic", phi, vec![z], vec![x])?;
        Ok(Bench::new("false", spec, OpLib::empty())
            .with_all_ops(Bl::ops())
            .with_desc("constant false"))
    }

    /// Mixed integer and bit-vector operators in one library.
    pub fn multiple_types(&self) -> Result<Bench, Error> {
        let x = Expr::int_var("x");
        let y = Expr::bv_var("y", 8);
        let int2bv = Func::new("int2bv", Expr::int2bv(16, x.clone()));
        let bv2int = Func::new("bv2int", Expr::bv2int(y.clone(), false));
        let div2 = Func::new("div2", Expr::div(x.clone(), Expr::int(2)));
        let spec = Func::new(
            "shr2",
            Expr::lshr(Expr::zero_ext(8, y.clone()), Expr::bitvec(1, 16)),
        );
        let ops = OpLib::bounded(vec![(int2bv, 1), (bv2int, 1), (div2, 1)]);
        Ok(Bench::new("multiple_types", spec.to_spec(), ops))
    }

    /// Doubling under a precondition that keeps the round-trip exact.
    pub fn precond(&self) -> Result<Bench, Error> {
        let x = Expr::int_var("x");
        let b = Expr::bv_var("b", 8);
        let int2bv = Func::new("int2bv", Expr::int2bv(8, x.clone()));
        let bv2int = Func::new("bv2int", Expr::bv2int(b.clone(), false));
        let addadd = Func::new("addadd", Expr::add(b.clone(), b.clone()));
        let spec = Func::with_precond(
            "mul2",
            Expr::mul(x.clone(), Expr::int(2)),
            Expr::and(vec![
                Expr::ge(x.clone(), Expr::int(0)),
                Expr::lt(x.clone(), Expr::int(128)),
            ]),
        )?;
        let ops = OpLib::bounded(vec![(int2bv, 1), (bv2int, 1), (addadd, 1)]);
        Ok(Bench::new("preconditions", spec.to_spec(), ops))
    }

    /// `x + x` from a single multiplication: the engine must find the
    /// constant 2.
    pub fn constant(&self) -> Result<Bench, Error> {
        let x = Expr::int_var("x");
        let y = Expr::int_var("y");
        let mul = Func::new("mul", Expr::mul(x.clone(), y));
        let spec = Func::new("const", Expr::add(x.clone(), x.clone()));
        let ops = OpLib::bounded(vec![(mul, 1)]);
        Ok(Bench::new("constant", spec.to_spec(), ops))
    }

    /// Absolute value of a 32-bit word, branch-free.
    pub fn abs(&self) -> Result<Bench, Error> {
        let width = 32;
        let bv = Bv::new(width);
        let x = Expr::bv_var("x", width);
        let spec = Func::new(
            "spec",
            Expr::ite(
                Expr::ge(x.clone(), Expr::bitvec(0, width)),
                x.clone(),
                Expr::neg(x.clone()),
            ),
        );
        let ops = OpLib::bounded(vec![(bv.sub(), 1), (bv.xor(), 1), (bv.ashr(), 1)]);
        Ok(Bench::new("abs", spec.to_spec(), ops)
            .with_all_ops(bv.ops())
            .with_theory("QF_BV"))
    }

    /// `x^30` from at most six multiplications.
    pub fn pow(&self) -> Result<Bench, Error> {
        let x = Expr::int_var("x");
        let y = Expr::int_var("y");
        let mut expr = Expr::int(1);
        for _ in 0..30 {
            expr = Expr::mul(x.clone(), expr);
        }
        let spec = Func::new("pow", expr);
        let mul = Func::new("mul", Expr::mul(x.clone(), y));
        let ops = OpLib::bounded(vec![(mul, 6)]);
        Ok(Bench::new("pow", spec.to_spec(), ops).with_consts(vec![]))
    }

    /// Polynomial evaluation with two additions and two multiplications.
    pub fn poly(&self) -> Result<Bench, Error> {
        let a = Expr::int_var("a");
        let b = Expr::int_var("b");
        let c = Expr::int_var("c");
        let h = Expr::int_var("h");
        let body = Expr::add(
            Expr::add(
                Expr::mul(Expr::mul(a.clone(), h.clone()), h.clone()),
                Expr::mul(b.clone(), h.clone()),
            ),
            c.clone(),
        );
        let spec = Func::new("poly", body);
        let mul = Func::new("mul", Expr::mul(a.clone(), b.clone()));
        let add = Func::new("add", Expr::add(a.clone(), b.clone()));
        let ops = OpLib::bounded(vec![(mul, 2), (add, 2)]);
        Ok(Bench::new("poly", spec.to_spec(), ops).with_consts(vec![]))
    }

    /// Sorting three distinct small values with min/max components.
    pub fn sort(&self) -> Result<Bench, Error> {
        let n = 3u64;
        let sort = bv_sort(n);
        let width = match &sort {
            Sort::BitVec(w) => *w,
            _ => unreachable!(),
        };
        let x = Expr::var("x", sort.clone());
        let y = Expr::var("y", sort.clone());
        let min = Func::new(
            "min",
            Expr::ite(Expr::ule(x.clone(), y.clone()), x.clone(), y.clone()),
        );
        let max = Func::new(
            "max",
            Expr::ite(Expr::ugt(x.clone(), y.clone()), x.clone(), y.clone()),
        );
        let ins: Vec<Expr> = (0..n).map(|i| Expr::var(format!("i{}", i), sort.clone())).collect();
        let outs: Vec<Expr> = (0..n).map(|i| Expr::var(format!("o{}", i), sort.clone())).collect();
        let mut pre = vec![Expr::distinct(ins.clone())];
        for input in &ins {
            pre.push(Expr::ule(Expr::bitvec(0, width), input.clone()));
            pre.push(Expr::ult(input.clone(), Expr::bitvec(n, width)));
        }
        let phi = Expr::and(
            outs.iter()
                .enumerate()
                .map(|(i, out)| Expr::eq(out.clone(), Expr::bitvec(i as u64, width)))
                .collect(),
        );
        let spec = Spec::with_precond("sort", phi, outs, ins, Expr::and(pre))?;
        let ops = OpLib::unbounded(vec![min, max]);
        Ok(Bench::new("sort", spec, ops).with_consts(vec![]))
    }

    /// Reversing a four-element array with an adjacent-swap component.
    pub fn array(&self) -> Result<Bench, Error> {
        let int_int = Sort::Array(Box::new(Sort::Int), Box::new(Sort::Int));
        let x = Expr::var("x", int_int);
        let p = Expr::int_var("p");

        let swap = |a: Expr, i: Expr, j: Expr| {
            let b = Expr::store(a.clone(), i.clone(), Expr::select(a.clone(), j.clone()));
            Expr::store(b, j, Expr::select(a, i))
        };
        let op = Func::new(
            "swap",
            swap(x.clone(), p.clone(), Expr::add(p.clone(), Expr::int(1))),
        );

        let permutation = |array: Expr, perm: &[i64]| {
            let mut result = array.clone();
            for (from, &to) in perm.iter().enumerate() {
                if from as i64 != to {
                    result = Expr::store(
                        result,
                        Expr::int(to),
                        Expr::select(array.clone(), Expr::int(from as i64)),
                    );
                }
            }
            result
        };
        let spec = Func::new("rev", permutation(x.clone(), &[3, 2, 1, 0]));
        let ops = OpLib::bounded(vec![(op, 6)]);
        Ok(Bench::new("array", spec.to_spec(), ops))
    }

    /// The full suite, in catalog order.
    pub fn all(&self) -> Result<Vec<Bench>, Error> {
        Ok(vec![
            self.rand_formula(40, 4)?,
            self.rand_dnf(4)?,
            self.npn4_1789()?,
            self.and()?,
            self.xor()?,
            self.mux()?,
            self.zero()?,
            self.add()?,
            self.add_nor3()?,
            self.identity()?,
            self.const_true()?,
            self.const_false()?,
            self.multiple_types()?,
            self.precond()?,
            self.constant()?,
            self.abs()?,
            self.pow()?,
            self.poly()?,
            self.sort()?,
            self.array()?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_all_entries_construct() {
        let suite = Base.all().unwrap();
        assert_eq!(suite.len(), 20);
        let names: Vec<&str> = suite.iter().map(|b| b.name.as_str()).collect();
        assert!(names.contains(&"rand_formula"));
        assert!(names.contains(&"npn4_1789"));
        assert!(names.contains(&"array"));
    }

    #[test]
    fn test_rand_formula_spec_size() {
        let bench = Base.rand_formula(40, 4).unwrap();
        // The relation is `o == body` where the body has exactly 40 nodes.
        match &bench.spec.phi {
            Expr::BinOp(crate::expr::BinOp::Eq, _, body) => assert_eq!(body.size(), 40),
            other => panic!("expected an equation, got {:?}", other),
        }
        assert_eq!(bench.spec.inputs.len(), 4);
        assert_eq!(bench.theory.as_deref(), Some("QF_BV"));
    }

    #[test]
    fn test_rand_formula_reproducible() {
        assert_eq!(Base.rand_formula(25, 3).unwrap(), Base.rand_formula(25, 3).unwrap());
    }

    #[test]
    fn test_and_uses_two_nands() {
        let bench = Base.and().unwrap();
        assert_eq!(bench.ops.max_uses(&Bl::nand2()), Some(Some(2)));
        assert!(bench.all_ops.is_some());
    }

    #[test]
    fn test_adder_is_relational() {
        let bench = Base.add().unwrap();
        assert_eq!(bench.spec.outputs.len(), 2);
        assert_eq!(bench.spec.inputs.len(), 3);
        assert_eq!(bench.desc, "1-bit full adder");
    }

    #[test]
    fn test_precond_is_wired() {
        let bench = Base.precond().unwrap();
        assert_ne!(bench.spec.precond, Expr::bool(true));
        assert_eq!(bench.spec.inputs.len(), 1);
    }

    #[test]
    fn test_const_false_relation() {
        let bench = Base.const_false().unwrap();
        assert_eq!(
            bench.spec.phi,
            Expr::eq(Expr::bool_var("z"), Expr::bool(false))
        );
    }

    #[test]
    fn test_sort_has_precondition_over_inputs() {
        let bench = Base.sort().unwrap();
        assert_eq!(bench.spec.outputs.len(), 3);
        assert_eq!(bench.spec.inputs.len(), 3);
        for var in bench.spec.precond.free_vars() {
            assert!(bench.spec.inputs.contains(&var));
        }
    }

    #[test]
    fn test_multiple_types_ops_bounded_once() {
        let bench = Base.multiple_types().unwrap();
        for (_, uses) in &bench.ops {
            assert_eq!(*uses, Some(1));
        }
    }
}
