//! Behavioral specifications for synthesized programs.
//!
//! A [`Spec`] is a relation between declared output and input variables,
//! optionally guarded by a precondition over the inputs. A [`Func`] is the
//! functional special case: a single output defined as an expression of the
//! inputs. Both are pure data; validation happens once at construction and
//! a constructed value is immutable.

use std::fmt;

use thiserror::Error;

use crate::expr::Expr;

/// Errors raised when assembling a specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("variable `{0}` is not declared as an input or output")]
    UndeclaredVariable(String),
    #[error("variable `{0}` is declared both as an input and as an output")]
    SharedVariable(String),
    #[error("declared term `{0}` is not a variable")]
    NotAVariable(String),
    #[error("invalid truth table `{0}`")]
    InvalidTruthTable(String),
}

/// A relational specification.
///
/// The relation `phi` may mention any declared input or output variable;
/// the precondition may mention inputs only. Inputs and outputs are
/// disjoint ordered sequences of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    pub name: String,
    pub phi: Expr,
    pub outputs: Vec<Expr>,
    pub inputs: Vec<Expr>,
    pub precond: Expr,
}

impl Spec {
    /// Builds a specification with the trivial precondition `true`.
    pub fn new(
        name: impl Into<String>,
        phi: Expr,
        outputs: Vec<Expr>,
        inputs: Vec<Expr>,
    ) -> Result<Self, SpecError> {
        Self::with_precond(name, phi, outputs, inputs, Expr::bool(true))
    }

    /// Builds a specification with a precondition over the inputs.
    pub fn with_precond(
        name: impl Into<String>,
        phi: Expr,
        outputs: Vec<Expr>,
        inputs: Vec<Expr>,
        precond: Expr,
    ) -> Result<Self, SpecError> {
        let output_names = declared_names(&outputs)?;
        let input_names = declared_names(&inputs)?;
        for name in &output_names {
            if input_names.contains(name) {
                return Err(SpecError::SharedVariable(name.clone()));
            }
        }
        for var in phi.free_vars() {
            if let Some((name, _)) = var.as_var() {
                if !output_names.iter().any(|n| n == name)
                    && !input_names.iter().any(|n| n == name)
                {
                    return Err(SpecError::UndeclaredVariable(name.to_string()));
                }
            }
        }
        for var in precond.free_vars() {
            if let Some((name, _)) = var.as_var() {
                if !input_names.iter().any(|n| n == name) {
                    return Err(SpecError::UndeclaredVariable(name.to_string()));
                }
            }
        }
        Ok(Spec {
            name: name.into(),
            phi,
            outputs,
            inputs,
            precond,
        })
    }

    /// Number of inputs.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phi)
    }
}

fn declared_names(vars: &[Expr]) -> Result<Vec<String>, SpecError> {
    vars.iter()
        .map(|v| match v.as_var() {
            Some((name, _)) => Ok(name.to_string()),
            None => Err(SpecError::NotAVariable(v.to_string())),
        })
        .collect()
}

/// A functional specification: one output defined by an expression.
///
/// The inputs are the free variables of the body in first-occurrence
/// order; the output is a fresh variable of the body's sort. Funcs double
/// as library components: a synthesis operator is itself a named function
/// of its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Func {
    pub name: String,
    pub body: Expr,
    pub precond: Expr,
    pub inputs: Vec<Expr>,
    pub output: Expr,
}

impl Func {
    /// Builds a function spec with the trivial precondition.
    ///
    /// Cannot fail: the inputs are derived from the body, so every free
    /// variable is declared by construction.
    pub fn new(name: impl Into<String>, body: Expr) -> Self {
        let inputs = body.free_vars();
        let output = fresh_output(&body, &inputs);
        Func {
            name: name.into(),
            body,
            precond: Expr::bool(true),
            inputs,
            output,
        }
    }

    /// Builds a function spec guarded by a precondition over the inputs.
    pub fn with_precond(
        name: impl Into<String>,
        body: Expr,
        precond: Expr,
    ) -> Result<Self, SpecError> {
        let mut func = Func::new(name, body);
        for var in precond.free_vars() {
            if !func.inputs.contains(&var) {
                if let Some((name, _)) = var.as_var() {
                    return Err(SpecError::UndeclaredVariable(name.to_string()));
                }
            }
        }
        func.precond = precond;
        Ok(func)
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.inputs.len()
    }

    /// Renders the function as a relational [`Spec`]: `output == body`.
    pub fn to_spec(&self) -> Spec {
        Spec {
            name: self.name.clone(),
            phi: Expr::eq(self.output.clone(), self.body.clone()),
            outputs: vec![self.output.clone()],
            inputs: self.inputs.clone(),
            precond: self.precond.clone(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.body)
    }
}

fn fresh_output(body: &Expr, inputs: &[Expr]) -> Expr {
    let sort = body.sort();
    let taken = |name: &str| inputs.iter().any(|v| v.as_var().map(|(n, _)| n) == Some(name));
    if !taken("o") {
        return Expr::var("o", sort);
    }
    let mut i = 0;
    loop {
        let name = format!("o{}", i);
        if !taken(&name) {
            return Expr::var(name, sort);
        }
        i += 1;
    }
}

/// Builds an n-variable boolean function from a hex-encoded truth table.
///
/// The table has `4 * tt.len()` entries, which must be a power of two;
/// `n` is its base-2 logarithm. Entry `a` (bit `a` of the parsed value,
/// bit 0 least significant) gives the function value under assignment `a`,
/// where the assignment index counts with `x0` as the most significant
/// bit. The result is the disjunction of the minterms of all set entries,
/// over variables `x0 .. x{n-1}`.
///
/// `create_bool_func("1789")` is the 4-variable NPN class 0x1789.
pub fn create_bool_func(tt: &str) -> Result<Func, SpecError> {
    let value =
        u128::from_str_radix(tt, 16).map_err(|_| SpecError::InvalidTruthTable(tt.to_string()))?;
    let bits = 4 * tt.len();
    if !bits.is_power_of_two() || bits > 128 {
        return Err(SpecError::InvalidTruthTable(tt.to_string()));
    }
    let n = bits.trailing_zeros() as usize;
    let vars: Vec<Expr> = (0..n).map(|i| Expr::bool_var(format!("x{}", i))).collect();
    let mut minterms = Vec::new();
    for assignment in 0..bits as u128 {
        if (value >> assignment) & 1 == 1 {
            let literals = vars
                .iter()
                .enumerate()
                .map(|(i, var)| {
                    let positive = (assignment >> (n - 1 - i)) & 1 == 1;
                    if positive {
                        var.clone()
                    } else {
                        Expr::not(var.clone())
                    }
                })
                .collect();
            minterms.push(Expr::and(literals));
        }
    }
    Ok(Func::new(tt, Expr::or(minterms)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::expr::Sort;

    #[test]
    fn test_func_inputs_in_occurrence_order() {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        let f = Func::new("f", Expr::and(vec![y.clone(), Expr::not(x.clone())]));
        assert_eq!(f.inputs, vec![y, x]);
        assert_eq!(f.arity(), 2);
    }

    #[test]
    fn test_func_output_sort_and_freshness() {
        let o = Expr::int_var("o");
        let f = Func::new("f", Expr::add(o.clone(), Expr::int(1)));
        assert_eq!(f.output.as_var().map(|(n, _)| n), Some("o0"));
        assert_eq!(f.output.sort(), Sort::Int);
    }

    #[test]
    fn test_func_to_spec() {
        let x = Expr::bool_var("x");
        let f = Func::new("id", x.clone());
        let spec = f.to_spec();
        assert_eq!(spec.outputs.len(), 1);
        assert_eq!(spec.inputs, vec![x.clone()]);
        assert_eq!(spec.phi, Expr::eq(f.output.clone(), x));
        assert_eq!(spec.precond, Expr::bool(true));
    }

    #[test]
    fn test_spec_undeclared_variable() {
        let x = Expr::bool_var("x");
        let y = Expr::bool_var("y");
        let z = Expr::bool_var("z");
        let result = Spec::new("bad", Expr::and(vec![x.clone(), z]), vec![y], vec![x]);
        assert_eq!(result, Err(SpecError::UndeclaredVariable("z".to_string())));
    }

    #[test]
    fn test_spec_shared_variable() {
        let x = Expr::bool_var("x");
        let result = Spec::new("bad", x.clone(), vec![x.clone()], vec![x]);
        assert_eq!(result, Err(SpecError::SharedVariable("x".to_string())));
    }

    #[test]
    fn test_spec_precond_over_inputs_only() {
        let x = Expr::int_var("x");
        let y = Expr::int_var("y");
        let result = Spec::with_precond(
            "bad",
            Expr::eq(y.clone(), x.clone()),
            vec![y.clone()],
            vec![x.clone()],
            Expr::ge(y, Expr::int(0)),
        );
        assert_eq!(result, Err(SpecError::UndeclaredVariable("y".to_string())));
    }

    #[test]
    fn test_func_precond_undeclared() {
        let x = Expr::int_var("x");
        let y = Expr::int_var("y");
        let result = Func::with_precond("f", Expr::mul(x, Expr::int(2)), Expr::ge(y, Expr::int(0)));
        assert_eq!(result, Err(SpecError::UndeclaredVariable("y".to_string())));
    }

    #[test]
    fn test_create_bool_func_single_minterm() {
        // 0x8 over 2 variables: true only under x0 = 1, x1 = 1.
        let f = create_bool_func("8").unwrap();
        let x0 = Expr::bool_var("x0");
        let x1 = Expr::bool_var("x1");
        assert_eq!(f.body, Expr::and(vec![x0, x1]));
        assert_eq!(f.arity(), 2);
    }

    #[test]
    fn test_create_bool_func_constant_false() {
        let f = create_bool_func("0").unwrap();
        assert_eq!(f.body, Expr::bool(false));
        assert_eq!(f.arity(), 0);
    }

    #[test]
    fn test_create_bool_func_1789() {
        let f = create_bool_func("1789").unwrap();
        assert_eq!(f.arity(), 4);
        // 0x1789 has 7 set entries (assignments 0, 3, 7, 8, 9, 10, 12) with
        // 16 negative literals in total: each minterm is 1 + 4 literal
        // nodes + one node per negation, plus the top-level disjunction.
        assert_eq!(f.body.size(), 1 + 7 * 5 + 16);
    }

    #[test]
    fn test_create_bool_func_invalid() {
        assert!(create_bool_func("xyz").is_err());
        assert!(create_bool_func("123").is_err());
    }
}
