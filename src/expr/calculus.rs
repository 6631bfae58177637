//! Differentiation and substitution over `Expr`. Grounded on
//! `mathhook_core::calculus::derivatives::partial::mixed_partial`'s pattern
//! of folding a single-variable derivative operator over a variable list,
//! then simplifying once at the end rather than after each step.

use super::core::Expr;
use super::number::Number;
use super::symbol::Symbol;

impl Expr {
    /// Differentiate with respect to a single independent variable.
    pub fn diff_var(&self, var: &Symbol) -> Expr {
        match self {
            Expr::Number(_) => Expr::integer(0),
            Expr::Symbol(s) => {
                if s == var {
                    Expr::integer(1)
                } else {
                    Expr::integer(0)
                }
            }
            Expr::Add(terms) => Expr::add(terms.iter().map(|t| t.diff_var(var)).collect()),
            Expr::Mul(factors) => {
                // Product rule: sum over replacing factor i with its derivative.
                let mut terms = Vec::with_capacity(factors.len());
                for i in 0..factors.len() {
                    let mut parts = factors.clone();
                    parts[i] = parts[i].diff_var(var);
                    terms.push(Expr::mul(parts));
                }
                Expr::add(terms)
            }
            Expr::Pow(base, exp) => {
                // Only the constant-exponent power rule is needed here: every
                // exponent arising in this crate's coefficients is a plain
                // rational literal, never a symbolic expression.
                match exp.as_ref() {
                    Expr::Number(n) => {
                        let new_exp = Expr::Number(n.clone() - Number::one());
                        let dbase = base.diff_var(var);
                        Expr::mul(vec![
                            Expr::Number(n.clone()),
                            Expr::pow((**base).clone(), new_exp),
                            dbase,
                        ])
                    }
                    _ => Expr::integer(0),
                }
            }
            Expr::Function { name, args } => {
                if args.contains(var) {
                    Expr::derivative(name.clone(), args.clone(), vec![(var.clone(), 1)])
                } else {
                    Expr::integer(0)
                }
            }
            Expr::Derivative {
                func,
                args,
                var_counts,
            } => {
                if args.contains(var) {
                    let mut counts = var_counts.clone();
                    counts.push((var.clone(), 1));
                    Expr::derivative(func.clone(), args.clone(), counts)
                } else {
                    Expr::integer(0)
                }
            }
        }
    }

    /// Differentiate with respect to a sequence of variables, in order,
    /// simplifying once at the end.
    pub fn diff_vars(&self, vars: &[Symbol]) -> Expr {
        let mut current = self.clone();
        for var in vars {
            current = current.diff_var(var);
        }
        current.simplify()
    }

    /// Replace every occurrence of `var` with `replacement`. `Function` and
    /// `Derivative` atoms are left untouched: this crate never substitutes
    /// into a dependent-function atom, only into the rational coefficients
    /// built from `Number`/`Symbol`/`Add`/`Mul`/`Pow`.
    pub fn subs(&self, var: &Symbol, replacement: &Expr) -> Expr {
        match self {
            Expr::Number(_) => self.clone(),
            Expr::Symbol(s) => {
                if s == var {
                    replacement.clone()
                } else {
                    self.clone()
                }
            }
            Expr::Add(terms) => {
                Expr::add(terms.iter().map(|t| t.subs(var, replacement)).collect())
            }
            Expr::Mul(factors) => {
                Expr::mul(factors.iter().map(|f| f.subs(var, replacement)).collect())
            }
            Expr::Pow(base, exp) => Expr::pow(base.subs(var, replacement), exp.subs(var, replacement)),
            Expr::Function { .. } | Expr::Derivative { .. } => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_rule_on_symbol() {
        let x = Symbol::new("x");
        let e = Expr::pow(Expr::symbol(x.clone()), Expr::integer(3));
        let d = e.diff_vars(&[x]);
        assert_eq!(
            d,
            Expr::mul(vec![Expr::integer(3), Expr::pow(Expr::symbol(Symbol::new("x")), Expr::integer(2))])
        );
    }

    #[test]
    fn function_diff_produces_derivative_atom() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let w = Symbol::new("w");
        let f = Expr::function(w.clone(), vec![x.clone(), y.clone()]);
        let d = f.diff_vars(&[x.clone()]);
        assert_eq!(
            d,
            Expr::derivative(w, vec![x.clone(), y], vec![(x, 1)])
        );
    }

    #[test]
    fn diff_with_respect_to_unrelated_var_is_zero() {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let w = Symbol::new("w");
        let f = Expr::function(w, vec![x]);
        assert_eq!(f.diff_vars(&[y]), Expr::integer(0));
    }

    #[test]
    fn subs_replaces_symbol_in_coefficient() {
        let x = Symbol::new("x");
        let e = Expr::mul(vec![Expr::integer(2), Expr::symbol(x.clone())]);
        let replaced = e.subs(&x, &Expr::integer(5));
        assert_eq!(replaced, Expr::integer(10));
    }
}
