//! The `Expr` type: the minimal symbolic-expression surface this crate
//! needs from a host computer-algebra engine (construction, decomposition,
//! structural equality — see `spec.md` §9's capability-set list).

use super::number::Number;
use super::symbol::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbolic expression restricted to what a linear-PDE Janet-basis
/// engine needs: rational arithmetic over independent variables, and
/// function applications / derivative atoms of the dependent functions.
///
/// `Function` is the order-0 case (`u(x, y)`); `Derivative` carries the
/// per-variable differentiation multiset. Both store `args`, the tuple of
/// independent variables the function is applied to — every dependent
/// function in this crate's scope is applied to the full `independent`
/// tuple (spec.md §6 "Inputs"), so `args` is always that tuple, never an
/// arbitrary sub-expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Number(Number),
    Symbol(Symbol),
    Add(Vec<Expr>),
    Mul(Vec<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Function {
        name: Symbol,
        args: Vec<Symbol>,
    },
    Derivative {
        func: Symbol,
        args: Vec<Symbol>,
        var_counts: Vec<(Symbol, u32)>,
    },
}

impl Expr {
    pub fn integer(value: i64) -> Self {
        Expr::Number(Number::integer(value))
    }

    pub fn number(value: Number) -> Self {
        Expr::Number(value)
    }

    pub fn symbol(sym: Symbol) -> Self {
        Expr::Symbol(sym)
    }

    pub fn add(terms: Vec<Expr>) -> Self {
        super::simplify::simplify(Expr::Add(terms))
    }

    pub fn mul(factors: Vec<Expr>) -> Self {
        super::simplify::simplify(Expr::Mul(factors))
    }

    pub fn pow(base: Expr, exp: Expr) -> Self {
        super::simplify::simplify(Expr::Pow(Box::new(base), Box::new(exp)))
    }

    pub fn neg(self) -> Self {
        Expr::mul(vec![Expr::integer(-1), self])
    }

    pub fn sub(self, other: Expr) -> Self {
        Expr::add(vec![self, other.neg()])
    }

    pub fn div(self, other: Expr) -> Self {
        Expr::mul(vec![self, Expr::pow(other, Expr::integer(-1))])
    }

    /// Construct a zeroth-order application `name(args...)`.
    pub fn function(name: Symbol, args: Vec<Symbol>) -> Self {
        Expr::Function { name, args }
    }

    /// Construct a formal partial derivative, merging/normalizing the
    /// per-variable multiplicities. Falls back to a plain `Function` when
    /// every multiplicity cancels to zero.
    pub fn derivative(func: Symbol, args: Vec<Symbol>, var_counts: Vec<(Symbol, u32)>) -> Self {
        let normalized = normalize_var_counts(var_counts);
        if normalized.is_empty() {
            Expr::Function { name: func, args }
        } else {
            Expr::Derivative {
                func,
                args,
                var_counts: normalized,
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Number(n) if n.is_one())
    }

    /// Additive decomposition: `Add.make_args` in the host-engine sense.
    pub fn additive_terms(&self) -> Vec<Expr> {
        match self {
            Expr::Add(terms) => terms.clone(),
            other => vec![other.clone()],
        }
    }

    /// Multiplicative decomposition: `Mul.make_args`.
    pub fn multiplicative_factors(&self) -> Vec<Expr> {
        match self {
            Expr::Mul(factors) => factors.clone(),
            other => vec![other.clone()],
        }
    }

    /// Structural (not merely mathematical) equality, after normalization.
    pub fn structural_eq(&self, other: &Expr) -> bool {
        self.clone().simplify() == other.clone().simplify()
    }

    pub fn simplify(self) -> Expr {
        super::simplify::simplify(self)
    }

    /// True if this atom is a function application or derivative of `name`.
    pub fn is_application_of(&self, name: &Symbol) -> bool {
        match self {
            Expr::Function { name: n, .. } => n == name,
            Expr::Derivative { func, .. } => func == name,
            _ => false,
        }
    }

    pub fn function_name(&self) -> Option<&Symbol> {
        match self {
            Expr::Function { name, .. } => Some(name),
            Expr::Derivative { func, .. } => Some(func),
            _ => None,
        }
    }
}

fn normalize_var_counts(mut counts: Vec<(Symbol, u32)>) -> Vec<(Symbol, u32)> {
    counts.retain(|(_, c)| *c != 0);
    let mut merged: Vec<(Symbol, u32)> = Vec::with_capacity(counts.len());
    for (sym, c) in counts {
        if let Some(entry) = merged.iter_mut().find(|(s, _)| *s == sym) {
            entry.1 += c;
        } else {
            merged.push((sym, c));
        }
    }
    merged.retain(|(_, c)| *c != 0);
    merged.sort_by(|a, b| a.0.cmp(&b.0));
    merged
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Symbol(s) => write!(f, "{s}"),
            Expr::Add(terms) => {
                let rendered: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
                write!(f, "({})", rendered.join(" + "))
            }
            Expr::Mul(factors) => {
                let rendered: Vec<String> = factors.iter().map(|t| t.to_string()).collect();
                write!(f, "({})", rendered.join("*"))
            }
            Expr::Pow(base, exp) => write!(f, "{base}^{exp}"),
            Expr::Function { name, args } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{name}({})", rendered.join(", "))
            }
            Expr::Derivative {
                func,
                args,
                var_counts,
            } => {
                let rendered_args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                let mut vars = Vec::new();
                for (sym, count) in var_counts {
                    for _ in 0..*count {
                        vars.push(sym.to_string());
                    }
                }
                write!(
                    f,
                    "diff({}({}), {})",
                    func,
                    rendered_args.join(", "),
                    vars.join(", ")
                )
            }
        }
    }
}
