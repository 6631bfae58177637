//! A minimal simplifier: just enough to keep coefficients (rational
//! functions of the independent variables) in a canonical sum-of-products
//! form. Grounded on `mathhook_core::simplify::arithmetic` (flatten nested
//! Add/Mul, fold numeric literals, collect like terms/bases) but trimmed to
//! the operations this crate's coefficients actually need — no
//! trigonometric or special-function identities.

use super::core::Expr;
use super::number::Number;

pub fn simplify(expr: Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) | Expr::Function { .. } | Expr::Derivative { .. } => {
            expr
        }
        Expr::Add(terms) => simplify_add(terms),
        Expr::Mul(factors) => simplify_mul(factors),
        Expr::Pow(base, exp) => simplify_pow(*base, *exp),
    }
}

fn flatten<F>(items: Vec<Expr>, is_same_shape: F) -> Vec<Expr>
where
    F: Fn(&Expr) -> Option<Vec<Expr>>,
{
    let mut out = Vec::with_capacity(items.len());
    let mut stack: Vec<Expr> = items.into_iter().rev().collect();
    while let Some(item) = stack.pop() {
        let simplified = simplify(item);
        if let Some(mut nested) = is_same_shape(&simplified) {
            nested.reverse();
            stack.extend(nested);
        } else {
            out.push(simplified);
        }
    }
    out
}

fn canonical_key(e: &Expr) -> String {
    e.to_string()
}

/// Pull a single leading rational multiplier off of a (simplified) term,
/// returning `(coefficient, base)`. `base` is `None` when the whole term
/// was numeric.
fn extract_coeff_base(term: &Expr) -> (Number, Option<Expr>) {
    match term {
        Expr::Number(n) => (n.clone(), None),
        Expr::Mul(factors) => {
            if let Some(Expr::Number(n)) = factors.first() {
                let rest = &factors[1..];
                let base = if rest.len() == 1 {
                    rest[0].clone()
                } else {
                    Expr::Mul(rest.to_vec())
                };
                (n.clone(), Some(base))
            } else {
                (Number::one(), Some(term.clone()))
            }
        }
        other => (Number::one(), Some(other.clone())),
    }
}

fn simplify_add(terms: Vec<Expr>) -> Expr {
    let flat = flatten(terms, |e| match e {
        Expr::Add(inner) => Some(inner.clone()),
        _ => None,
    });

    let mut numeric_sum = Number::zero();
    let mut groups: Vec<(Expr, Number)> = Vec::new();

    for term in flat {
        let (coeff, base) = extract_coeff_base(&term);
        match base {
            None => numeric_sum = numeric_sum + coeff,
            Some(b) => {
                let key = canonical_key(&b);
                if let Some(entry) = groups.iter_mut().find(|(g, _)| canonical_key(g) == key) {
                    entry.1 = entry.1.clone() + coeff;
                } else {
                    groups.push((b, coeff));
                }
            }
        }
    }

    let mut rebuilt: Vec<Expr> = Vec::new();
    for (base, coeff) in groups {
        if coeff.is_zero() {
            continue;
        }
        if coeff.is_one() {
            rebuilt.push(base);
        } else {
            rebuilt.push(simplify(Expr::Mul(vec![Expr::Number(coeff), base])));
        }
    }
    rebuilt.sort_by_key(canonical_key);

    if !numeric_sum.is_zero() || rebuilt.is_empty() {
        rebuilt.insert(0, Expr::Number(numeric_sum));
    }

    if rebuilt.len() == 1 {
        rebuilt.into_iter().next().unwrap()
    } else {
        Expr::Add(rebuilt)
    }
}

fn extract_base_exp(factor: &Expr) -> (Expr, Option<Number>) {
    match factor {
        Expr::Pow(base, exp) => {
            if let Expr::Number(n) = exp.as_ref() {
                (base.as_ref().clone(), Some(n.clone()))
            } else {
                (factor.clone(), None)
            }
        }
        other => (other.clone(), Some(Number::one())),
    }
}

fn simplify_mul(factors: Vec<Expr>) -> Expr {
    let flat = flatten(factors, |e| match e {
        Expr::Mul(inner) => Some(inner.clone()),
        _ => None,
    });

    let mut numeric_product = Number::one();
    let mut groups: Vec<(Expr, Option<Number>)> = Vec::new();

    for factor in flat {
        if let Expr::Number(n) = &factor {
            if n.is_zero() {
                return Expr::Number(Number::zero());
            }
            numeric_product = numeric_product * n.clone();
            continue;
        }
        let (base, exp) = extract_base_exp(&factor);
        let key = canonical_key(&base);
        if let Some(entry) = groups.iter_mut().find(|(g, _)| canonical_key(g) == key) {
            entry.1 = match (entry.1.clone(), exp) {
                (Some(a), Some(b)) => Some(a + b),
                _ => None,
            };
        } else {
            groups.push((base, exp));
        }
    }

    if numeric_product.is_zero() {
        return Expr::Number(Number::zero());
    }

    let mut rebuilt: Vec<Expr> = Vec::new();
    for (base, exp) in groups {
        match exp {
            Some(e) if e.is_zero() => continue,
            Some(e) if e.is_one() => rebuilt.push(base),
            Some(e) => rebuilt.push(simplify(Expr::Pow(Box::new(base), Box::new(Expr::Number(e))))),
            None => rebuilt.push(base),
        }
    }
    rebuilt.sort_by_key(canonical_key);

    if !numeric_product.is_one() || rebuilt.is_empty() {
        rebuilt.insert(0, Expr::Number(numeric_product));
    }

    if rebuilt.len() == 1 {
        rebuilt.into_iter().next().unwrap()
    } else {
        Expr::Mul(rebuilt)
    }
}

fn simplify_pow(base: Expr, exp: Expr) -> Expr {
    let base = simplify(base);
    let exp = simplify(exp);

    if let Expr::Number(e) = &exp {
        if e.is_zero() {
            return Expr::Number(Number::one());
        }
        if e.is_one() {
            return base;
        }
        if let (Expr::Number(b), Number::Integer(ei)) = (&base, e) {
            return Expr::Number(b.pow_i32(*ei as i32));
        }
    }
    Expr::Pow(Box::new(base), Box::new(exp))
}
