//! Reduction and autoreduction of differential polynomials. Grounded on
//! `_reduce_inner`/`reduce`/`reduceS`/`Autoreduce`/`Reorder` in the source
//! material (Algorithm 2.4's "same leading derivative" / "prolongation"
//! cases).

use crate::dpoly::DPoly;
use crate::dterm::DTerm;
use crate::error::{JanetError, JanetResult};
use crate::expr::{Expr, Symbol};
use crate::ranking::Ctx;

/// Bounds the fixpoint loops below. The source material loops
/// unconditionally; this crate bounds it so a malformed or cyclic input
/// fails with `IterationLimitExceeded` instead of hanging.
const MAX_REDUCE_ITERATIONS: usize = 4096;

fn dterm_lt(a: &DTerm, b: &DTerm, ctx: &Ctx) -> bool {
    a != b && ctx.gt(b.comparison_vector(), a.comparison_vector())
}

fn dpoly_lt(a: &DPoly, b: &DPoly, ctx: &Ctx) -> bool {
    for (ta, tb) in a.terms().iter().zip(b.terms().iter()) {
        if ta == tb {
            continue;
        }
        return dterm_lt(ta, tb, ctx);
    }
    false
}

/// Sort ascending by the context's ranking (smallest leading derivative
/// first). Mirrors `Reorder`, whose `ascending` flag is unused in the
/// source material — `sorted(S)` always produces ascending order there
/// regardless of the caller's intent, so this crate does the same.
pub fn reorder(mut dps: Vec<DPoly>, ctx: &Ctx) -> Vec<DPoly> {
    dps.sort_by(|a, b| {
        if dpoly_lt(a, b, ctx) {
            std::cmp::Ordering::Less
        } else if dpoly_lt(b, a, ctx) {
            std::cmp::Ordering::Greater
        } else {
            std::cmp::Ordering::Equal
        }
    });
    dps
}

fn diff_vars_from(independent: &[Symbol], diff: &[i64]) -> Vec<Symbol> {
    let mut vars = Vec::new();
    for (i, var) in independent.iter().enumerate() {
        let count = diff[i];
        if count != 0 {
            for _ in 0..count.unsigned_abs() {
                vars.push(var.clone());
            }
        }
    }
    vars
}

/// One reduction step of `e1` against `e2`: finds the first term of `e1`
/// sharing `e2`'s leading function whose order dominates (or equals)
/// `e2`'s leading order, and eliminates it. Returns `e1` unchanged if no
/// such term exists.
fn reduce_once(e1: &DPoly, e2: &DPoly, ctx: &Ctx) -> JanetResult<DPoly> {
    let target_function = e2.lfunc().clone();

    for t in e1.terms() {
        if t.function() != &target_function {
            continue;
        }
        let c = t.coeff().clone();
        let diff: Vec<i64> = t
            .order()
            .iter()
            .zip(e2.order().iter())
            .map(|(a, b)| a - b)
            .collect();

        let same_leading_derivative = diff.iter().all(|&h| h == 0);
        let is_prolongation = diff.iter().all(|&h| h >= 0);

        if !same_leading_derivative && !is_prolongation {
            continue;
        }

        let mut changed: Vec<DTerm> = e1.terms().to_vec();
        let mut subs: Vec<DTerm> = Vec::new();

        let contributions: Vec<DTerm> = if same_leading_derivative {
            e2.terms().to_vec()
        } else {
            let vars = diff_vars_from(ctx.independent(), &diff);
            e2.terms()
                .iter()
                .flat_map(|p2| p2.diff(&vars, ctx))
                .collect()
        };

        for p2 in &contributions {
            let pc = Expr::mul(vec![p2.coeff().clone(), c.clone()]).simplify();
            if let Some(hit) = changed
                .iter_mut()
                .find(|x| x.comparison_vector() == p2.comparison_vector())
            {
                let new_coeff = hit.coeff().clone().sub(pc);
                *hit = hit.with_coeff(new_coeff);
            } else {
                let dt = DTerm::new(pc.neg(), p2.derivative().clone(), ctx);
                if !dt.is_zero() {
                    subs.push(dt);
                }
            }
        }

        changed.extend(subs);
        changed.retain(|d| !d.is_zero());
        return DPoly::from_dterms(changed, ctx);
    }

    Ok(e1.clone())
}

/// Reduce `e1` against a single `e2` to a fixpoint.
pub fn reduce(e1: &DPoly, e2: &DPoly, ctx: &Ctx) -> JanetResult<DPoly> {
    let mut current = e1.clone();
    for _ in 0..MAX_REDUCE_ITERATIONS {
        let next = reduce_once(&current, e2, ctx)?;
        if next == current {
            return Ok(next);
        }
        current = next;
    }
    Err(JanetError::IterationLimitExceeded {
        limit: MAX_REDUCE_ITERATIONS,
    })
}

/// Reduce `e` against every nonzero member of `basis`, repeating full
/// passes until a pass leaves `e` unchanged. Mirrors `reduceS`.
pub fn reduce_s(mut e: DPoly, basis: &[DPoly], ctx: &Ctx) -> JanetResult<DPoly> {
    for _ in 0..MAX_REDUCE_ITERATIONS {
        let mut reduced_last = false;
        for dp in basis {
            if dp.is_empty() {
                continue;
            }
            let enew = reduce(&e, dp, ctx)?;
            reduced_last = enew != e;
            e = enew;
        }
        if !reduced_last {
            return Ok(e);
        }
    }
    Err(JanetError::IterationLimitExceeded {
        limit: MAX_REDUCE_ITERATIONS,
    })
}

/// Autoreduce a whole system: repeatedly reduce each polynomial against
/// the growing "confirmed" prefix until nothing changes. Mirrors
/// `Autoreduce`'s index-creeping fixpoint.
pub fn autoreduce(s: Vec<DPoly>, ctx: &Ctx) -> JanetResult<Vec<DPoly>> {
    let mut dps = s;
    let mut i = 0usize;

    while i + 1 < dps.len() {
        let p: Vec<DPoly> = dps[..=i].to_vec();
        let r: Vec<DPoly> = dps[i + 1..].to_vec();

        let mut newdps: Vec<DPoly> = Vec::new();
        let mut have_reduced = false;
        for rr in &r {
            let rnew = reduce_s(rr.clone(), &p, ctx)?;
            if &rnew != rr {
                have_reduced = true;
            }
            if !rnew.is_empty() {
                newdps.push(rnew);
            }
        }

        let mut combined = p;
        for nd in newdps {
            if !combined.contains(&nd) {
                combined.push(nd);
            }
        }
        dps = reorder(combined, ctx);

        if have_reduced {
            i = 0;
        } else {
            i += 1;
        }
    }
    Ok(dps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::OrderKind;

    fn ctx() -> Ctx {
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let w = Symbol::new("w");
        Ctx::new(vec![w], vec![x, y], OrderKind::Grlex)
    }

    #[test]
    fn reducing_a_polynomial_against_itself_vanishes() {
        let ctx = ctx();
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let w = Symbol::new("w");
        let dw_x = Expr::derivative(w.clone(), vec![x.clone(), y.clone()], vec![(x.clone(), 1)]);
        let p = DPoly::from_expr(dw_x, &ctx).unwrap();
        let reduced = reduce(&p, &p, &ctx).unwrap();
        assert!(reduced.is_empty());
    }

    #[test]
    fn autoreduce_on_independent_leaders_is_a_no_op() {
        let ctx = ctx();
        let x = Symbol::new("x");
        let y = Symbol::new("y");
        let w = Symbol::new("w");
        let dw_x = Expr::derivative(w.clone(), vec![x.clone(), y.clone()], vec![(x.clone(), 1)]);
        let dw_y = Expr::derivative(w, vec![x, y.clone()], vec![(y, 1)]);
        let p1 = DPoly::from_expr(dw_x, &ctx).unwrap();
        let p2 = DPoly::from_expr(dw_y, &ctx).unwrap();
        let reduced = autoreduce(vec![p1.clone(), p2.clone()], &ctx).unwrap();
        assert_eq!(reduced.len(), 2);
    }
}
