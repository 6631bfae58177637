//! Integrability conditions: the Janet-basis analogue of Gröbner basis
//! S-polynomials (`mathhook_core::algebra::groebner::s_polynomial`'s role),
//! grounded on `FindIntegrableConditions`/`split_by_function` in the
//! source material. For each pair of polynomials (within one dependent
//! function's bucket), tries every nonmultiplier of one against every
//! nonempty subset of the other's multipliers, looking for a shared
//! higher derivative — a witness that cross-differentiating the two
//! should cancel (Schwarz's theorem on mixed partials).

use crate::dpoly::DPoly;
use crate::dterm::DTerm;
use crate::error::JanetResult;
use crate::expr::Symbol;
use crate::multiplier::vec_multipliers;
use crate::ranking::Ctx;
use std::collections::BTreeMap;

fn map_old_to_new(ctx: &Ctx, i: usize) -> Symbol {
    let n = ctx.independent().len();
    ctx.independent()[n - 1 - i].clone()
}

/// Nonempty subsets of `items`, in no particular order.
fn nonempty_subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let n = items.len();
    let mut out = Vec::new();
    for mask in 1u32..(1u32 << n) {
        let mut subset = Vec::new();
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                subset.push(item.clone());
            }
        }
        out.push(subset);
    }
    out
}

struct MultiplierEntry {
    dp: DPoly,
    multipliers: Vec<Symbol>,
    nonmultipliers: Vec<Symbol>,
}

fn classify(s: &[DPoly], ctx: &Ctx) -> Vec<MultiplierEntry> {
    let vars: Vec<usize> = (0..ctx.independent().len()).collect();
    let monomials: Vec<(DPoly, Vec<i64>)> = s
        .iter()
        .map(|dp| {
            let mut rev = dp.order().to_vec();
            rev.reverse();
            (dp.clone(), rev)
        })
        .collect();
    let ms: Vec<Vec<i64>> = monomials.iter().map(|(_, m)| m.clone()).collect();

    monomials
        .into_iter()
        .map(|(dp, monom)| {
            let (mults, nonmults) = vec_multipliers(&monom, &ms, &vars);
            MultiplierEntry {
                dp,
                multipliers: mults.into_iter().map(|i| map_old_to_new(ctx, i)).collect(),
                nonmultipliers: nonmults.into_iter().map(|i| map_old_to_new(ctx, i)).collect(),
            }
        })
        .collect()
}

/// Combine two differentiated polynomials' terms into one new `DPoly`:
/// where comparison vectors coincide, subtract; otherwise keep both sides.
fn assemble_difference(d1: &DPoly, d2: &DPoly, ctx: &Ctx) -> JanetResult<DPoly> {
    let mut first: BTreeMap<Vec<i64>, DTerm> = BTreeMap::new();
    for t in d1.terms() {
        first.insert(t.comparison_vector().to_vec(), t.clone());
    }
    let mut rest: Vec<DTerm> = Vec::new();
    for t in d2.terms() {
        let key = t.comparison_vector().to_vec();
        if let Some(existing) = first.get_mut(&key) {
            let new_coeff = existing.coeff().clone().sub(t.coeff().clone());
            *existing = existing.with_coeff(new_coeff);
        } else {
            rest.push(t.clone());
        }
    }
    rest.extend(first.into_values());
    DPoly::from_dterms(rest, ctx)
}

/// Find integrability conditions within a single dependent function's
/// bucket of polynomials (already Janet-complete). Mirrors
/// `FindIntegrableConditions`.
pub fn find_integrability_conditions(s: &[DPoly], ctx: &Ctx) -> JanetResult<Vec<DPoly>> {
    if s.len() <= 1 {
        return Ok(Vec::new());
    }
    let entries = classify(s, ctx);
    let mut result = Vec::new();

    for i in 0..entries.len() {
        for j in 0..entries.len() {
            if i == j {
                continue;
            }
            let e1 = &entries[i];
            let e2 = &entries[j];
            for n in &e1.nonmultipliers {
                let a1 = e1.dp.lder().diff_var(n);
                for m in nonempty_subsets(&e2.multipliers) {
                    let a2 = e2.dp.lder().diff_vars(&m);
                    if a1.structural_eq(&a2) {
                        let d1 = e1.dp.diff(std::slice::from_ref(n), ctx)?;
                        let d2 = e2.dp.diff(&m, ctx)?;
                        result.push(assemble_difference(&d1, &d2, ctx)?);
                    }
                }
            }
        }
    }
    Ok(result)
}

/// Bucket `s` by dependent function and collect integrability conditions
/// within each bucket. Mirrors `split_by_function`.
pub fn split_by_function(s: &[DPoly], ctx: &Ctx) -> JanetResult<Vec<DPoly>> {
    let mut buckets: BTreeMap<Symbol, Vec<DPoly>> = BTreeMap::new();
    for dp in s {
        buckets.entry(dp.lfunc().clone()).or_default().push(dp.clone());
    }
    let mut result = Vec::new();
    for (_func, bucket) in buckets {
        result.extend(find_integrability_conditions(&bucket, ctx)?);
    }
    Ok(result)
}
