//! Janet completion: adding prolongations until a set of differential
//! polynomials (for one dependent function) is Janet-complete. Grounded on
//! `complete`/`CompleteSystem` in the source material (Algorithm C.1).

use crate::dpoly::DPoly;
use crate::error::JanetResult;
use crate::expr::Symbol;
use crate::multiplier::vec_multipliers;
use crate::ranking::Ctx;
use crate::reducer::reorder;
use std::collections::BTreeMap;

fn map_old_to_new(ctx: &Ctx, i: usize) -> Symbol {
    let n = ctx.independent().len();
    ctx.independent()[n - 1 - i].clone()
}

struct ClassEntry {
    monom: Vec<i64>,
    dp: DPoly,
    multipliers: Vec<usize>,
    nonmultipliers: Vec<usize>,
}

/// Complete a single dependent function's set of polynomials until every
/// derivative it could be prolonged to is already covered by some
/// multiplier class. Mirrors `complete`.
pub fn complete(s: &[DPoly], ctx: &Ctx) -> JanetResult<Vec<DPoly>> {
    let mut result = s.to_vec();
    if result.len() <= 1 {
        return Ok(result);
    }
    let vars: Vec<usize> = (0..ctx.independent().len()).collect();

    loop {
        let monomials: Vec<(DPoly, Vec<i64>)> = result
            .iter()
            .map(|dp| {
                let mut rev = dp.order().to_vec();
                rev.reverse();
                (dp.clone(), rev)
            })
            .collect();
        let ms: Vec<Vec<i64>> = monomials.iter().map(|(_, m)| m.clone()).collect();

        let classes: Vec<ClassEntry> = monomials
            .into_iter()
            .map(|(dp, monom)| {
                let (multipliers, nonmultipliers) = vec_multipliers(&monom, &ms, &vars);
                ClassEntry {
                    monom,
                    dp,
                    multipliers,
                    nonmultipliers,
                }
            })
            .collect();

        // Candidates: for every entry with at least one nonmultiplier,
        // bump each nonmultiplier index by one. Entries with no
        // nonmultipliers never contribute a surviving candidate — their
        // own monomial trivially belongs to their own Janet class, so the
        // membership check below always removes it.
        let mut candidates: Vec<(Vec<i64>, usize, DPoly)> = Vec::new();
        for entry in &classes {
            for &nvar in &entry.nonmultipliers {
                let mut cand = entry.monom.clone();
                cand[nvar] += 1;
                candidates.push((cand, nvar, entry.dp.clone()));
            }
        }

        let surviving: Vec<&(Vec<i64>, usize, DPoly)> = candidates
            .iter()
            .filter(|(cand, _, _)| {
                !classes.iter().any(|entry| {
                    entry
                        .multipliers
                        .iter()
                        .all(|&x| cand[x] >= entry.monom[x])
                        && entry
                            .nonmultipliers
                            .iter()
                            .all(|&x| cand[x] == entry.monom[x])
                })
            })
            .collect();

        if surviving.is_empty() {
            return Ok(result);
        }

        for (_cand, nvar, source) in surviving {
            let diff_var = map_old_to_new(ctx, *nvar);
            let prolonged = source.diff(&[diff_var], ctx)?;
            let rebuilt = DPoly::from_expr(prolonged.expression(), ctx)?;
            if !result.contains(&rebuilt) {
                result.push(rebuilt);
            }
        }
        result = reorder(result, ctx);
    }
}

/// Bucket `s` by dependent function, complete each bucket independently,
/// and merge back into one ascending-ordered list. Mirrors
/// `CompleteSystem`.
pub fn complete_system(s: &[DPoly], ctx: &Ctx) -> JanetResult<Vec<DPoly>> {
    let mut buckets: BTreeMap<Symbol, Vec<DPoly>> = BTreeMap::new();
    for dp in s {
        buckets.entry(dp.lfunc().clone()).or_default().push(dp.clone());
    }
    let mut result = Vec::new();
    for (_func, bucket) in buckets {
        result.extend(complete(&bucket, ctx)?);
    }
    Ok(reorder(result, ctx))
}
