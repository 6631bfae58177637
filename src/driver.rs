//! Top-level driver: computes the Janet basis of a finite system of
//! homogeneous linear PDEs. Plays the role `buchberger_algorithm` plays for
//! Gröbner bases — a single entry point wrapping the fixpoint loop of
//! autoreduce / complete / integrability-conditions / reduce. Grounded on
//! `Janet_Basis.__init__` in the source material.

use crate::completion::complete_system;
use crate::dpoly::DPoly;
use crate::error::{JanetError, JanetResult};
use crate::expr::{Expr, Symbol};
use crate::integrability::split_by_function;
use crate::ranking::{Ctx, OrderKind};
use crate::reducer::{autoreduce, reduce_s, reorder};

/// Bounds the basis-completion fixpoint loop. The source material loops
/// unconditionally until the system stabilizes; this crate bounds it the
/// same way `mathhook_core`'s Buchberger implementation bounds its own
/// main loop, so a non-involutive or malformed system fails loudly rather
/// than looping forever.
const MAX_DRIVER_ITERATIONS: usize = 500;

/// Compute the Janet basis of `equations`, a system of homogeneous linear
/// PDEs in `dependent` functions of `independent` variables, ranked by
/// `order`.
///
/// Returns the auto-reduced, Janet-complete, integrability-closed basis as
/// a set of differential polynomials, ascending by leading derivative.
pub fn janet_basis(
    equations: Vec<Expr>,
    dependent: Vec<Symbol>,
    independent: Vec<Symbol>,
    order: OrderKind,
) -> JanetResult<Vec<DPoly>> {
    let ctx = Ctx::new(dependent, independent, order);

    let mut s: Vec<DPoly> = equations
        .into_iter()
        .map(|e| DPoly::from_expr(e, &ctx))
        .collect::<JanetResult<Vec<_>>>()?;
    s = reorder(s, &ctx);

    let mut previous: Option<Vec<DPoly>> = None;
    let mut iterations = 0usize;

    loop {
        if previous.as_ref() == Some(&s) {
            return Ok(s);
        }
        previous = Some(s.clone());

        s = autoreduce(s, &ctx)?;
        s = complete_system(&s, &ctx)?;

        let conditions = split_by_function(&s, &ctx)?;
        let mut reduced: Vec<DPoly> = Vec::new();
        for cond in conditions {
            let r = reduce_s(cond, &s, &ctx)?;
            if !r.is_empty() {
                reduced.push(r);
            }
        }

        if reduced.is_empty() {
            return Ok(reorder(s, &ctx));
        }

        for r in reduced {
            if !s.contains(&r) {
                s.push(r);
            }
        }
        s = reorder(s, &ctx);

        iterations += 1;
        if iterations > MAX_DRIVER_ITERATIONS {
            return Err(JanetError::IterationLimitExceeded {
                limit: MAX_DRIVER_ITERATIONS,
            });
        }
    }
}
