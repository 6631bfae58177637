//! Property-based checks for the two algebraic invariants spec §8 calls
//! out as should-hold-for-all-inputs: the ranking is a strict total order,
//! and autoreduction is idempotent.

use janetbasis::prelude::*;
use proptest::prelude::*;

fn ctx_xy_w() -> Ctx {
    Ctx::new(
        vec![Symbol::new("w")],
        vec![Symbol::new("x"), Symbol::new("y")],
        OrderKind::Grevlex,
    )
}

fn w_derivative(ctx: &Ctx, dx: u32, dy: u32) -> Expr {
    let x = ctx.independent()[0].clone();
    let y = ctx.independent()[1].clone();
    let w = ctx.dependent()[0].clone();
    Expr::derivative(w, vec![x.clone(), y.clone()], vec![(x, dx), (y, dy)])
}

proptest! {
    /// `gt(a,b)` is a strict total order: for any two distinct derivative
    /// orders, exactly one of `gt(a,b)`, `gt(b,a)` holds.
    #[test]
    fn gt_is_trichotomous(ax in 0u32..5, ay in 0u32..5, bx in 0u32..5, by in 0u32..5) {
        prop_assume!((ax, ay) != (bx, by));
        let ctx = ctx_xy_w();
        let a = ctx.comparison_vector(&w_derivative(&ctx, ax, ay));
        let b = ctx.comparison_vector(&w_derivative(&ctx, bx, by));

        let forward = ctx.gt(&a, &b);
        let backward = ctx.gt(&b, &a);
        prop_assert_ne!(forward, backward);
    }

    /// Transitivity: if `a > b` and `b > c` then `a > c`.
    #[test]
    fn gt_is_transitive(ax in 0u32..4, ay in 0u32..4, bx in 0u32..4, by in 0u32..4, cx in 0u32..4, cy in 0u32..4) {
        let ctx = ctx_xy_w();
        let a = ctx.comparison_vector(&w_derivative(&ctx, ax, ay));
        let b = ctx.comparison_vector(&w_derivative(&ctx, bx, by));
        let c = ctx.comparison_vector(&w_derivative(&ctx, cx, cy));

        if ctx.gt(&a, &b) && ctx.gt(&b, &c) {
            prop_assert!(ctx.gt(&a, &c));
        }
    }

    /// `Autoreduce ∘ Autoreduce = Autoreduce` for small random systems of
    /// bare derivative monomials of one dependent function.
    #[test]
    fn autoreduce_is_idempotent(
        orders in prop::collection::vec((0u32..4, 0u32..4), 1..5)
    ) {
        let ctx = ctx_xy_w();
        let mut seen = std::collections::HashSet::new();
        let system: Vec<DPoly> = orders
            .into_iter()
            .filter(|o| seen.insert(*o))
            .filter(|(dx, dy)| *dx != 0 || *dy != 0)
            .map(|(dx, dy)| DPoly::from_expr(w_derivative(&ctx, dx, dy), &ctx).unwrap())
            .collect();

        let once = autoreduce(system, &ctx).unwrap();
        let twice = autoreduce(once.clone(), &ctx).unwrap();
        prop_assert_eq!(once, twice);
    }
}
