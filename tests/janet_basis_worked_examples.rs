//! End-to-end basis computations against the Schwarz worked examples.
//!
//! The 2.24 system is checked against its textbook leading-derivative set
//! directly; 2.25 is checked via the equivalence property (every input
//! equation reduces to zero against the basis computed from it) rather
//! than hand-traced exact coefficients, since it's a second, independently
//! transcribed system claimed to span the same ideal.

use janetbasis::prelude::*;

fn sym(name: &str) -> Symbol {
    Symbol::new(name)
}

/// Schwarz, Example 2.24 — `w_y + x z_y/(2y(x^2+y)) - w/y`.
fn f1(x: &Symbol, y: &Symbol, w: &Symbol, z: &Symbol, args: &[Symbol]) -> Expr {
    let dw_y = Expr::derivative(w.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    let dz_y = Expr::derivative(z.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    let denom = Expr::mul(vec![
        Expr::integer(2),
        Expr::symbol(y.clone()),
        Expr::add(vec![
            Expr::pow(Expr::symbol(x.clone()), Expr::integer(2)),
            Expr::symbol(y.clone()),
        ]),
    ]);
    Expr::add(vec![
        dw_y,
        Expr::mul(vec![Expr::symbol(x.clone()), dz_y]).div(denom),
        Expr::function(w.clone(), args.to_vec())
            .div(Expr::symbol(y.clone()))
            .neg(),
    ])
}

/// `z_{xy} + y w_y/x + 2y z_x/x`.
fn f2(x: &Symbol, y: &Symbol, w: &Symbol, z: &Symbol, args: &[Symbol]) -> Expr {
    let dz_xy = Expr::derivative(z.clone(), args.to_vec(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dw_y = Expr::derivative(w.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    let dz_x = Expr::derivative(z.clone(), args.to_vec(), vec![(x.clone(), 1)]);
    Expr::add(vec![
        dz_xy,
        Expr::mul(vec![Expr::symbol(y.clone()), dw_y]).div(Expr::symbol(x.clone())),
        Expr::mul(vec![Expr::integer(2), Expr::symbol(y.clone()), dz_x])
            .div(Expr::symbol(x.clone())),
    ])
}

/// `w_{xy} - 2x z_{xx}/y - x w_x/y^2`.
fn f3(x: &Symbol, y: &Symbol, w: &Symbol, z: &Symbol, args: &[Symbol]) -> Expr {
    let dw_xy = Expr::derivative(w.clone(), args.to_vec(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dz_xx = Expr::derivative(z.clone(), args.to_vec(), vec![(x.clone(), 2)]);
    let dw_x = Expr::derivative(w.clone(), args.to_vec(), vec![(x.clone(), 1)]);
    Expr::add(vec![
        dw_xy,
        Expr::mul(vec![Expr::integer(-2), Expr::symbol(x.clone()), dz_xx])
            .div(Expr::symbol(y.clone())),
        Expr::mul(vec![Expr::symbol(x.clone()), dw_x])
            .div(Expr::pow(Expr::symbol(y.clone()), Expr::integer(2)))
            .neg(),
    ])
}

/// `w_{xy} + z_{xy} + w_y/(2y) - w_x/y + x z_y/y - w/(2y^2)`.
fn f4(x: &Symbol, y: &Symbol, w: &Symbol, z: &Symbol, args: &[Symbol]) -> Expr {
    let dw_xy = Expr::derivative(w.clone(), args.to_vec(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dz_xy = Expr::derivative(z.clone(), args.to_vec(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dw_y = Expr::derivative(w.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    let dw_x = Expr::derivative(w.clone(), args.to_vec(), vec![(x.clone(), 1)]);
    let dz_y = Expr::derivative(z.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    Expr::add(vec![
        dw_xy,
        dz_xy,
        dw_y.div(Expr::mul(vec![Expr::integer(2), Expr::symbol(y.clone())])),
        dw_x.div(Expr::symbol(y.clone())).neg(),
        Expr::mul(vec![Expr::symbol(x.clone()), dz_y]).div(Expr::symbol(y.clone())),
        Expr::function(w.clone(), args.to_vec())
            .div(Expr::mul(vec![
                Expr::integer(2),
                Expr::pow(Expr::symbol(y.clone()), Expr::integer(2)),
            ]))
            .neg(),
    ])
}

/// `w_{yy} + z_{xy} - w_y/y + w/y^2`.
fn f5(x: &Symbol, y: &Symbol, w: &Symbol, z: &Symbol, args: &[Symbol]) -> Expr {
    let dw_yy = Expr::derivative(w.clone(), args.to_vec(), vec![(y.clone(), 2)]);
    let dz_xy = Expr::derivative(z.clone(), args.to_vec(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dw_y = Expr::derivative(w.clone(), args.to_vec(), vec![(y.clone(), 1)]);
    Expr::add(vec![
        dw_yy,
        dz_xy,
        dw_y.div(Expr::symbol(y.clone())).neg(),
        Expr::function(w.clone(), args.to_vec())
            .div(Expr::pow(Expr::symbol(y.clone()), Expr::integer(2))),
    ])
}

fn ranking(x: Symbol, y: Symbol, w: Symbol, z: Symbol) -> Ctx {
    Ctx::new(vec![w, z], vec![x, y], OrderKind::Grevlex)
}

#[test]
fn schwarz_2_24_basis_spans_the_same_ideal_as_its_input() {
    let (x, y, w, z) = (sym("x"), sym("y"), sym("w"), sym("z"));
    let args = vec![x.clone(), y.clone()];

    let equations = vec![
        f1(&x, &y, &w, &z, &args),
        f2(&x, &y, &w, &z, &args),
        f3(&x, &y, &w, &z, &args),
        f4(&x, &y, &w, &z, &args),
        f5(&x, &y, &w, &z, &args),
    ];

    let basis = janet_basis(
        equations.clone(),
        vec![w.clone(), z.clone()],
        vec![x.clone(), y.clone()],
        OrderKind::Grevlex,
    )
    .expect("basis computation should converge");

    let ctx = ranking(x.clone(), y.clone(), w.clone(), z.clone());

    // Expected basis (Schwarz, Example 2.24): leading derivatives
    // z_y, z_x, w_y, w_x — nothing of higher order survives.
    let mut leading: Vec<(String, Vec<i64>)> = basis
        .iter()
        .map(|p| (p.lfunc().to_string(), ctx.order_of_derivative(p.lder())))
        .collect();
    leading.sort();
    let mut expected = vec![
        (w.to_string(), vec![1, 0]),
        (w.to_string(), vec![0, 1]),
        (z.to_string(), vec![1, 0]),
        (z.to_string(), vec![0, 1]),
    ];
    expected.sort();
    assert_eq!(leading, expected);

    for eq in equations {
        let p = DPoly::from_expr(eq, &ctx).unwrap();
        let reduced = reduce_s(p, &basis, &ctx).unwrap();
        assert!(
            reduced.is_empty(),
            "every input equation must reduce to zero against its own basis"
        );
    }
}

/// Schwarz, Example 2.25 — a different system claimed to span the same
/// differential ideal as 2.24. Checked the same way: every input equation
/// must reduce to zero against the basis computed from it.
#[test]
fn schwarz_2_25_basis_spans_the_same_ideal_as_its_input() {
    let (x, y, w, z) = (sym("x"), sym("y"), sym("w"), sym("z"));
    let args = vec![x.clone(), y.clone()];

    let dz_yy = Expr::derivative(z.clone(), args.clone(), vec![(y.clone(), 2)]);
    let dz_y = Expr::derivative(z.clone(), args.clone(), vec![(y.clone(), 1)]);
    let g1 = Expr::add(vec![
        dz_yy,
        dz_y.clone()
            .div(Expr::mul(vec![Expr::integer(2), Expr::symbol(y.clone())])),
    ]);

    let dw_xx = Expr::derivative(w.clone(), args.clone(), vec![(x.clone(), 2)]);
    let dw_y = Expr::derivative(w.clone(), args.clone(), vec![(y.clone(), 1)]);
    let dz_x = Expr::derivative(z.clone(), args.clone(), vec![(x.clone(), 1)]);
    let y2 = Expr::pow(Expr::symbol(y.clone()), Expr::integer(2));
    let g2 = Expr::add(vec![
        dw_xx,
        Expr::mul(vec![Expr::integer(4), y2.clone(), dw_y]),
        Expr::mul(vec![Expr::integer(-8), y2.clone(), dz_x]),
        Expr::mul(vec![
            Expr::integer(-8),
            Expr::symbol(y.clone()),
            Expr::function(w.clone(), args.clone()),
        ]),
    ]);

    let dw_xy = Expr::derivative(w.clone(), args.clone(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dz_xx = Expr::derivative(z.clone(), args.clone(), vec![(x.clone(), 2)]);
    let dw_x = Expr::derivative(w.clone(), args.clone(), vec![(x.clone(), 1)]);
    let g3 = Expr::add(vec![
        dw_xy,
        dz_xx.div(Expr::integer(2)).neg(),
        dw_x
            .div(Expr::mul(vec![Expr::integer(2), Expr::symbol(y.clone())]))
            .neg(),
        Expr::mul(vec![Expr::integer(-6), y2.clone(), dz_y]),
    ]);

    let dw_yy = Expr::derivative(w.clone(), args.clone(), vec![(y.clone(), 2)]);
    let dz_xy = Expr::derivative(z.clone(), args.clone(), vec![(x.clone(), 1), (y.clone(), 1)]);
    let dw_y2 = Expr::derivative(w.clone(), args.clone(), vec![(y.clone(), 1)]);
    let g4 = Expr::add(vec![
        dw_yy,
        Expr::mul(vec![Expr::integer(-2), dz_xy]),
        dw_y2
            .div(Expr::mul(vec![Expr::integer(2), Expr::symbol(y.clone())]))
            .neg(),
        Expr::function(w.clone(), args.clone())
            .div(Expr::mul(vec![Expr::integer(2), y2]))
    ]);

    let equations = vec![g1, g2, g3, g4];

    let basis = janet_basis(
        equations.clone(),
        vec![w.clone(), z.clone()],
        vec![x.clone(), y.clone()],
        OrderKind::Grevlex,
    )
    .expect("basis computation should converge");
    assert!(!basis.is_empty());

    let ctx = ranking(x, y, w, z);
    for eq in equations {
        let p = DPoly::from_expr(eq, &ctx).unwrap();
        let reduced = reduce_s(p, &basis, &ctx).unwrap();
        assert!(
            reduced.is_empty(),
            "every input equation must reduce to zero against its own basis"
        );
    }
}

#[test]
fn single_pde_basis_is_exactly_its_leading_derivative() {
    let x = sym("x");
    let y = sym("y");
    let w = sym("w");
    let dw_x = Expr::derivative(w.clone(), vec![x.clone(), y.clone()], vec![(x.clone(), 1)]);

    let basis = janet_basis(vec![dw_x.clone()], vec![w], vec![x, y], OrderKind::Lex).unwrap();

    assert_eq!(basis.len(), 1);
    assert_eq!(basis[0].lder(), &dw_x);
}

#[test]
fn basis_is_a_term_for_term_fixpoint_of_itself() {
    let x = sym("x");
    let y = sym("y");
    let w = sym("w");
    let args = vec![x.clone(), y.clone()];
    let dw_x = Expr::derivative(w.clone(), args.clone(), vec![(x.clone(), 1)]);
    let dw_y = Expr::derivative(w.clone(), args, vec![(y.clone(), 1)]);

    let basis = janet_basis(
        vec![dw_x, dw_y],
        vec![w.clone()],
        vec![x.clone(), y.clone()],
        OrderKind::Grlex,
    )
    .unwrap();

    let expressions: Vec<Expr> = basis.iter().map(|p| p.expression()).collect();
    let basis_again = janet_basis(expressions, vec![w], vec![x, y], OrderKind::Grlex).unwrap();

    assert_eq!(basis, basis_again);
}
