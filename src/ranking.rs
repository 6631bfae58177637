//! Term/monomial ordering for differential terms.
//!
//! Mirrors `mathhook_core::algebra::groebner::monomial_order`'s
//! `MonomialOrder` + `MonomialOrdering` split (an enum selecting the
//! ordering, plus a comparison entry point) but the actual comparison rule
//! follows the weight-matrix construction from `matrix_order.py`
//! (`Mlex`/`Mgrlex`/`Mgrevlex` and `Context.gt`): a comparison vector
//! (derivative order vector concatenated with a unit vector for the
//! function index) is multiplied against a fixed weight matrix, and the
//! sign of the first nonzero entry of the product decides the order.

use crate::expr::{Expr, Symbol};
use once_cell::sync::Lazy;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Mutex;

/// Weight matrices depend only on `(order, no_funcs, no_vars)`, so they're
/// memoized process-wide rather than rebuilt per `Ctx`.
static WEIGHT_MATRIX_CACHE: Lazy<Mutex<HashMap<(OrderKind, usize, usize), Vec<Row>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Selects which weight matrix `Ctx` builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// Pure lexicographic: functions first (most-significant), then
    /// variables left to right.
    Lex,
    /// Graded lex: total derivative order breaks ties before Lex does.
    Grlex,
    /// Graded reverse lex: total order first, then reversed, negated
    /// variable comparison.
    Grevlex,
}

/// One row of a weight matrix, dotted against a comparison vector.
type Row = Vec<i64>;

/// A fixed ranking context: which functions are dependent, which symbols
/// are independent, and the resulting weight matrix. Corresponds to
/// `matrix_order.Context` in the source material.
#[derive(Debug)]
pub struct Ctx {
    independent: Vec<Symbol>,
    dependent: Vec<Symbol>,
    order: OrderKind,
    weight: Vec<Row>,
    gt_cache: RefCell<HashMap<(Vec<i64>, Vec<i64>), bool>>,
}

impl Ctx {
    pub fn new(dependent: Vec<Symbol>, independent: Vec<Symbol>, order: OrderKind) -> Self {
        let weight = weight_matrix(order, dependent.len(), independent.len());
        Ctx {
            independent,
            dependent,
            order,
            weight,
            gt_cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn independent(&self) -> &[Symbol] {
        &self.independent
    }

    pub fn dependent(&self) -> &[Symbol] {
        &self.dependent
    }

    pub fn order(&self) -> OrderKind {
        self.order
    }

    /// True if `name` is one of the dependent functions this context ranks.
    pub fn is_ctxfunc(&self, name: &Symbol) -> bool {
        self.dependent.contains(name)
    }

    /// The vector of differentiation orders of `e` with respect to each
    /// independent variable, in `self.independent`'s order. Zero for a
    /// plain (order-0) function application.
    pub fn order_of_derivative(&self, e: &Expr) -> Vec<i64> {
        let mut res = vec![0i64; self.independent.len()];
        if let Expr::Derivative { var_counts, .. } = e {
            for (sym, count) in var_counts {
                if let Some(idx) = self.independent.iter().position(|v| v == sym) {
                    res[idx] = *count as i64;
                }
            }
        }
        res
    }

    /// `order_of_derivative(e)` concatenated with a one-hot vector marking
    /// which dependent function `e` belongs to.
    pub fn comparison_vector(&self, e: &Expr) -> Vec<i64> {
        let mut v = self.order_of_derivative(e);
        let mut unit = vec![0i64; self.dependent.len()];
        if let Some(name) = e.function_name() {
            if let Some(idx) = self.dependent.iter().position(|d| d == name) {
                unit[idx] = 1;
            }
        }
        v.extend(unit);
        v
    }

    /// `v1 > v2` under this context's weight matrix: the sign of the first
    /// nonzero entry of `weight * (v1 - v2)` decides it.
    pub fn gt(&self, v1: &[i64], v2: &[i64]) -> bool {
        let key = (v1.to_vec(), v2.to_vec());
        if let Some(cached) = self.gt_cache.borrow().get(&key) {
            return *cached;
        }
        let diff: Vec<i64> = v1.iter().zip(v2.iter()).map(|(a, b)| a - b).collect();
        let mut result = false;
        for row in &self.weight {
            let dot: i64 = row.iter().zip(diff.iter()).map(|(a, b)| a * b).sum();
            if dot != 0 {
                result = dot > 0;
                break;
            }
        }
        self.gt_cache.borrow_mut().insert(key, result);
        result
    }

    pub fn lt(&self, v1: &[i64], v2: &[i64]) -> bool {
        v1 != v2 && !self.gt(v1, v2)
    }

    /// Convenience: compare two differential-term atoms directly.
    pub fn gt_expr(&self, e1: &Expr, e2: &Expr) -> bool {
        self.gt(&self.comparison_vector(e1), &self.comparison_vector(e2))
    }
}

/// Build the weight matrix for `order` over `no_funcs` dependent functions
/// and `no_vars` independent variables, following `Mlex`/`Mgrlex`/`Mgrevlex`
/// in the source material (Schwarz, "Term orders and Rankings" p.43).
pub fn weight_matrix(order: OrderKind, no_funcs: usize, no_vars: usize) -> Vec<Row> {
    let key = (order, no_funcs, no_vars);
    if let Some(cached) = WEIGHT_MATRIX_CACHE.lock().unwrap().get(&key) {
        return cached.clone();
    }
    let built = match order {
        OrderKind::Lex => mlex(no_funcs, no_vars),
        OrderKind::Grlex => mgrlex(no_funcs, no_vars),
        OrderKind::Grevlex => mgrevlex(no_funcs, no_vars),
    };
    WEIGHT_MATRIX_CACHE.lock().unwrap().insert(key, built.clone());
    built
}

fn mlex(no_funcs: usize, no_vars: usize) -> Vec<Row> {
    let cols = no_vars + no_funcs;
    let mut rows: Vec<Row> = Vec::with_capacity(no_vars + 1);

    let mut first = vec![0i64; no_vars];
    first.extend((1..=no_funcs).rev());
    rows.push(first);

    for i in 0..no_vars {
        let mut r = vec![0i64; cols];
        r[i] = 1;
        rows.push(r);
    }
    rows
}

fn mgrlex(no_funcs: usize, no_vars: usize) -> Vec<Row> {
    let mut rows = mlex(no_funcs, no_vars);
    let mut first = vec![1i64; no_vars];
    first.extend(vec![0i64; no_funcs]);
    rows.insert(0, first);
    rows
}

fn mgrevlex(no_funcs: usize, no_vars: usize) -> Vec<Row> {
    let cols = no_vars + no_funcs;
    let mut rows: Vec<Row> = Vec::with_capacity(cols);

    let mut first = vec![1i64; no_vars];
    first.extend(vec![0i64; no_funcs]);
    rows.push(first);

    let mut second = vec![0i64; no_vars];
    second.extend((1..=no_funcs).rev());
    rows.push(second);

    for idx in 0..no_vars {
        let mut v = vec![0i64; cols];
        v[no_vars - idx - 1] = -1;
        rows.push(v);
    }
    rows
}
