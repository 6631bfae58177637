//! `DTerm`: one `coefficient * derivative` summand of a differential
//! polynomial. Grounded on `_Dterm` in the source material: a coefficient,
//! a derivative atom, and a precomputed comparison vector used for all
//! ordering decisions downstream.

use crate::expr::{Expr, Symbol};
use crate::ranking::Ctx;

#[derive(Debug, Clone)]
pub struct DTerm {
    coeff: Expr,
    derivative: Expr,
    order: Vec<i64>,
    function: Symbol,
    comparison_vector: Vec<i64>,
}

impl DTerm {
    /// `derivative` must be a `Function` or `Derivative` atom naming one of
    /// `ctx`'s dependent functions.
    pub fn new(coeff: Expr, derivative: Expr, ctx: &Ctx) -> Self {
        let order = ctx.order_of_derivative(&derivative);
        let function = derivative
            .function_name()
            .cloned()
            .expect("DTerm derivative must be a function or derivative atom");
        let comparison_vector = ctx.comparison_vector(&derivative);
        DTerm {
            coeff,
            derivative,
            order,
            function,
            comparison_vector,
        }
    }

    pub fn coeff(&self) -> &Expr {
        &self.coeff
    }

    pub fn derivative(&self) -> &Expr {
        &self.derivative
    }

    pub fn order(&self) -> &[i64] {
        &self.order
    }

    pub fn function(&self) -> &Symbol {
        &self.function
    }

    pub fn comparison_vector(&self) -> &[i64] {
        &self.comparison_vector
    }

    /// `coeff * derivative`, as a single `Expr` term.
    pub fn expression(&self) -> Expr {
        Expr::mul(vec![self.coeff.clone(), self.derivative.clone()])
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn with_coeff(&self, coeff: Expr) -> Self {
        DTerm {
            coeff,
            derivative: self.derivative.clone(),
            order: self.order.clone(),
            function: self.function.clone(),
            comparison_vector: self.comparison_vector.clone(),
        }
    }

    /// Product-rule differentiation of this single summand with respect to
    /// `vars` (applied as one combined higher derivative, matching
    /// `_Dterm.diff`'s two-term split): one term from differentiating the
    /// coefficient, one from differentiating the derivative atom itself.
    pub fn diff(&self, vars: &[Symbol], ctx: &Ctx) -> Vec<DTerm> {
        let mut result = Vec::with_capacity(2);
        let fprime = self.coeff.clone().diff_vars(vars);
        if !fprime.is_zero() {
            result.push(DTerm::new(fprime, self.derivative.clone(), ctx));
        }
        if !self.coeff.is_zero() {
            let gprime = self.derivative.clone().diff_vars(vars);
            result.push(DTerm::new(self.coeff.clone(), gprime, ctx));
        }
        result
    }
}

impl PartialEq for DTerm {
    fn eq(&self, other: &Self) -> bool {
        self.comparison_vector == other.comparison_vector && self.coeff.structural_eq(&other.coeff)
    }
}
