//! `DPoly`: a differential polynomial, i.e. a finite sum of `DTerm`s sorted
//! descending by comparison vector and normalized to a monic leading
//! coefficient. Grounded on `_Differential_Polynomial` in the source
//! material (`_init`/`_analyze`, `normalize`, `Lterm`/`Lder`/`Lfunc`/
//! `Lcoeff`, `diff`).

use crate::dterm::DTerm;
use crate::error::{JanetError, JanetResult};
use crate::expr::{Expr, Symbol};
use crate::ranking::Ctx;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct DPoly {
    terms: Vec<DTerm>,
}

impl DPoly {
    /// Build a `DPoly` from a raw expression: each additive term must split
    /// into exactly one dependent-function factor (a `Function` or
    /// `Derivative` atom) times a coefficient — otherwise the equation is
    /// not linear in the unknown functions.
    pub fn from_expr(e: Expr, ctx: &Ctx) -> JanetResult<Self> {
        let original = e.to_string();
        let simplified = e.simplify();
        let raw_terms = simplified.additive_terms();

        let mut dterms: Vec<DTerm> = Vec::new();
        for term in &raw_terms {
            let (coeff, derivative) = analyze_term(term, ctx, &original)?;
            merge_term(&mut dterms, coeff, derivative, ctx);
        }
        Self::from_dterms(dterms, ctx)
    }

    /// Build directly from a list of already-computed `DTerm`s (used by
    /// `diff`, reduction, and integrability-condition assembly, which all
    /// construct their result term-by-term rather than from a raw `Expr`).
    pub fn from_dterms(mut dterms: Vec<DTerm>, ctx: &Ctx) -> JanetResult<Self> {
        dterms.retain(|t| !t.is_zero());
        dterms.sort_by(|a, b| {
            if ctx.gt(a.comparison_vector(), b.comparison_vector()) {
                Ordering::Less
            } else if a.comparison_vector() == b.comparison_vector() {
                Ordering::Equal
            } else {
                Ordering::Greater
            }
        });
        let mut poly = DPoly { terms: dterms };
        poly.normalize();
        Ok(poly)
    }

    fn normalize(&mut self) {
        if self.terms.is_empty() {
            return;
        }
        let lc = self.terms[0].coeff().clone();
        if !lc.is_one() {
            self.terms = self
                .terms
                .iter()
                .map(|t| t.with_coeff(t.coeff().clone().div(lc.clone()).simplify()))
                .filter(|t| !t.is_zero())
                .collect();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[DTerm] {
        &self.terms
    }

    pub fn derivatives(&self) -> impl Iterator<Item = &Expr> {
        self.terms.iter().map(|t| t.derivative())
    }

    pub fn coefficients(&self) -> impl Iterator<Item = &Expr> {
        self.terms.iter().map(|t| t.coeff())
    }

    /// The leading term: first in descending comparison-vector order.
    pub fn lterm(&self) -> &DTerm {
        &self.terms[0]
    }

    pub fn lder(&self) -> &Expr {
        self.terms[0].derivative()
    }

    pub fn lfunc(&self) -> &Symbol {
        self.terms[0].function()
    }

    pub fn lcoeff(&self) -> &Expr {
        self.terms[0].coeff()
    }

    pub fn order(&self) -> &[i64] {
        self.terms[0].order()
    }

    pub fn comparison_vector(&self) -> &[i64] {
        self.terms[0].comparison_vector()
    }

    pub fn expression(&self) -> Expr {
        if self.terms.is_empty() {
            return Expr::integer(0);
        }
        Expr::add(self.terms.iter().map(|t| t.expression()).collect())
    }

    /// Differentiate the whole polynomial with respect to `vars`, folding
    /// like terms (by comparison vector) as they're produced — mirrors
    /// `_Differential_Polynomial.diff`'s dict-keyed accumulation.
    pub fn diff(&self, vars: &[Symbol], ctx: &Ctx) -> JanetResult<DPoly> {
        let mut acc: Vec<DTerm> = Vec::new();
        for dterm in &self.terms {
            for nd in dterm.diff(vars, ctx) {
                merge_dterm(&mut acc, nd);
            }
        }
        Self::from_dterms(acc, ctx)
    }
}

impl PartialEq for DPoly {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().zip(other.terms.iter()).all(|(a, b)| a == b)
    }
}

fn merge_term(acc: &mut Vec<DTerm>, coeff: Expr, derivative: Expr, ctx: &Ctx) {
    if let Some(existing) = acc.iter_mut().find(|t| t.derivative() == &derivative) {
        let summed = Expr::add(vec![existing.coeff().clone(), coeff]);
        *existing = existing.with_coeff(summed);
    } else {
        acc.push(DTerm::new(coeff, derivative, ctx));
    }
}

fn merge_dterm(acc: &mut Vec<DTerm>, nd: DTerm) {
    if let Some(existing) = acc
        .iter_mut()
        .find(|t| t.comparison_vector() == nd.comparison_vector())
    {
        let summed = Expr::add(vec![existing.coeff().clone(), nd.coeff().clone()]);
        *existing = existing.with_coeff(summed);
    } else {
        acc.push(nd);
    }
}

/// Split one additive term of an equation into `(coefficient, derivative)`,
/// mirroring `_Differential_Polynomial._analyze`.
fn analyze_term(term: &Expr, ctx: &Ctx, equation: &str) -> JanetResult<(Expr, Expr)> {
    let factors = term.multiplicative_factors();
    let mut func_factor: Option<Expr> = None;
    let mut coeff_factors: Vec<Expr> = Vec::new();

    for factor in factors {
        match factor.function_name() {
            Some(name) if ctx.is_ctxfunc(name) => {
                if func_factor.is_some() {
                    return Err(JanetError::NotLinearPDE {
                        equation: equation.to_string(),
                        term: term.to_string(),
                    });
                }
                func_factor = Some(factor);
            }
            Some(_) => {
                return Err(JanetError::BadContext {
                    reason: format!(
                        "term `{term}` applies a function not in the declared dependent functions"
                    ),
                });
            }
            None => coeff_factors.push(factor),
        }
    }

    match func_factor {
        Some(derivative) => Ok((Expr::mul(coeff_factors), derivative)),
        None => Err(JanetError::MalformedTerm {
            term: term.to_string(),
            reason: "no dependent-function derivative atom found in this term".to_string(),
        }),
    }
}
