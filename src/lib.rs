//! Janet basis computation for finite systems of homogeneous linear
//! partial differential equations.
//!
//! A Janet basis is the differential analogue of a Gröbner basis: it puts
//! an overdetermined system of linear PDEs into a normal form from which
//! integrability (solvability, and the size of the solution space) can be
//! read off directly. This crate implements the five stages that make up
//! that computation — term ranking, differential-polynomial
//! representation, reduction, Janet multiplier analysis, and the
//! autoreduce/complete/integrability-conditions fixpoint loop that ties
//! them together.

pub mod completion;
pub mod dpoly;
pub mod dterm;
pub mod driver;
pub mod error;
pub mod expr;
pub mod integrability;
pub mod multiplier;
pub mod ranking;
pub mod reducer;

pub use dpoly::DPoly;
pub use dterm::DTerm;
pub use driver::janet_basis;
pub use error::{JanetError, JanetResult};
pub use expr::{Expr, Number, Symbol};
pub use ranking::{Ctx, OrderKind};

/// Convenience prelude for common imports.
pub mod prelude {
    pub use crate::completion::{complete, complete_system};
    pub use crate::driver::janet_basis;
    pub use crate::error::{JanetError, JanetResult};
    pub use crate::expr::{Expr, Number, Symbol};
    pub use crate::integrability::{find_integrability_conditions, split_by_function};
    pub use crate::multiplier::vec_multipliers;
    pub use crate::ranking::{Ctx, OrderKind};
    pub use crate::reducer::{autoreduce, reduce, reduce_s, reorder};
    pub use crate::{DPoly, DTerm};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn end_to_end_single_equation_basis() {
        let x = Symbol::new("x");
        let w = Symbol::new("w");
        let dw_x = Expr::derivative(w.clone(), vec![x.clone()], vec![(x.clone(), 1)]);
        let basis = janet_basis(vec![dw_x.clone()], vec![w], vec![x], OrderKind::Lex).unwrap();
        assert_eq!(basis.len(), 1);
        assert_eq!(basis[0].lder(), &dw_x);
    }
}
