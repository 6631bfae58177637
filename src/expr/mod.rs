//! Minimal host symbolic-expression layer. In a full `mathhook` deployment
//! this capability set (construct/decompose/differentiate/substitute) would
//! be satisfied by the host CAS; here it is provided directly so the crate
//! is self-contained, following `mathhook_core`'s own submodule layout for
//! `core/expression.rs` (type + constructors + Display in one module,
//! arithmetic simplification and calculus split into their own files).

mod calculus;
mod core;
mod number;
mod simplify;
mod symbol;

pub use self::core::Expr;
pub use number::Number;
pub use symbol::Symbol;
