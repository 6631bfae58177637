//! Error type for Janet basis computation. Hand-rolled rather than derived,
//! matching `mathhook_core::error::MathError`'s own `Display`/
//! `std::error::Error` implementation rather than reaching for `thiserror`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum JanetError {
    /// A term in an input equation did not reduce to exactly one
    /// dependent-function factor times a coefficient — the system is not
    /// linear in the unknown functions.
    NotLinearPDE { equation: String, term: String },
    /// A term's shape could not be analyzed at all (e.g. a dependent
    /// function nested inside another function's argument).
    MalformedTerm { term: String, reason: String },
    /// The ranking context's dependent/independent lists don't match the
    /// arities the input equations were built against.
    BadContext { reason: String },
    /// The basis-completion fixpoint loop exceeded its iteration bound
    /// without converging. This crate bounds what the original,
    /// unboundedly-looping algorithm does not, so a malformed or
    /// pathological input fails loudly instead of hanging.
    IterationLimitExceeded { limit: usize },
}

impl fmt::Display for JanetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JanetError::NotLinearPDE { equation, term } => write!(
                f,
                "equation `{equation}` is not linear in the dependent functions: term `{term}` has more than one (or no) dependent-function factor"
            ),
            JanetError::MalformedTerm { term, reason } => {
                write!(f, "could not analyze term `{term}`: {reason}")
            }
            JanetError::BadContext { reason } => write!(f, "invalid ranking context: {reason}"),
            JanetError::IterationLimitExceeded { limit } => write!(
                f,
                "Janet basis completion did not converge within {limit} iterations"
            ),
        }
    }
}

impl std::error::Error for JanetError {}

pub type JanetResult<T> = Result<T, JanetError>;
