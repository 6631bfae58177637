//! Symbol type for dependent functions and independent variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A named identifier: either an independent variable (`x`, `y`, ...) or the
/// name of a dependent function (`w`, `z`, ...). Cheap to clone via `Arc`,
/// the same rationale `mathhook_core::core::Symbol` uses for its string
/// sharing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Symbol(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::new(name)
    }
}
