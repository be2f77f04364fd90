//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a registered field within a solver run.
///
/// Fields are registered in the [`FieldCatalog`](crate::FieldCatalog) at
/// startup and assigned sequential IDs. `FieldId(n)` corresponds to the
/// n-th registered field. Hot loops index by ID; name lookups happen once
/// at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u32);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for FieldId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing step counter.
///
/// Incremented each time the solver advances one sub-step. Carried on
/// diagnostic reports so consumers can correlate them with solver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
