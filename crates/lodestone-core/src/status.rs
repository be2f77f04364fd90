//! Kernel completion status.

use std::fmt;

/// Result of a kernel or step function.
///
/// Kernels that have nothing to do in the current configuration (e.g. a
/// transverse-flux kernel on a 1D block) return [`TaskStatus::Complete`]
/// as a no-op rather than an error; the caller sequences on completion,
/// not on whether work happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskStatus {
    /// The kernel finished; downstream kernels may run.
    Complete,
    /// The kernel did not finish and must be retried or aborted.
    Incomplete,
}

impl TaskStatus {
    /// Whether the task completed.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Incomplete => write!(f, "incomplete"),
        }
    }
}
