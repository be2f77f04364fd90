//! Per-step performance metrics.

/// Timing and event counts collected during one step.
///
/// All durations are in microseconds. The step functions populate these
/// after each call; consumers read them from the most recent step.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Time in the polar flux fixer, in microseconds.
    pub polar_us: u64,
    /// Time in the EMF averaging phase, in microseconds.
    pub emf_us: u64,
    /// Time in the flux rewrite phase, in microseconds.
    pub rewrite_us: u64,
    /// Time in the flux-correction passes, in microseconds.
    pub fofc_us: u64,
    /// Time computing the divergence diagnostic, in microseconds.
    pub divb_us: u64,
    /// Cells flagged for flux correction this step.
    pub fofc_flagged_cells: usize,
    /// Cumulative diagnostic reports dropped on a full channel.
    pub reports_dropped: u64,
}
