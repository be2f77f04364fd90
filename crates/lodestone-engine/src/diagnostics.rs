//! Post-step diagnostics over a bounded channel.
//!
//! The solver loop never blocks on observers: reports are pushed with
//! `try_send` and dropped on the floor when the consumer falls behind.
//! A dropped report only costs a data point; a blocked step would cost
//! wall-clock time in every block's update.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use lodestone_core::{StepId, TaskStatus};
use lodestone_kernels::max_divb;
use lodestone_mesh::{CellField, Geometry, MeshBlock};

/// One step's health summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    /// The step this report describes.
    pub step: StepId,
    /// Maximum corner-averaged |div B| over the block interior.
    pub max_divb: f64,
    /// Cells flagged for flux correction this step.
    pub fofc_flagged: usize,
}

/// Non-blocking producer half of the diagnostics channel.
#[derive(Clone, Debug)]
pub struct DiagnosticsSink {
    tx: Sender<StepReport>,
}

impl DiagnosticsSink {
    /// A sink and its consumer, holding at most `capacity` reports.
    pub fn bounded(capacity: usize) -> (Self, Receiver<StepReport>) {
        let (tx, rx) = bounded(capacity);
        (Self { tx }, rx)
    }

    /// Push a report without blocking.
    ///
    /// Returns `false` when the channel is full or the consumer is
    /// gone; callers count the drop and move on.
    pub fn publish(&self, report: StepReport) -> bool {
        match self.tx.try_send(report) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Measure the divergence and publish one report for this step.
///
/// Silent at verbosity 0; at 1 and up the report goes to `sink`, and
/// drops are counted by the caller via the return of
/// [`DiagnosticsSink::publish`]. Returns the report so callers can also
/// log or assert on it directly.
pub fn post_step_diagnostics(
    block: &MeshBlock,
    geom: &dyn Geometry,
    b_u: &CellField,
    step: StepId,
    fofc_flagged: usize,
    verbosity: u8,
    sink: Option<&DiagnosticsSink>,
) -> (TaskStatus, Option<StepReport>) {
    if verbosity == 0 {
        return (TaskStatus::Complete, None);
    }
    let report = StepReport {
        step,
        max_divb: max_divb(block, geom, b_u),
        fofc_flagged,
    };
    if let Some(sink) = sink {
        sink.publish(report);
    }
    (TaskStatus::Complete, Some(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_mesh::UniformGeometry;

    #[test]
    fn verbosity_zero_is_silent() {
        let block = MeshBlock::new_2d(4, 4).unwrap();
        let b_u = CellField::new(&block, 3);
        let (sink, rx) = DiagnosticsSink::bounded(4);
        let (status, report) = post_step_diagnostics(
            &block,
            &UniformGeometry::unit(),
            &b_u,
            StepId(1),
            0,
            0,
            Some(&sink),
        );
        assert_eq!(status, TaskStatus::Complete);
        assert!(report.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn verbose_steps_publish_one_report() {
        let block = MeshBlock::new_2d(4, 4).unwrap();
        let b_u = CellField::new(&block, 3);
        let (sink, rx) = DiagnosticsSink::bounded(4);
        let (_, report) = post_step_diagnostics(
            &block,
            &UniformGeometry::unit(),
            &b_u,
            StepId(7),
            3,
            1,
            Some(&sink),
        );
        let got = rx.try_recv().unwrap();
        assert_eq!(Some(got), report);
        assert_eq!(got.step, StepId(7));
        assert_eq!(got.fofc_flagged, 3);
        assert_eq!(got.max_divb, 0.0);
    }

    #[test]
    fn full_channels_drop_instead_of_blocking() {
        let (sink, rx) = DiagnosticsSink::bounded(1);
        let report = StepReport {
            step: StepId(0),
            max_divb: 0.0,
            fofc_flagged: 0,
        };
        assert!(sink.publish(report));
        assert!(!sink.publish(report));
        drop(rx);
        assert!(!sink.publish(report));
    }
}
