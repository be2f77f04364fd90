//! The flux-correction step: flag, then replace.

use std::time::Instant;

use lodestone_core::{ConfigError, TaskStatus};
use lodestone_kernels::{
    apply_fofc, count_flagged, flag_failed_cells, PhysicsModel, TwoWaveFlux,
};
use lodestone_mesh::{CellField, FluxField, MeshBlock};

use crate::metrics::StepMetrics;
use crate::validate::validate_fofc;

/// Sequences the two flux-correction passes for one block.
///
/// The flag pass finishes before the replacement pass starts (separate
/// calls, one thread), so every face sees the final set of marks. When
/// nothing is flagged the replacement pass is skipped outright.
#[derive(Clone, Copy, Debug, Default)]
pub struct FofcStep {
    two_wave: TwoWaveFlux,
}

impl FofcStep {
    /// A step using the given two-wave formula on corrected faces.
    pub fn new(two_wave: TwoWaveFlux) -> Self {
        Self { two_wave }
    }

    /// Check every buffer this step will touch.
    #[allow(clippy::too_many_arguments)]
    pub fn validate(
        &self,
        block: &MeshBlock,
        physics: &dyn PhysicsModel,
        prims: &CellField,
        fflag: &CellField,
        pflag: &CellField,
        fofcflag: &CellField,
        fluxes: &FluxField,
        cmax: &CellField,
        cmin: &CellField,
    ) -> Result<(), ConfigError> {
        validate_fofc(
            block,
            physics.n_vars(),
            prims,
            fflag,
            pflag,
            fofcflag,
            fluxes,
            cmax,
            cmin,
        )
    }

    /// Run both passes; returns the status and the flagged-cell count.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        &self,
        block: &MeshBlock,
        physics: &dyn PhysicsModel,
        prims: &CellField,
        fflag: &CellField,
        pflag: &CellField,
        fofcflag: &mut CellField,
        fluxes: &mut FluxField,
        cmax: &mut CellField,
        cmin: &mut CellField,
    ) -> (TaskStatus, usize) {
        flag_failed_cells(block, fflag, pflag, fofcflag);
        let flagged = count_flagged(block, fofcflag);
        if flagged == 0 {
            return (TaskStatus::Complete, 0);
        }
        let status = apply_fofc(
            block, physics, self.two_wave, prims, fofcflag, fluxes, cmax, cmin,
        );
        (status, flagged)
    }

    /// [`Self::run`] with the pass timing and flag count recorded.
    #[allow(clippy::too_many_arguments)]
    pub fn run_timed(
        &self,
        block: &MeshBlock,
        physics: &dyn PhysicsModel,
        prims: &CellField,
        fflag: &CellField,
        pflag: &CellField,
        fofcflag: &mut CellField,
        fluxes: &mut FluxField,
        cmax: &mut CellField,
        cmin: &mut CellField,
        metrics: &mut StepMetrics,
    ) -> TaskStatus {
        let t = Instant::now();
        let (status, flagged) = self.run(
            block, physics, prims, fflag, pflag, fofcflag, fluxes, cmax, cmin,
        );
        metrics.fofc_us = t.elapsed().as_micros() as u64;
        metrics.fofc_flagged_cells = flagged;
        status
    }
}
