//! The transport step: polar repair, then two-phase constrained
//! transport.

use std::time::Instant;

use lodestone_core::{ConfigError, TaskStatus};
use lodestone_kernels::{compute_emfs, fix_polar_flux, flux_ct, flux_ct_2d, EmfSet};
use lodestone_mesh::{CellField, FluxField, MeshBlock};

use crate::config::TransportConfig;
use crate::metrics::StepMetrics;
use crate::validate::validate_transport;

/// Sequences the flux-transport kernels for one block.
///
/// Owns nothing but the configuration; field buffers are passed per
/// call so one step can serve many blocks. Phase order is fixed: polar
/// repair first (it edits Riemann fluxes the EMF phase reads), then EMF
/// averaging, then the rewrite. The EMF set is complete before the
/// rewrite starts because the phases are separate calls on one thread.
#[derive(Clone, Debug, Default)]
pub struct TransportStep {
    config: TransportConfig,
}

impl TransportStep {
    /// A step with the given options.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// The step's configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Check every buffer this step will touch, once, before looping.
    pub fn validate(
        &self,
        block: &MeshBlock,
        b_u: &CellField,
        fluxes: &FluxField,
    ) -> Result<(), ConfigError> {
        validate_transport(block, b_u, fluxes)
    }

    /// Run the step, rewriting `fluxes` in place.
    pub fn run(&self, block: &MeshBlock, fluxes: &mut FluxField) -> TaskStatus {
        if self.config.fix_polar_flux {
            fix_polar_flux(block, fluxes);
        }
        if self.config.disable_flux_ct || block.ndim() < 2 {
            return TaskStatus::Complete;
        }
        if block.ndim() == 2 && !self.config.fused_ct {
            return flux_ct_2d(block, fluxes);
        }
        let mut emf = EmfSet::new(block);
        compute_emfs(block, fluxes, &mut emf);
        flux_ct(block, &emf, fluxes, self.config.fused_ct)
    }

    /// [`Self::run`] with per-phase timings recorded into `metrics`.
    pub fn run_timed(
        &self,
        block: &MeshBlock,
        fluxes: &mut FluxField,
        metrics: &mut StepMetrics,
    ) -> TaskStatus {
        let start = Instant::now();

        if self.config.fix_polar_flux {
            let t = Instant::now();
            fix_polar_flux(block, fluxes);
            metrics.polar_us = t.elapsed().as_micros() as u64;
        }

        let status = if self.config.disable_flux_ct || block.ndim() < 2 {
            TaskStatus::Complete
        } else if block.ndim() == 2 && !self.config.fused_ct {
            let t = Instant::now();
            let status = flux_ct_2d(block, fluxes);
            metrics.rewrite_us = t.elapsed().as_micros() as u64;
            status
        } else {
            let t = Instant::now();
            let mut emf = EmfSet::new(block);
            compute_emfs(block, fluxes, &mut emf);
            metrics.emf_us = t.elapsed().as_micros() as u64;

            let t = Instant::now();
            let status = flux_ct(block, &emf, fluxes, self.config.fused_ct);
            metrics.rewrite_us = t.elapsed().as_micros() as u64;
            status
        };

        metrics.total_us = start.elapsed().as_micros() as u64;
        status
    }
}
