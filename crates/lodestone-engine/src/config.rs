//! Transport step configuration.

use lodestone_kernels::TwoWaveFlux;

/// Options for the transport and correction steps.
///
/// Plain data with sensible defaults; build one with struct update
/// syntax over [`TransportConfig::default`]. Validated against the
/// block and fields once, before the step loop starts.
#[derive(Clone, Debug)]
pub struct TransportConfig {
    /// Repair fluxes at user-flagged X2 boundaries before transport.
    pub fix_polar_flux: bool,
    /// Skip the EMF/rewrite phases entirely. Debug escape hatch: the
    /// divergence constraint will drift immediately.
    pub disable_flux_ct: bool,
    /// Rewrite all flux directions in a single fused pass instead of
    /// one pass per direction.
    pub fused_ct: bool,
    /// Two-wave formula for corrected faces.
    pub two_wave: TwoWaveFlux,
    /// 0 silences diagnostics; 1 and up publishes a report per step.
    pub verbosity: u8,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            fix_polar_flux: true,
            disable_flux_ct: false,
            fused_ct: false,
            two_wave: TwoWaveFlux::Llf,
            verbosity: 0,
        }
    }
}
