//! Two-wave approximate flux formulas for face replacement.

/// Which two-wave formula the flux-correction pass uses.
///
/// Both take the already-nonnegative wave speeds `cmax` (right-going)
/// and `cmin` (left-going, sign flipped) produced by the correction
/// pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TwoWaveFlux {
    /// Local Lax-Friedrichs: maximally diffusive, unconditionally
    /// robust. The default, since replaced faces are by definition in
    /// trouble.
    #[default]
    Llf,
    /// Harten-Lax-van Leer: sharper, still positivity-friendly.
    Hll,
}

impl TwoWaveFlux {
    /// Evaluate the flux for one variable at one face.
    ///
    /// `fl`/`fr` are the physical fluxes and `ul`/`ur` the conserved
    /// states on either side. A collapsed wave fan (`cmax + cmin == 0`)
    /// degrades to the arithmetic mean of the physical fluxes.
    #[inline]
    pub fn evaluate(self, fl: f64, fr: f64, cmax: f64, cmin: f64, ul: f64, ur: f64) -> f64 {
        match self {
            Self::Llf => {
                let ctop = cmax.max(cmin);
                0.5 * (fl + fr) - 0.5 * ctop * (ur - ul)
            }
            Self::Hll => {
                let span = cmax + cmin;
                if span > 0.0 {
                    (cmax * fl + cmin * fr - cmax * cmin * (ur - ul)) / span
                } else {
                    0.5 * (fl + fr)
                }
            }
        }
    }
}
