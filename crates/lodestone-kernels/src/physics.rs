//! The physics seam the flux-correction kernel evaluates through.

use lodestone_mesh::Direction;

/// Pointwise conversions for one set of primitive variables.
///
/// The flux-correction pass re-evaluates conserved states, physical
/// fluxes, and characteristic speeds at individual faces; this trait is
/// the only physics the kernel crate knows about. Implementations are
/// pointwise and stateless: slices are one cell's variables, in the
/// same order the primitive field stores its components.
pub trait PhysicsModel: Send + Sync {
    /// Number of variables per cell.
    fn n_vars(&self) -> usize;

    /// Conserved state from a primitive state.
    fn prim_to_cons(&self, prim: &[f64], cons: &mut [f64]);

    /// Physical flux through a face normal to `dir`.
    fn prim_to_flux(&self, prim: &[f64], dir: Direction, flux: &mut [f64]);

    /// Fastest right-going and left-going characteristic speeds along
    /// `dir`, as `(cmax, cmin)` with `cmin` typically negative.
    fn characteristic_speeds(&self, prim: &[f64], dir: Direction) -> (f64, f64);
}
