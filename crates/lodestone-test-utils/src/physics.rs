//! A small closed-form physics model for exercising flux correction.

use lodestone_kernels::PhysicsModel;
use lodestone_mesh::Direction;

/// Isothermal hydrodynamics: pressure is `cs^2 * rho`.
///
/// Four variables per cell, `[rho, v1, v2, v3]`. Simple enough that
/// test expectations can be written in closed form, but with a genuine
/// wave fan (`v ± cs`) so the speed combination logic is exercised.
#[derive(Clone, Copy, Debug)]
pub struct IsothermalHydro {
    cs: f64,
}

impl IsothermalHydro {
    /// A model with the given sound speed.
    pub fn new(cs: f64) -> Self {
        Self { cs }
    }

    /// The fixed sound speed.
    pub fn sound_speed(&self) -> f64 {
        self.cs
    }
}

impl PhysicsModel for IsothermalHydro {
    fn n_vars(&self) -> usize {
        4
    }

    fn prim_to_cons(&self, prim: &[f64], cons: &mut [f64]) {
        let rho = prim[0];
        cons[0] = rho;
        cons[1] = rho * prim[1];
        cons[2] = rho * prim[2];
        cons[3] = rho * prim[3];
    }

    fn prim_to_flux(&self, prim: &[f64], dir: Direction, flux: &mut [f64]) {
        let rho = prim[0];
        let vd = prim[1 + dir.axis()];
        let pressure = self.cs * self.cs * rho;
        flux[0] = rho * vd;
        for a in 0..3 {
            flux[1 + a] = rho * vd * prim[1 + a];
        }
        flux[1 + dir.axis()] += pressure;
    }

    fn characteristic_speeds(&self, prim: &[f64], dir: Direction) -> (f64, f64) {
        let vd = prim[1 + dir.axis()];
        (vd + self.cs, vd - self.cs)
    }
}
