//! Flux repair at polar (X2) boundaries.

use lodestone_core::TaskStatus;
use lodestone_mesh::{BlockFace, BoundaryFlag, Direction, Domain, FluxField, MeshBlock};

use crate::B2;

/// Zero the net transverse-field flux through user-flagged X2 faces.
///
/// At a coordinate pole no field may pass through the X2 face, but the
/// Riemann solve fills those fluxes like any other. Forcing `F2[B2]` to
/// zero on the pole row and reflecting `F1[B2]` (and `F3[B2]` in 3D)
/// antisymmetrically into the first ghost row makes the EMF averages
/// straddling the pole cancel, so constrained transport sees a clean
/// boundary. Runs before the EMF phase; faces not flagged
/// [`BoundaryFlag::User`] are left untouched.
///
/// No-op on blocks where X2 is inactive.
pub fn fix_polar_flux(block: &MeshBlock, fluxes: &mut FluxField) -> TaskStatus {
    let ndim = block.ndim();
    if ndim < 2 {
        return TaskStatus::Complete;
    }

    let ib = block.axis_range(Direction::X1, Domain::Interior);
    let jb = block.axis_range(Direction::X2, Domain::Interior);
    let kb = block.axis_range(Direction::X3, Domain::Interior);
    let ke_e = if ndim > 2 { kb.e + 1 } else { kb.e };
    let (js, je) = (jb.s, jb.e);

    if block.boundary_flag(BlockFace::InnerX2) == BoundaryFlag::User {
        for k in kb.s..=ke_e {
            for i in ib.s..=ib.e + 1 {
                let refl = -fluxes.flux(Direction::X1).get(B2, k, js, i);
                fluxes.flux_mut(Direction::X1).set(B2, k, js - 1, i, refl);
                fluxes.flux_mut(Direction::X2).set(B2, k, js, i, 0.0);
                if ndim > 2 {
                    let refl = -fluxes.flux(Direction::X3).get(B2, k, js, i);
                    fluxes.flux_mut(Direction::X3).set(B2, k, js - 1, i, refl);
                }
            }
        }
    }
    if block.boundary_flag(BlockFace::OuterX2) == BoundaryFlag::User {
        for k in kb.s..=ke_e {
            for i in ib.s..=ib.e + 1 {
                let refl = -fluxes.flux(Direction::X1).get(B2, k, je, i);
                fluxes.flux_mut(Direction::X1).set(B2, k, je + 1, i, refl);
                fluxes.flux_mut(Direction::X2).set(B2, k, je + 1, i, 0.0);
                if ndim > 2 {
                    let refl = -fluxes.flux(Direction::X3).get(B2, k, je, i);
                    fluxes.flux_mut(Direction::X3).set(B2, k, je + 1, i, refl);
                }
            }
        }
    }
    TaskStatus::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn random_fluxes(block: &MeshBlock, seed: u64) -> FluxField {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut fluxes = FluxField::new(block, 3);
        for dir in Direction::ALL {
            for v in fluxes.flux_mut(dir).data_mut() {
                *v = rng.random::<f64>() * 2.0 - 1.0;
            }
        }
        fluxes
    }

    #[test]
    fn inner_pole_reflects_and_zeroes() {
        let block = MeshBlock::new_2d(6, 6)
            .unwrap()
            .with_boundary(BlockFace::InnerX2, BoundaryFlag::User);
        let mut fluxes = random_fluxes(&block, 3);
        assert_eq!(fix_polar_flux(&block, &mut fluxes), TaskStatus::Complete);

        let ib = block.axis_range(Direction::X1, Domain::Interior);
        let js = block.axis_range(Direction::X2, Domain::Interior).s;
        for i in ib.s..=ib.e + 1 {
            assert_eq!(
                fluxes.flux(Direction::X1).get(B2, 0, js - 1, i),
                -fluxes.flux(Direction::X1).get(B2, 0, js, i),
            );
            assert_eq!(fluxes.flux(Direction::X2).get(B2, 0, js, i), 0.0);
        }
    }

    #[test]
    fn unflagged_faces_are_untouched() {
        let block = MeshBlock::new_2d(6, 6)
            .unwrap()
            .with_boundary(BlockFace::InnerX2, BoundaryFlag::User);
        let mut fluxes = random_fluxes(&block, 5);
        let before = fluxes.clone();
        fix_polar_flux(&block, &mut fluxes);

        // The outer X2 face is not flagged User: its pole row and ghost
        // row keep their Riemann values.
        let ib = block.axis_range(Direction::X1, Domain::Interior);
        let je = block.axis_range(Direction::X2, Domain::Interior).e;
        for i in ib.s..=ib.e + 1 {
            assert_eq!(
                fluxes.flux(Direction::X2).get(B2, 0, je + 1, i),
                before.flux(Direction::X2).get(B2, 0, je + 1, i),
            );
            assert_eq!(
                fluxes.flux(Direction::X1).get(B2, 0, je + 1, i),
                before.flux(Direction::X1).get(B2, 0, je + 1, i),
            );
        }
    }

    #[test]
    fn three_dimensional_poles_reflect_the_x3_flux_too() {
        let block = MeshBlock::new_3d(4, 4, 4)
            .unwrap()
            .with_boundary(BlockFace::OuterX2, BoundaryFlag::User);
        let mut fluxes = random_fluxes(&block, 9);
        fix_polar_flux(&block, &mut fluxes);

        let ib = block.axis_range(Direction::X1, Domain::Interior);
        let je = block.axis_range(Direction::X2, Domain::Interior).e;
        let kb = block.axis_range(Direction::X3, Domain::Interior);
        for k in kb.s..=kb.e + 1 {
            for i in ib.s..=ib.e + 1 {
                assert_eq!(
                    fluxes.flux(Direction::X3).get(B2, k, je + 1, i),
                    -fluxes.flux(Direction::X3).get(B2, k, je, i),
                );
                assert_eq!(fluxes.flux(Direction::X2).get(B2, k, je + 1, i), 0.0);
            }
        }
    }

    #[test]
    fn one_dimensional_blocks_are_a_no_op() {
        let block = MeshBlock::new_1d(8).unwrap();
        let mut fluxes = random_fluxes(&block, 1);
        let before = fluxes.clone();
        fix_polar_flux(&block, &mut fluxes);
        assert_eq!(fluxes, before);
    }
}
