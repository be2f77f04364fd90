//! Face-flux rewrite, the second phase of constrained transport.
//!
//! After Toth (2000): replacing each transverse field flux with the mean
//! of the two EMFs on the edges bounding its face makes the corner-based
//! divergence of the induced update cancel exactly, so an initially
//! divergence-free field stays divergence-free to rounding.

use lodestone_core::TaskStatus;
use lodestone_mesh::{CellField, Direction, FluxField, MeshBlock};

use crate::emf::EmfSet;
use crate::{B1, B2, B3};

/// Rewrite the field-component face fluxes from edge EMFs.
///
/// Requires `emf` fully built by [`crate::compute_emfs`]; the caller's
/// sequencing of the two calls is the phase barrier. The own-component
/// flux through each face (`F1[B1]`, `F2[B2]`, `F3[B3]`) is set to zero,
/// not merely ignored: upstream Riemann solves fill it, and leaving it
/// nonzero would feed a spurious normal-field update downstream.
///
/// With `fused` set, one pass writes every direction's fluxes over the
/// union face range; otherwise one pass per direction writes exactly
/// that direction's face range. Both orderings read the same frozen EMF
/// set and produce identical fluxes on the per-direction ranges.
///
/// No-op on 1D blocks.
pub fn flux_ct(block: &MeshBlock, emf: &EmfSet, fluxes: &mut FluxField, fused: bool) -> TaskStatus {
    let ndim = block.ndim();
    if ndim < 2 {
        return TaskStatus::Complete;
    }

    if fused {
        let b = block.extended_bounds(0, 1);
        for k in b.kb.iter() {
            for j in b.jb.iter() {
                for i in b.ib.iter() {
                    rewrite_x1(emf, fluxes.flux_mut(Direction::X1), ndim, k, j, i);
                    rewrite_x2(emf, fluxes.flux_mut(Direction::X2), ndim, k, j, i);
                    if ndim > 2 {
                        rewrite_x3(emf, fluxes.flux_mut(Direction::X3), k, j, i);
                    }
                }
            }
        }
        return TaskStatus::Complete;
    }

    let b1 = block.face_bounds(Direction::X1);
    for k in b1.kb.iter() {
        for j in b1.jb.iter() {
            for i in b1.ib.iter() {
                rewrite_x1(emf, fluxes.flux_mut(Direction::X1), ndim, k, j, i);
            }
        }
    }
    let b2 = block.face_bounds(Direction::X2);
    for k in b2.kb.iter() {
        for j in b2.jb.iter() {
            for i in b2.ib.iter() {
                rewrite_x2(emf, fluxes.flux_mut(Direction::X2), ndim, k, j, i);
            }
        }
    }
    if ndim > 2 {
        let b3 = block.face_bounds(Direction::X3);
        for k in b3.kb.iter() {
            for j in b3.jb.iter() {
                for i in b3.ib.iter() {
                    rewrite_x3(emf, fluxes.flux_mut(Direction::X3), k, j, i);
                }
            }
        }
    }
    TaskStatus::Complete
}

#[inline]
fn rewrite_x1(emf: &EmfSet, f1: &mut CellField, ndim: usize, k: usize, j: usize, i: usize) {
    f1.set(B1, k, j, i, 0.0);
    f1.set(
        B2,
        k,
        j,
        i,
        0.5 * (emf.e3.get(0, k, j, i) + emf.e3.get(0, k, j + 1, i)),
    );
    if ndim > 2 {
        f1.set(
            B3,
            k,
            j,
            i,
            -0.5 * (emf.e2.get(0, k, j, i) + emf.e2.get(0, k + 1, j, i)),
        );
    }
}

#[inline]
fn rewrite_x2(emf: &EmfSet, f2: &mut CellField, ndim: usize, k: usize, j: usize, i: usize) {
    f2.set(
        B1,
        k,
        j,
        i,
        -0.5 * (emf.e3.get(0, k, j, i) + emf.e3.get(0, k, j, i + 1)),
    );
    f2.set(B2, k, j, i, 0.0);
    if ndim > 2 {
        f2.set(
            B3,
            k,
            j,
            i,
            0.5 * (emf.e1.get(0, k, j, i) + emf.e1.get(0, k + 1, j, i)),
        );
    }
}

#[inline]
fn rewrite_x3(emf: &EmfSet, f3: &mut CellField, k: usize, j: usize, i: usize) {
    f3.set(
        B1,
        k,
        j,
        i,
        0.5 * (emf.e2.get(0, k, j, i) + emf.e2.get(0, k, j, i + 1)),
    );
    f3.set(
        B2,
        k,
        j,
        i,
        -0.5 * (emf.e1.get(0, k, j, i) + emf.e1.get(0, k, j + 1, i)),
    );
    f3.set(B3, k, j, i, 0.0);
}

/// Both transport phases on a 2D block with a single scratch EMF array.
///
/// Skips the X1/X2 edge arrays entirely; the arithmetic is identical to
/// [`compute_emfs`](crate::compute_emfs) followed by [`flux_ct()`] in
/// split mode, so results match that path bit for bit. No-op on 1D
/// blocks; not valid on 3D blocks.
pub fn flux_ct_2d(block: &MeshBlock, fluxes: &mut FluxField) -> TaskStatus {
    debug_assert!(block.ndim() <= 2);
    if block.ndim() < 2 {
        return TaskStatus::Complete;
    }

    let mut e3 = CellField::new(block, 1);
    let be = block.extended_bounds(0, 2);
    {
        let f1 = fluxes.flux(Direction::X1);
        let f2 = fluxes.flux(Direction::X2);
        for j in be.jb.iter() {
            for i in be.ib.iter() {
                let v = 0.25
                    * (f1.get(B2, 0, j, i) + f1.get(B2, 0, j - 1, i)
                        - f2.get(B1, 0, j, i)
                        - f2.get(B1, 0, j, i - 1));
                e3.set(0, 0, j, i, v);
            }
        }
    }

    let b1 = block.face_bounds(Direction::X1);
    let f1 = fluxes.flux_mut(Direction::X1);
    for j in b1.jb.iter() {
        for i in b1.ib.iter() {
            f1.set(B1, 0, j, i, 0.0);
            f1.set(B2, 0, j, i, 0.5 * (e3.get(0, 0, j, i) + e3.get(0, 0, j + 1, i)));
        }
    }
    let b2 = block.face_bounds(Direction::X2);
    let f2 = fluxes.flux_mut(Direction::X2);
    for j in b2.jb.iter() {
        for i in b2.ib.iter() {
            f2.set(B1, 0, j, i, -0.5 * (e3.get(0, 0, j, i) + e3.get(0, 0, j, i + 1)));
            f2.set(B2, 0, j, i, 0.0);
        }
    }
    TaskStatus::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divb::max_divb;
    use crate::emf::compute_emfs;
    use lodestone_mesh::{Domain, UniformGeometry};
    use proptest::prelude::*;
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

    fn transport(block: &MeshBlock, fluxes: &mut FluxField, fused: bool) {
        let mut emf = EmfSet::new(block);
        compute_emfs(block, fluxes, &mut emf);
        flux_ct(block, &emf, fluxes, fused);
    }

    /// Flux-divergence update of a zero field, interior only, unit dx.
    fn induced_update(block: &MeshBlock, fluxes: &FluxField) -> CellField {
        let mut db = CellField::new(block, 3);
        let b = block.cell_bounds(Domain::Interior);
        let f1 = fluxes.flux(Direction::X1);
        let f2 = fluxes.flux(Direction::X2);
        let f3 = fluxes.flux(Direction::X3);
        for c in 0..3 {
            for k in b.kb.iter() {
                for j in b.jb.iter() {
                    for i in b.ib.iter() {
                        let mut d = f1.get(c, k, j, i + 1) - f1.get(c, k, j, i);
                        if block.ndim() > 1 {
                            d += f2.get(c, k, j + 1, i) - f2.get(c, k, j, i);
                        }
                        if block.ndim() > 2 {
                            d += f3.get(c, k + 1, j, i) - f3.get(c, k, j, i);
                        }
                        db.set(c, k, j, i, -d);
                    }
                }
            }
        }
        db
    }

    #[test]
    fn own_component_fluxes_are_zeroed() {
        let block = MeshBlock::new_3d(6, 5, 4).unwrap();
        let mut fluxes = random_fluxes(&block, 7);
        transport(&block, &mut fluxes, false);

        for dir in Direction::ALL {
            let b = block.face_bounds(dir);
            let f = fluxes.flux(dir);
            for k in b.kb.iter() {
                for j in b.jb.iter() {
                    for i in b.ib.iter() {
                        assert_eq!(f.get(dir.axis(), k, j, i), 0.0);
                    }
                }
            }
        }
    }

    /// F1[B2] = 2 and F2[B1] = 1 give every edge EMF 0.5, so the
    /// rewritten fluxes are F1[B2] = 0.5 and F2[B1] = -0.5.
    #[test]
    fn uniform_fluxes_rewrite_to_signed_halves() {
        let block = MeshBlock::new_2d(6, 6).unwrap();
        let mut fluxes = FluxField::new(&block, 3);
        fluxes.flux_mut(Direction::X1).comp_fill(B2, 2.0);
        fluxes.flux_mut(Direction::X2).comp_fill(B1, 1.0);
        transport(&block, &mut fluxes, false);

        let b1 = block.face_bounds(Direction::X1);
        for j in b1.jb.iter() {
            for i in b1.ib.iter() {
                assert_eq!(fluxes.flux(Direction::X1).get(B2, 0, j, i), 0.5);
            }
        }
        let b2 = block.face_bounds(Direction::X2);
        for j in b2.jb.iter() {
            for i in b2.ib.iter() {
                assert_eq!(fluxes.flux(Direction::X2).get(B1, 0, j, i), -0.5);
            }
        }
    }

    #[test]
    fn fused_matches_split_on_face_ranges() {
        let block = MeshBlock::new_3d(5, 4, 4).unwrap();
        let mut split = random_fluxes(&block, 11);
        let mut fused = split.clone();
        transport(&block, &mut split, false);
        transport(&block, &mut fused, true);

        for dir in Direction::ALL {
            let b = block.face_bounds(dir);
            for c in 0..3 {
                for k in b.kb.iter() {
                    for j in b.jb.iter() {
                        for i in b.ib.iter() {
                            assert_eq!(
                                split.flux(dir).get(c, k, j, i),
                                fused.flux(dir).get(c, k, j, i),
                                "dir {dir} comp {c} at ({k}, {j}, {i})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn dedicated_2d_path_matches_general_path_bit_for_bit() {
        let block = MeshBlock::new_2d(7, 5).unwrap();
        let mut general = random_fluxes(&block, 23);
        let mut special = general.clone();
        transport(&block, &mut general, false);
        flux_ct_2d(&block, &mut special);

        for dir in [Direction::X1, Direction::X2] {
            let b = block.face_bounds(dir);
            for c in 0..3 {
                for j in b.jb.iter() {
                    for i in b.ib.iter() {
                        assert_eq!(
                            general.flux(dir).get(c, 0, j, i),
                            special.flux(dir).get(c, 0, j, i),
                        );
                    }
                }
            }
        }
    }

    proptest! {
        /// The update induced by rewritten fluxes has zero corner
        /// divergence, for arbitrary input fluxes.
        #[test]
        fn rewritten_fluxes_induce_divergence_free_updates_2d(seed: u64) {
            let block = MeshBlock::new_2d(8, 6).unwrap();
            let mut fluxes = random_fluxes(&block, seed);
            transport(&block, &mut fluxes, false);
            let db = induced_update(&block, &fluxes);
            let geom = UniformGeometry::unit();
            prop_assert!(max_divb(&block, &geom, &db) < 1e-12);
        }

        #[test]
        fn rewritten_fluxes_induce_divergence_free_updates_3d(seed: u64) {
            let block = MeshBlock::new_3d(6, 5, 4).unwrap();
            let mut fluxes = random_fluxes(&block, seed);
            transport(&block, &mut fluxes, true);
            let db = induced_update(&block, &fluxes);
            let geom = UniformGeometry::unit();
            prop_assert!(max_divb(&block, &geom, &db) < 1e-12);
        }
    }
}
