//! Edge-centered EMF averaging, the first phase of constrained transport.

use lodestone_core::TaskStatus;
use lodestone_mesh::{CellField, Direction, FluxField, MeshBlock};

use crate::{B1, B2, B3};

/// The edge-centered electromotive forces for one block.
///
/// Each array is logically centered on the cell edge parallel to its
/// axis; storage shares the cell-centered layout, with edge `(k, j, i)`
/// at the low corner of cell `(k, j, i)`. The set is rebuilt from the
/// current fluxes on every transport call; it never carries state
/// between steps. In 2D only `e3` is meaningful, but all three arrays
/// are allocated so the rewrite needs no per-dimension plumbing (the
/// collapsed arrays cost one plane each).
#[derive(Clone, Debug)]
pub struct EmfSet {
    /// EMF along X1 edges.
    pub e1: CellField,
    /// EMF along X2 edges.
    pub e2: CellField,
    /// EMF along X3 edges.
    pub e3: CellField,
}

impl EmfSet {
    /// Zero-filled EMF arrays sized for `block`.
    pub fn new(block: &MeshBlock) -> Self {
        Self {
            e1: CellField::new(block, 1),
            e2: CellField::new(block, 1),
            e3: CellField::new(block, 1),
        }
    }
}

/// Average the face fluxes of the field components onto cell edges.
///
/// Each edge EMF is the mean of the four transverse-component fluxes on
/// the faces sharing that edge. The iteration range is the interior plus
/// a two-cell extension on the high side of every active axis, which
/// covers every edge the rewrite phase ([`crate::flux_ct()`]) will read;
/// the one-cell low-side stencil reads stay inside the halo.
///
/// No-op on 1D blocks: a single flux direction induces no EMF.
pub fn compute_emfs(block: &MeshBlock, fluxes: &FluxField, emf: &mut EmfSet) -> TaskStatus {
    let ndim = block.ndim();
    if ndim < 2 {
        return TaskStatus::Complete;
    }

    let b = block.extended_bounds(0, 2);
    let f1 = fluxes.flux(Direction::X1);
    let f2 = fluxes.flux(Direction::X2);
    let f3 = fluxes.flux(Direction::X3);

    for k in b.kb.iter() {
        for j in b.jb.iter() {
            for i in b.ib.iter() {
                let e3 = 0.25
                    * (f1.get(B2, k, j, i) + f1.get(B2, k, j - 1, i)
                        - f2.get(B1, k, j, i)
                        - f2.get(B1, k, j, i - 1));
                emf.e3.set(0, k, j, i, e3);
                if ndim > 2 {
                    let e2 = -0.25
                        * (f1.get(B3, k, j, i) + f1.get(B3, k - 1, j, i)
                            - f3.get(B1, k, j, i)
                            - f3.get(B1, k, j, i - 1));
                    let e1 = 0.25
                        * (f2.get(B3, k, j, i) + f2.get(B3, k - 1, j, i)
                            - f3.get(B2, k, j, i)
                            - f3.get(B2, k, j - 1, i));
                    emf.e2.set(0, k, j, i, e2);
                    emf.e1.set(0, k, j, i, e1);
                }
            }
        }
    }
    TaskStatus::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_mesh::{Domain, NGHOST};

    /// With F1[B2] = 2 and F2[B1] = 1 everywhere, every edge EMF is
    /// 0.25 * (2 + 2 - 1 - 1) = 0.5.
    #[test]
    fn uniform_fluxes_average_to_half() {
        let block = MeshBlock::new_2d(6, 6).unwrap();
        let mut fluxes = FluxField::new(&block, 3);
        fluxes.flux_mut(Direction::X1).comp_fill(B2, 2.0);
        fluxes.flux_mut(Direction::X2).comp_fill(B1, 1.0);

        let mut emf = EmfSet::new(&block);
        assert_eq!(
            compute_emfs(&block, &fluxes, &mut emf),
            TaskStatus::Complete
        );

        let b = block.extended_bounds(0, 2);
        for j in b.jb.iter() {
            for i in b.ib.iter() {
                assert_eq!(emf.e3.get(0, 0, j, i), 0.5);
            }
        }
    }

    #[test]
    fn one_dimensional_blocks_are_a_no_op() {
        let block = MeshBlock::new_1d(8).unwrap();
        let mut fluxes = FluxField::new(&block, 3);
        fluxes.flux_mut(Direction::X1).fill(3.0);
        let mut emf = EmfSet::new(&block);
        assert_eq!(
            compute_emfs(&block, &fluxes, &mut emf),
            TaskStatus::Complete
        );
        assert!(emf.e3.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn transverse_only_emfs_in_2d() {
        // In 2D the X1/X2 edge EMFs are never computed.
        let block = MeshBlock::new_2d(4, 4).unwrap();
        let mut fluxes = FluxField::new(&block, 3);
        fluxes.flux_mut(Direction::X1).fill(1.0);
        fluxes.flux_mut(Direction::X2).fill(1.0);
        let mut emf = EmfSet::new(&block);
        compute_emfs(&block, &fluxes, &mut emf);
        assert!(emf.e1.data().iter().all(|&v| v == 0.0));
        assert!(emf.e2.data().iter().all(|&v| v == 0.0));
    }

    /// A localized flux contributes to exactly the four edges around it.
    #[test]
    fn single_flux_spreads_to_adjacent_edges() {
        let block = MeshBlock::new_2d(6, 6).unwrap();
        let mut fluxes = FluxField::new(&block, 3);
        let (j0, i0) = (NGHOST + 2, NGHOST + 2);
        fluxes.flux_mut(Direction::X1).set(B2, 0, j0, i0, 4.0);

        let mut emf = EmfSet::new(&block);
        compute_emfs(&block, &fluxes, &mut emf);

        let b = block.cell_bounds(Domain::Interior);
        for j in b.jb.iter() {
            for i in b.ib.iter() {
                let want = if (j == j0 || j == j0 + 1) && i == i0 {
                    1.0
                } else {
                    0.0
                };
                assert_eq!(emf.e3.get(0, 0, j, i), want, "edge ({j}, {i})");
            }
        }
    }
}
