//! Conserved-to-primitive sync for the transported field.

use lodestone_core::TaskStatus;
use lodestone_mesh::{CellField, Domain, Geometry, GridLoc, MeshBlock};

/// Recover the primitive field components from the conserved ones.
///
/// The conserved field is the primitive field scaled by the metric
/// determinant at the cell center, so recovery is a pointwise division;
/// unlike the fluid inversion this can never fail, and no failure flag
/// is raised here. Covers the requested domain so ghost cells can be
/// synced after an exchange.
pub fn update_primitives(
    block: &MeshBlock,
    geom: &dyn Geometry,
    domain: Domain,
    b_u: &CellField,
    b_p: &mut CellField,
) -> TaskStatus {
    let b = block.cell_bounds(domain);
    for c in 0..b_u.ncomp() {
        for k in b.kb.iter() {
            for j in b.jb.iter() {
                for i in b.ib.iter() {
                    let gdet = geom.gdet(GridLoc::Center, j, i);
                    b_p.set(c, k, j, i, b_u.get(c, k, j, i) / gdet);
                }
            }
        }
    }
    TaskStatus::Complete
}

#[cfg(test)]
mod tests {
    use super::*;
    use lodestone_mesh::UniformGeometry;

    #[test]
    fn divides_out_the_metric_determinant() {
        let block = MeshBlock::new_2d(4, 4).unwrap();
        let geom = UniformGeometry {
            gdet: 2.0,
            ..UniformGeometry::unit()
        };
        let mut b_u = CellField::new(&block, 3);
        b_u.fill(6.0);
        let mut b_p = CellField::new(&block, 3);
        update_primitives(&block, &geom, Domain::Entire, &b_u, &mut b_p);
        assert!(b_p.data().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn interior_domain_leaves_ghosts_alone() {
        let block = MeshBlock::new_2d(4, 4).unwrap();
        let geom = UniformGeometry::unit();
        let mut b_u = CellField::new(&block, 3);
        b_u.fill(1.0);
        let mut b_p = CellField::new(&block, 3);
        update_primitives(&block, &geom, Domain::Interior, &b_u, &mut b_p);
        assert_eq!(b_p.get(0, 0, 0, 0), 0.0);
        assert_eq!(b_p.get(0, 0, 4, 4), 1.0);
    }
}
