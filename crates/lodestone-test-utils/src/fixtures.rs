//! Deterministic field fills and standard blocks.

use std::f64::consts::TAU;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use lodestone_kernels::{B1, B2};
use lodestone_mesh::{
    BlockFace, BoundaryFlag, CellField, Direction, Domain, FluxField, MeshBlock, NGHOST,
};

/// Fill every cell of `field` with uniform values in `[-1, 1)`.
///
/// Seeded ChaCha8, so the same seed always produces the same field
/// regardless of platform.
pub fn fill_random_field(field: &mut CellField, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for v in field.data_mut() {
        *v = rng.random::<f64>() * 2.0 - 1.0;
    }
}

/// Fill all three flux directions with uniform values in `[-1, 1)`.
pub fn fill_random_fluxes(fluxes: &mut FluxField, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for dir in Direction::ALL {
        for v in fluxes.flux_mut(dir).data_mut() {
            *v = rng.random::<f64>() * 2.0 - 1.0;
        }
    }
}

/// Sample `B1 = sin(2πx)cos(2πy)`, `B2 = -cos(2πx)sin(2πy)` at the
/// interior cell centers of the unit square.
///
/// The continuum field is solenoidal, so its sampled corner divergence
/// shrinks at second order under refinement; `n` is the interior extent
/// the block was built with.
pub fn sample_solenoidal_2d(block: &MeshBlock, n: usize) -> CellField {
    let dx = 1.0 / n as f64;
    let mut b_u = CellField::new(block, 3);
    let b = block.cell_bounds(Domain::Interior);
    for j in b.jb.iter() {
        for i in b.ib.iter() {
            let x = (i - NGHOST) as f64 * dx + 0.5 * dx;
            let y = (j - NGHOST) as f64 * dx + 0.5 * dx;
            b_u.set(B1, 0, j, i, (TAU * x).sin() * (TAU * y).cos());
            b_u.set(B2, 0, j, i, -(TAU * x).cos() * (TAU * y).sin());
        }
    }
    b_u
}

/// An 8-cell 1D block.
pub fn block_1d() -> MeshBlock {
    MeshBlock::new_1d(8).expect("fixture extents are valid")
}

/// An 8x6 2D block.
pub fn block_2d() -> MeshBlock {
    MeshBlock::new_2d(8, 6).expect("fixture extents are valid")
}

/// A 6x5x4 3D block.
pub fn block_3d() -> MeshBlock {
    MeshBlock::new_3d(6, 5, 4).expect("fixture extents are valid")
}

/// A 2D block with both X2 faces flagged as user (polar) boundaries.
pub fn polar_block_2d() -> MeshBlock {
    MeshBlock::new_2d(8, 6)
        .expect("fixture extents are valid")
        .with_boundary(BlockFace::InnerX2, BoundaryFlag::User)
        .with_boundary(BlockFace::OuterX2, BoundaryFlag::User)
}
