//! Benchmark profiles for the Lodestone kernels.
//!
//! Provides pre-built blocks and seeded flux sets so every benchmark
//! (and any profiling harness) measures the same workload:
//!
//! - [`profile_2d`]: 256x256 interior, the axisymmetric production shape
//! - [`profile_3d`]: 64^3 interior, a full 3D tile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lodestone_mesh::{FluxField, MeshBlock};
use lodestone_test_utils::fill_random_fluxes;

/// A 256x256 2D block with seeded random fluxes.
pub fn profile_2d(seed: u64) -> (MeshBlock, FluxField) {
    let block = MeshBlock::new_2d(256, 256).expect("profile extents are valid");
    let mut fluxes = FluxField::new(&block, 3);
    fill_random_fluxes(&mut fluxes, seed);
    (block, fluxes)
}

/// A 64^3 3D block with seeded random fluxes.
pub fn profile_3d(seed: u64) -> (MeshBlock, FluxField) {
    let block = MeshBlock::new_3d(64, 64, 64).expect("profile extents are valid");
    let mut fluxes = FluxField::new(&block, 3);
    fill_random_fluxes(&mut fluxes, seed);
    (block, fluxes)
}
