//! Stencil kernels for divergence-preserving flux transport.
//!
//! Every kernel here is a pure function over [`MeshBlock`] index ranges
//! and [`CellField`] / [`FluxField`] buffers: no I/O, no global state,
//! and a [`TaskStatus`] return so callers can sequence them. The two
//! phases of constrained transport are two separate functions
//! ([`compute_emfs`] and [`flux_ct()`]); the call boundary between them is
//! the barrier that keeps the rewrite from reading half-built EMFs.
//!
//! [`MeshBlock`]: lodestone_mesh::MeshBlock
//! [`CellField`]: lodestone_mesh::CellField
//! [`FluxField`]: lodestone_mesh::FluxField
//! [`TaskStatus`]: lodestone_core::TaskStatus

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod divb;
pub mod emf;
pub mod flux_ct;
pub mod fofc;
pub mod physics;
pub mod polar;
pub mod prims;
pub mod riemann;

pub use divb::{fill_divb, max_divb};
pub use emf::{compute_emfs, EmfSet};
pub use flux_ct::{flux_ct, flux_ct_2d};
pub use fofc::{apply_fofc, count_flagged, flag_failed_cells};
pub use physics::PhysicsModel;
pub use polar::fix_polar_flux;
pub use prims::update_primitives;
pub use riemann::TwoWaveFlux;

/// Component index of the X1 field component.
pub const B1: usize = 0;
/// Component index of the X2 field component.
pub const B2: usize = 1;
/// Component index of the X3 field component.
pub const B3: usize = 2;
