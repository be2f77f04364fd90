//! Structured block mesh and field storage for Lodestone.
//!
//! This crate defines the [`MeshBlock`] — a single structured block with a
//! fixed ghost-cell halo — together with the inclusive index-range types
//! the stencil kernels iterate over, component-major [`CellField`] /
//! [`FluxField`] storage, and the [`Geometry`] seam for metric factors.
//!
//! # Index conventions
//!
//! Arrays are addressed `(component, k, j, i)` with `i` (the X1 axis)
//! fastest-varying. All ranges are **inclusive** on both ends; the
//! interior of an active axis with extent `n` spans `[NGHOST, NGHOST+n-1]`.
//! Inactive axes collapse to the single index `0`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod boundary;
pub mod field;
pub mod geometry;
pub mod range;

pub use block::{MeshBlock, NGHOST};
pub use boundary::{BlockFace, BoundaryFlag};
pub use field::{CellField, FluxField};
pub use geometry::{Geometry, GridLoc, UniformGeometry};
pub use range::{Direction, Domain, IndexBounds, IndexRange};
