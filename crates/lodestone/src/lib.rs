//! Lodestone: divergence-preserving magnetic flux transport for
//! finite-volume MHD solvers.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Lodestone sub-crates. For most users, adding `lodestone` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lodestone::prelude::*;
//!
//! // An 8x8 axisymmetric block and its Riemann-solver fluxes.
//! let block = MeshBlock::new_2d(8, 8).unwrap();
//! let b_u = CellField::new(&block, 3);
//! let mut fluxes = FluxField::new(&block, 3);
//! fluxes.flux_mut(Direction::X1).comp_fill(1, 2.0);
//! fluxes.flux_mut(Direction::X2).comp_fill(0, 1.0);
//!
//! // Validate once, then transport: after the rewrite the fluxes
//! // induce only divergence-free field updates.
//! let step = TransportStep::default();
//! step.validate(&block, &b_u, &fluxes).unwrap();
//! assert_eq!(step.run(&block, &mut fluxes), TaskStatus::Complete);
//!
//! let geom = UniformGeometry::unit();
//! assert_eq!(max_divb(&block, &geom, &b_u), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary: IDs, catalog, status, errors.
pub mod types {
    pub use lodestone_core::*;
}

/// Blocks, index ranges, fields, and geometry.
pub mod mesh {
    pub use lodestone_mesh::*;
}

/// The stencil kernels.
pub mod kernels {
    pub use lodestone_kernels::*;
}

/// Step orchestration, validation, and diagnostics.
pub mod engine {
    pub use lodestone_engine::*;
}

/// The common imports for driving a transport step.
pub mod prelude {
    pub use lodestone_core::{ConfigError, FieldCatalog, FieldId, StepId, TaskStatus};
    pub use lodestone_engine::{
        post_step_diagnostics, DiagnosticsSink, FofcStep, StepMetrics, StepReport,
        TransportConfig, TransportStep,
    };
    pub use lodestone_kernels::{
        fill_divb, max_divb, update_primitives, PhysicsModel, TwoWaveFlux,
    };
    pub use lodestone_mesh::{
        BlockFace, BoundaryFlag, CellField, Direction, Domain, FluxField, Geometry, MeshBlock,
        UniformGeometry, NGHOST,
    };
}
