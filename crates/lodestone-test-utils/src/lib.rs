//! Test fixtures for Lodestone development.
//!
//! Seeded random field fills, analytic solenoidal samples, standard
//! blocks, and a small reference physics model, shared by the member
//! crates' tests and benchmarks.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod physics;

pub use fixtures::{
    block_1d, block_2d, block_3d, fill_random_field, fill_random_fluxes, polar_block_2d,
    sample_solenoidal_2d,
};
pub use physics::IsothermalHydro;
