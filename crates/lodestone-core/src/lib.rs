//! Core types for the Lodestone flux-transport engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the Lodestone workspace:
//! field IDs, the field catalog, kernel status, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod id;
pub mod status;

pub use catalog::FieldCatalog;
pub use error::ConfigError;
pub use id::{FieldId, StepId};
pub use status::TaskStatus;
