//! Step orchestration for the Lodestone flux-transport engine.
//!
//! The kernels in `lodestone-kernels` are pure functions; this crate
//! sequences them into steps, validates every buffer shape once at
//! startup so the kernels can index without checks, and ships per-step
//! diagnostics over a bounded channel so observers never stall the
//! solver loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod fofc;
pub mod metrics;
pub mod transport;
pub mod validate;

pub use config::TransportConfig;
pub use diagnostics::{post_step_diagnostics, DiagnosticsSink, StepReport};
pub use fofc::FofcStep;
pub use metrics::StepMetrics;
pub use transport::TransportStep;
