//! Error types for the Lodestone flux-transport engine.
//!
//! All configuration and shape problems are caught at startup by the
//! engine's validation pass and reported through [`ConfigError`]; kernels
//! themselves assume validated inputs and do not return errors.

use std::error::Error;
use std::fmt;

/// Errors detected during startup validation.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A field name was registered twice in the catalog.
    DuplicateField {
        /// The offending field name.
        name: String,
    },
    /// A field name was looked up but never registered.
    UnknownField {
        /// The requested field name.
        name: String,
    },
    /// A field's flat buffer length does not match the block it claims
    /// to cover.
    ShapeMismatch {
        /// Name of the mismatched field.
        field: String,
        /// Expected flat length (ncomp * n3 * n2 * n1).
        expected: usize,
        /// Actual flat length.
        actual: usize,
    },
    /// A field carries the wrong number of components for its role.
    ComponentMismatch {
        /// Name of the mismatched field.
        field: String,
        /// Expected component count.
        expected: usize,
        /// Actual component count.
        actual: usize,
    },
    /// The block dimensionality is outside the supported 1..=3 range.
    UnsupportedDimension {
        /// The requested dimensionality.
        ndim: usize,
    },
    /// An interior extent is too small for the kernel stencils.
    ExtentTooSmall {
        /// Axis name ("x1", "x2", "x3").
        axis: &'static str,
        /// The requested interior extent.
        extent: usize,
        /// Minimum supported extent.
        min: usize,
    },
    /// A kernel iteration range would index outside the allocated arrays.
    RangeOutOfBounds {
        /// Name of the kernel whose range failed.
        kernel: &'static str,
        /// Axis name ("x1", "x2", "x3").
        axis: &'static str,
        /// Last index the kernel would touch.
        last: usize,
        /// Number of allocated cells along the axis.
        len: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateField { name } => {
                write!(f, "field '{name}' registered twice")
            }
            Self::UnknownField { name } => {
                write!(f, "field '{name}' is not registered")
            }
            Self::ShapeMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "field '{field}' has flat length {actual}, expected {expected}"
                )
            }
            Self::ComponentMismatch {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "field '{field}' has {actual} components, expected {expected}"
                )
            }
            Self::UnsupportedDimension { ndim } => {
                write!(f, "unsupported dimensionality {ndim} (must be 1, 2, or 3)")
            }
            Self::ExtentTooSmall { axis, extent, min } => {
                write!(
                    f,
                    "interior extent {extent} on {axis} is below the minimum {min}"
                )
            }
            Self::RangeOutOfBounds {
                kernel,
                axis,
                last,
                len,
            } => {
                write!(
                    f,
                    "kernel '{kernel}' would touch index {last} on {axis}, \
                     but only {len} cells are allocated"
                )
            }
        }
    }
}

impl Error for ConfigError {}
