//! Startup shape and range validation.
//!
//! Every buffer a step will touch is checked here once, against the
//! block that defines the index space. Kernels then index unchecked
//! (debug assertions aside); a mismatch that would otherwise surface as
//! a panic deep in a stencil loop surfaces as a [`ConfigError`] naming
//! the field before the loop ever runs.

use lodestone_core::ConfigError;
use lodestone_mesh::{CellField, Direction, FluxField, MeshBlock};

/// Check one cell field against the block's allocation.
pub fn check_field(
    block: &MeshBlock,
    name: &str,
    field: &CellField,
    ncomp: usize,
) -> Result<(), ConfigError> {
    let (c, n3, n2, n1) = field.shape();
    if c != ncomp {
        return Err(ConfigError::ComponentMismatch {
            field: name.into(),
            expected: ncomp,
            actual: c,
        });
    }
    let want = (block.n3(), block.n2(), block.n1());
    if (n3, n2, n1) != want {
        return Err(ConfigError::ShapeMismatch {
            field: name.into(),
            expected: ncomp * want.0 * want.1 * want.2,
            actual: field.len(),
        });
    }
    Ok(())
}

fn check_flux(
    block: &MeshBlock,
    name: &str,
    fluxes: &FluxField,
    ncomp: usize,
) -> Result<(), ConfigError> {
    for dir in Direction::ALL {
        check_field(block, name, fluxes.flux(dir), ncomp)?;
    }
    Ok(())
}

/// Confirm the widest kernel range fits inside the allocation.
///
/// True by construction for blocks built through [`MeshBlock`]'s
/// constructors; kept as an explicit guard so a future change to the
/// halo depth or the kernel ranges fails loudly at startup.
fn check_ranges(block: &MeshBlock, kernel: &'static str) -> Result<(), ConfigError> {
    let widest = block.extended_bounds(1, 2);
    for dir in block.active_dirs() {
        let last = widest.range(dir).e;
        let len = block.extent(dir);
        if last >= len {
            return Err(ConfigError::RangeOutOfBounds {
                kernel,
                axis: dir.label(),
                last,
                len,
            });
        }
    }
    Ok(())
}

/// Validate everything the transport step will touch.
pub fn validate_transport(
    block: &MeshBlock,
    b_u: &CellField,
    fluxes: &FluxField,
) -> Result<(), ConfigError> {
    check_field(block, "cons.B", b_u, 3)?;
    check_flux(block, "flux.B", fluxes, 3)?;
    check_ranges(block, "flux_ct")?;
    Ok(())
}

/// Validate everything the flux-correction step will touch.
#[allow(clippy::too_many_arguments)]
pub fn validate_fofc(
    block: &MeshBlock,
    n_vars: usize,
    prims: &CellField,
    fflag: &CellField,
    pflag: &CellField,
    fofcflag: &CellField,
    fluxes: &FluxField,
    cmax: &CellField,
    cmin: &CellField,
) -> Result<(), ConfigError> {
    check_field(block, "prims", prims, n_vars)?;
    check_field(block, "fflag", fflag, 1)?;
    check_field(block, "pflag", pflag, 1)?;
    check_field(block, "fofcflag", fofcflag, 1)?;
    check_flux(block, "flux", fluxes, n_vars)?;
    check_field(block, "cmax", cmax, 3)?;
    check_field(block, "cmin", cmin, 3)?;
    check_ranges(block, "fofc")?;
    Ok(())
}
