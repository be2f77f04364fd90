//! First-order flux correction: retry failing cells' faces with a
//! more diffusive flux.
//!
//! Two passes with a barrier between them. The flag pass marks every
//! cell whose floor or inversion diagnostics tripped; marking cells
//! first (instead of marking faces while iterating them) keeps a cell
//! flagged by two of its faces from being handled twice. The
//! replacement pass then rebuilds the flux on every face touching a
//! flagged cell from zeroth-order reconstruction, which costs one order
//! of accuracy locally but cannot produce the oscillations that broke
//! the cell in the first place.

use lodestone_core::TaskStatus;
use lodestone_mesh::{CellField, FluxField, MeshBlock};

use crate::physics::PhysicsModel;
use crate::riemann::TwoWaveFlux;

/// Mark cells needing flux correction from the failure diagnostics.
///
/// A cell is marked when its floor flag (`fflag`) or inversion flag
/// (`pflag`) is positive. The scan covers the interior plus one halo
/// cell on every active axis, so a failure just across a block edge
/// still corrects the shared face. `fofcflag` is fully rewritten each
/// call; stale marks never survive a step.
pub fn flag_failed_cells(
    block: &MeshBlock,
    fflag: &CellField,
    pflag: &CellField,
    fofcflag: &mut CellField,
) -> TaskStatus {
    fofcflag.fill(0.0);
    let b = block.extended_bounds(1, 1);
    for k in b.kb.iter() {
        for j in b.jb.iter() {
            for i in b.ib.iter() {
                if fflag.get(0, k, j, i) > 0.0 || pflag.get(0, k, j, i) > 0.0 {
                    fofcflag.set(0, k, j, i, 1.0);
                }
            }
        }
    }
    TaskStatus::Complete
}

/// Number of marked cells, for step diagnostics.
pub fn count_flagged(block: &MeshBlock, fofcflag: &CellField) -> usize {
    let b = block.extended_bounds(1, 1);
    let mut count = 0;
    for k in b.kb.iter() {
        for j in b.jb.iter() {
            for i in b.ib.iter() {
                if fofcflag.get(0, k, j, i) > 0.0 {
                    count += 1;
                }
            }
        }
    }
    count
}

/// Replace the fluxes on every face adjacent to a marked cell.
///
/// For each direction in turn, a face is replaced when the cell sharing
/// its index or the cell one step to the low side is marked. Left and
/// right states are the untouched cell-center primitives (zeroth-order
/// reconstruction); conserved states, physical fluxes, and wave speeds
/// are re-evaluated through `physics`, and the face flux is rebuilt
/// with `two_wave`. The cached `cmax`/`cmin` speeds (one component per
/// direction) are overwritten at replaced faces with the symmetric
/// combination `max(0, cl, cr)` of the fresh speeds.
///
/// Unmarked faces, and the speed caches at them, are never touched.
#[allow(clippy::too_many_arguments)]
pub fn apply_fofc(
    block: &MeshBlock,
    physics: &dyn PhysicsModel,
    two_wave: TwoWaveFlux,
    prims: &CellField,
    fofcflag: &CellField,
    fluxes: &mut FluxField,
    cmax: &mut CellField,
    cmin: &mut CellField,
) -> TaskStatus {
    let nvar = physics.n_vars();
    let mut pl = vec![0.0; nvar];
    let mut pr = vec![0.0; nvar];
    let mut ul = vec![0.0; nvar];
    let mut ur = vec![0.0; nvar];
    let mut fl = vec![0.0; nvar];
    let mut fr = vec![0.0; nvar];

    for dir in block.active_dirs() {
        let b = block.face_extended_bounds(dir, 1, 1);
        let (dk, dj, di) = dir.offset();
        for k in b.kb.iter() {
            for j in b.jb.iter() {
                for i in b.ib.iter() {
                    // The face shares the index of its high-side cell.
                    let (kk, jj, ii) = (k - dk, j - dj, i - di);
                    if fofcflag.get(0, k, j, i) <= 0.0 && fofcflag.get(0, kk, jj, ii) <= 0.0 {
                        continue;
                    }

                    for v in 0..nvar {
                        pl[v] = prims.get(v, kk, jj, ii);
                        pr[v] = prims.get(v, k, j, i);
                    }
                    physics.prim_to_cons(&pl, &mut ul);
                    physics.prim_to_flux(&pl, dir, &mut fl);
                    let (cmax_l, cmin_l) = physics.characteristic_speeds(&pl, dir);
                    physics.prim_to_cons(&pr, &mut ur);
                    physics.prim_to_flux(&pr, dir, &mut fr);
                    let (cmax_r, cmin_r) = physics.characteristic_speeds(&pr, dir);

                    let cmax_face = 0.0f64.max(cmax_l).max(cmax_r);
                    let cmin_face = 0.0f64.max(-cmin_l).max(-cmin_r);
                    cmax.set(dir.axis(), k, j, i, cmax_face);
                    cmin.set(dir.axis(), k, j, i, cmin_face);

                    let face_flux = fluxes.flux_mut(dir);
                    for v in 0..nvar {
                        face_flux.set(
                            v,
                            k,
                            j,
                            i,
                            two_wave.evaluate(fl[v], fr[v], cmax_face, cmin_face, ul[v], ur[v]),
                        );
                    }
                }
            }
        }
    }
    TaskStatus::Complete
}
