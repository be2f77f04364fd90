//! Component-major cell and flux field storage.

use crate::block::MeshBlock;
use crate::range::Direction;

/// A dense cell-centered array over one block, component-major.
///
/// Storage is a flat `Vec<f64>` addressed `(component, k, j, i)` with `i`
/// fastest-varying, so a fixed component is contiguous in memory and the
/// innermost kernel loop is a unit-stride scan. Double precision is
/// deliberate: the divergence-free property is maintained to rounding,
/// and single precision would let the error drift visibly over long
/// integrations.
#[derive(Clone, Debug, PartialEq)]
pub struct CellField {
    ncomp: usize,
    n3: usize,
    n2: usize,
    n1: usize,
    data: Vec<f64>,
}

impl CellField {
    /// Zero-filled field over the block's entire domain.
    pub fn new(block: &MeshBlock, ncomp: usize) -> Self {
        Self::from_extents(ncomp, block.n3(), block.n2(), block.n1())
    }

    /// Zero-filled field with explicit extents.
    pub fn from_extents(ncomp: usize, n3: usize, n2: usize, n1: usize) -> Self {
        Self {
            ncomp,
            n3,
            n2,
            n1,
            data: vec![0.0; ncomp * n3 * n2 * n1],
        }
    }

    /// Number of components.
    pub fn ncomp(&self) -> usize {
        self.ncomp
    }

    /// Extents as `(ncomp, n3, n2, n1)`.
    pub fn shape(&self) -> (usize, usize, usize, usize) {
        (self.ncomp, self.n3, self.n2, self.n1)
    }

    /// Flat length of the backing buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the backing buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, c: usize, k: usize, j: usize, i: usize) -> usize {
        debug_assert!(c < self.ncomp && k < self.n3 && j < self.n2 && i < self.n1);
        ((c * self.n3 + k) * self.n2 + j) * self.n1 + i
    }

    /// Read one value.
    #[inline]
    pub fn get(&self, c: usize, k: usize, j: usize, i: usize) -> f64 {
        self.data[self.index(c, k, j, i)]
    }

    /// Write one value.
    #[inline]
    pub fn set(&mut self, c: usize, k: usize, j: usize, i: usize, v: f64) {
        let idx = self.index(c, k, j, i);
        self.data[idx] = v;
    }

    /// Add to one value in place.
    #[inline]
    pub fn add(&mut self, c: usize, k: usize, j: usize, i: usize, v: f64) {
        let idx = self.index(c, k, j, i);
        self.data[idx] += v;
    }

    /// Fill every cell of every component.
    pub fn fill(&mut self, v: f64) {
        self.data.fill(v);
    }

    /// The whole buffer as a flat slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// The whole buffer as a mutable flat slice.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// One component as a contiguous slice.
    pub fn comp(&self, c: usize) -> &[f64] {
        let stride = self.n3 * self.n2 * self.n1;
        &self.data[c * stride..(c + 1) * stride]
    }

    /// One component as a mutable contiguous slice.
    pub fn comp_mut(&mut self, c: usize) -> &mut [f64] {
        let stride = self.n3 * self.n2 * self.n1;
        &mut self.data[c * stride..(c + 1) * stride]
    }

    /// Fill every cell of one component.
    pub fn comp_fill(&mut self, c: usize, v: f64) {
        self.comp_mut(c).fill(v);
    }
}

/// One cell-centered flux array per direction.
///
/// `flux(d)` holds the fluxes through faces normal to `d`, stored at the
/// face's low-side cell index. All three arrays are allocated even on
/// lower-dimensional blocks (the collapsed axes cost a single plane), so
/// kernels can be written without per-direction `Option` plumbing.
#[derive(Clone, Debug, PartialEq)]
pub struct FluxField {
    per_dir: [CellField; 3],
}

impl FluxField {
    /// Zero-filled flux arrays with `ncomp` variables per direction.
    pub fn new(block: &MeshBlock, ncomp: usize) -> Self {
        Self {
            per_dir: [
                CellField::new(block, ncomp),
                CellField::new(block, ncomp),
                CellField::new(block, ncomp),
            ],
        }
    }

    /// Number of variables carried per direction.
    pub fn ncomp(&self) -> usize {
        self.per_dir[0].ncomp()
    }

    /// The flux array for one direction.
    pub fn flux(&self, dir: Direction) -> &CellField {
        &self.per_dir[dir.axis()]
    }

    /// Mutable flux array for one direction.
    pub fn flux_mut(&mut self, dir: Direction) -> &mut CellField {
        &mut self.per_dir[dir.axis()]
    }
}
