//! The structured mesh block and its range builders.

use lodestone_core::ConfigError;
use smallvec::SmallVec;

use crate::boundary::{BlockFace, BoundaryFlag};
use crate::range::{Direction, Domain, IndexBounds, IndexRange};

/// Ghost-cell depth on every active axis.
///
/// Three cells of halo give the corner-difference and face-replacement
/// stencils one-cell slack on the low side and two on the high side
/// without any kernel reading outside the allocation.
pub const NGHOST: usize = 3;

/// Minimum interior extent on an active axis.
const MIN_EXTENT: usize = 2;

/// A single structured block: interior extents plus a ghost halo of
/// [`NGHOST`] cells on each active axis.
///
/// Inactive axes (beyond `ndim`) are collapsed to a single cell at index
/// zero and carry no halo. The block itself holds no field data; it is
/// the index-space authority that every kernel builds its iteration
/// ranges from.
#[derive(Clone, Debug)]
pub struct MeshBlock {
    ndim: usize,
    nx: [usize; 3],
    boundary: [BoundaryFlag; 6],
}

impl MeshBlock {
    /// A 1D block with `nx1` interior cells.
    pub fn new_1d(nx1: usize) -> Result<Self, ConfigError> {
        Self::build(1, [nx1, 1, 1])
    }

    /// A 2D block with `nx1 * nx2` interior cells.
    pub fn new_2d(nx1: usize, nx2: usize) -> Result<Self, ConfigError> {
        Self::build(2, [nx1, nx2, 1])
    }

    /// A 3D block with `nx1 * nx2 * nx3` interior cells.
    pub fn new_3d(nx1: usize, nx2: usize, nx3: usize) -> Result<Self, ConfigError> {
        Self::build(3, [nx1, nx2, nx3])
    }

    fn build(ndim: usize, nx: [usize; 3]) -> Result<Self, ConfigError> {
        for dir in Direction::ALL.iter().take(ndim) {
            let extent = nx[dir.axis()];
            if extent < MIN_EXTENT {
                return Err(ConfigError::ExtentTooSmall {
                    axis: dir.label(),
                    extent,
                    min: MIN_EXTENT,
                });
            }
        }
        Ok(Self {
            ndim,
            nx,
            boundary: [BoundaryFlag::default(); 6],
        })
    }

    /// Set the flag for one face (builder style).
    pub fn with_boundary(mut self, face: BlockFace, flag: BoundaryFlag) -> Self {
        self.boundary[face.index()] = flag;
        self
    }

    /// The flag recorded for one face.
    pub fn boundary_flag(&self, face: BlockFace) -> BoundaryFlag {
        self.boundary[face.index()]
    }

    /// Number of active axes (1, 2, or 3).
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Whether an axis is active on this block.
    pub fn is_active(&self, dir: Direction) -> bool {
        dir.axis() < self.ndim
    }

    /// The active directions in axis order.
    pub fn active_dirs(&self) -> SmallVec<[Direction; 3]> {
        Direction::ALL.iter().copied().take(self.ndim).collect()
    }

    /// Interior extent along an axis (1 on inactive axes).
    pub fn interior_extent(&self, dir: Direction) -> usize {
        self.nx[dir.axis()]
    }

    /// Allocated extent along an axis, halo included.
    pub fn extent(&self, dir: Direction) -> usize {
        if self.is_active(dir) {
            self.nx[dir.axis()] + 2 * NGHOST
        } else {
            1
        }
    }

    /// Allocated extent along X1.
    pub fn n1(&self) -> usize {
        self.extent(Direction::X1)
    }

    /// Allocated extent along X2.
    pub fn n2(&self) -> usize {
        self.extent(Direction::X2)
    }

    /// Allocated extent along X3.
    pub fn n3(&self) -> usize {
        self.extent(Direction::X3)
    }

    /// Total allocated cell count.
    pub fn cell_count(&self) -> usize {
        self.n1() * self.n2() * self.n3()
    }

    /// The 1D range along an axis for the given domain.
    pub fn axis_range(&self, dir: Direction, domain: Domain) -> IndexRange {
        if !self.is_active(dir) {
            return IndexRange::new(0, 0);
        }
        match domain {
            Domain::Interior => IndexRange::new(NGHOST, NGHOST + self.nx[dir.axis()] - 1),
            Domain::Entire => IndexRange::new(0, self.extent(dir) - 1),
        }
    }

    /// Cell-centered bounds over the given domain.
    pub fn cell_bounds(&self, domain: Domain) -> IndexBounds {
        IndexBounds {
            kb: self.axis_range(Direction::X3, domain),
            jb: self.axis_range(Direction::X2, domain),
            ib: self.axis_range(Direction::X1, domain),
        }
    }

    /// Interior bounds grown by `lo`/`hi` cells into the halo on every
    /// active axis. Inactive axes stay collapsed.
    pub fn extended_bounds(&self, lo: usize, hi: usize) -> IndexBounds {
        let mut b = self.cell_bounds(Domain::Interior);
        for dir in self.active_dirs() {
            *b.range_mut(dir) = b.range(dir).grow(lo, hi);
        }
        b
    }

    /// Face-centered bounds for the faces normal to `dir`: interior cells
    /// on the transverse axes, plus the closing face on the own axis.
    ///
    /// `dir` must be active on this block.
    pub fn face_bounds(&self, dir: Direction) -> IndexBounds {
        debug_assert!(self.is_active(dir));
        let mut b = self.cell_bounds(Domain::Interior);
        b.range_mut(dir).e += 1;
        b
    }

    /// [`Self::face_bounds`] widened by `lo`/`hi` halo cells on every
    /// active axis (so the own axis covers `[s - lo, e + hi + 1]`).
    pub fn face_extended_bounds(&self, dir: Direction, lo: usize, hi: usize) -> IndexBounds {
        debug_assert!(self.is_active(dir));
        let mut b = self.extended_bounds(lo, hi);
        b.range_mut(dir).e += 1;
        b
    }

    /// Interior bounds with the low side pulled in one cell on every
    /// active axis, for corner-centered stencils that read `idx - 1`.
    pub fn corner_interior_bounds(&self) -> IndexBounds {
        let mut b = self.cell_bounds(Domain::Interior);
        for dir in self.active_dirs() {
            *b.range_mut(dir) = b.range(dir).shrink_low(1);
        }
        b
    }
}
