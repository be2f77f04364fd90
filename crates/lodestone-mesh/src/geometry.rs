//! Metric factors at the grid locations kernels sample.

use crate::range::Direction;

/// Where on the cell a metric quantity is sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLoc {
    /// Cell center.
    Center,
    /// Center of the low X1 face.
    FaceX1,
    /// Center of the low X2 face.
    FaceX2,
    /// Center of the low X3 face.
    FaceX3,
    /// The low corner shared by all three low faces.
    Corner,
}

/// Metric factors for one block.
///
/// The geometry is assumed symmetric in X3, so samples are addressed by
/// `(j, i)` only. Conserved fields carry the metric determinant; the
/// primitive sync divides it back out, and the divergence stencil needs
/// the cell spacings.
pub trait Geometry: Send + Sync {
    /// Square root of the metric determinant at a grid location.
    fn gdet(&self, loc: GridLoc, j: usize, i: usize) -> f64;

    /// Cell spacing along an axis at the given index.
    fn dx(&self, dir: Direction, idx: usize) -> f64;
}

/// Cartesian geometry with constant spacing and unit determinant scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformGeometry {
    /// Spacing along X1.
    pub dx1: f64,
    /// Spacing along X2.
    pub dx2: f64,
    /// Spacing along X3.
    pub dx3: f64,
    /// Constant metric determinant factor.
    pub gdet: f64,
}

impl UniformGeometry {
    /// Unit spacing, unit determinant.
    pub fn unit() -> Self {
        Self {
            dx1: 1.0,
            dx2: 1.0,
            dx3: 1.0,
            gdet: 1.0,
        }
    }

    /// Uniform cubic cells of side `dx`.
    pub fn cubic(dx: f64) -> Self {
        Self {
            dx1: dx,
            dx2: dx,
            dx3: dx,
            gdet: 1.0,
        }
    }
}

impl Default for UniformGeometry {
    fn default() -> Self {
        Self::unit()
    }
}

impl Geometry for UniformGeometry {
    fn gdet(&self, _loc: GridLoc, _j: usize, _i: usize) -> f64 {
        self.gdet
    }

    fn dx(&self, dir: Direction, _idx: usize) -> f64 {
        match dir {
            Direction::X1 => self.dx1,
            Direction::X2 => self.dx2,
            Direction::X3 => self.dx3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_geometry_ignores_position() {
        let g = UniformGeometry::cubic(0.25);
        assert_eq!(g.dx(Direction::X1, 0), g.dx(Direction::X1, 11));
        assert_eq!(g.gdet(GridLoc::Center, 1, 2), g.gdet(GridLoc::Corner, 9, 9));
        assert_eq!(g.dx(Direction::X2, 5), 0.25);
    }
}
