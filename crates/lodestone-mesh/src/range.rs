//! Inclusive index ranges and iteration bounds.

use std::fmt;

/// A coordinate axis of the structured block.
///
/// Also used to select a flux array: `Direction::X1` names the fluxes
/// through X1 faces, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The fastest-varying axis (index `i`).
    X1,
    /// The middle axis (index `j`).
    X2,
    /// The slowest-varying axis (index `k`).
    X3,
}

impl Direction {
    /// All three directions in axis order.
    pub const ALL: [Self; 3] = [Self::X1, Self::X2, Self::X3];

    /// Zero-based axis number (X1 = 0).
    pub fn axis(self) -> usize {
        match self {
            Self::X1 => 0,
            Self::X2 => 1,
            Self::X3 => 2,
        }
    }

    /// Lowercase axis label for error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::X3 => "x3",
        }
    }

    /// Unit offset along this axis as `(dk, dj, di)`.
    pub fn offset(self) -> (usize, usize, usize) {
        match self {
            Self::X1 => (0, 0, 1),
            Self::X2 => (0, 1, 0),
            Self::X3 => (1, 0, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which part of the block an operation covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    /// Physical cells only, excluding the ghost halo.
    Interior,
    /// Every allocated cell, ghosts included.
    Entire,
}

/// An inclusive 1D index range `[s, e]`.
///
/// Both endpoints are valid indices; `len()` is `e - s + 1`. A collapsed
/// axis is represented as `[0, 0]`, never as an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
    /// First index (inclusive).
    pub s: usize,
    /// Last index (inclusive).
    pub e: usize,
}

impl IndexRange {
    /// Build a range; `s` must not exceed `e`.
    pub fn new(s: usize, e: usize) -> Self {
        debug_assert!(s <= e, "inverted range [{s}, {e}]");
        Self { s, e }
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.e - self.s + 1
    }

    /// Inclusive ranges are never empty; present for clippy symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `i` lies within the range.
    pub fn contains(&self, i: usize) -> bool {
        self.s <= i && i <= self.e
    }

    /// Iterate the covered indices.
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.s..=self.e
    }

    /// Grow by `lo` on the low side and `hi` on the high side.
    ///
    /// The low side must have `lo` cells of room; callers only extend
    /// into an allocated ghost halo.
    pub fn grow(&self, lo: usize, hi: usize) -> Self {
        debug_assert!(self.s >= lo, "range would extend below zero");
        Self {
            s: self.s - lo,
            e: self.e + hi,
        }
    }

    /// Drop `n` indices from the low side.
    pub fn shrink_low(&self, n: usize) -> Self {
        debug_assert!(self.s + n <= self.e, "range would invert");
        Self {
            s: self.s + n,
            e: self.e,
        }
    }
}

/// Per-axis iteration bounds `(kb, jb, ib)` for a triple loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBounds {
    /// X3 (slowest) range.
    pub kb: IndexRange,
    /// X2 range.
    pub jb: IndexRange,
    /// X1 (fastest) range.
    pub ib: IndexRange,
}

impl IndexBounds {
    /// The range along one axis.
    pub fn range(&self, dir: Direction) -> IndexRange {
        match dir {
            Direction::X1 => self.ib,
            Direction::X2 => self.jb,
            Direction::X3 => self.kb,
        }
    }

    /// Mutable access to the range along one axis.
    pub fn range_mut(&mut self, dir: Direction) -> &mut IndexRange {
        match dir {
            Direction::X1 => &mut self.ib,
            Direction::X2 => &mut self.jb,
            Direction::X3 => &mut self.kb,
        }
    }

    /// Total number of `(k, j, i)` triples covered.
    pub fn cell_count(&self) -> usize {
        self.kb.len() * self.jb.len() * self.ib.len()
    }
}
