//! Block faces and boundary classification.

use std::fmt;

use crate::range::Direction;

/// One of the six faces of a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    /// Low-index face on X1.
    InnerX1,
    /// High-index face on X1.
    OuterX1,
    /// Low-index face on X2.
    InnerX2,
    /// High-index face on X2.
    OuterX2,
    /// Low-index face on X3.
    InnerX3,
    /// High-index face on X3.
    OuterX3,
}

impl BlockFace {
    /// All six faces in storage order.
    pub const ALL: [Self; 6] = [
        Self::InnerX1,
        Self::OuterX1,
        Self::InnerX2,
        Self::OuterX2,
        Self::InnerX3,
        Self::OuterX3,
    ];

    /// Storage index into the per-face flag table.
    pub fn index(self) -> usize {
        match self {
            Self::InnerX1 => 0,
            Self::OuterX1 => 1,
            Self::InnerX2 => 2,
            Self::OuterX2 => 3,
            Self::InnerX3 => 4,
            Self::OuterX3 => 5,
        }
    }

    /// The axis this face bounds.
    pub fn direction(self) -> Direction {
        match self {
            Self::InnerX1 | Self::OuterX1 => Direction::X1,
            Self::InnerX2 | Self::OuterX2 => Direction::X2,
            Self::InnerX3 | Self::OuterX3 => Direction::X3,
        }
    }

    /// Whether this is a low-index face.
    pub fn is_inner(self) -> bool {
        matches!(self, Self::InnerX1 | Self::InnerX2 | Self::InnerX3)
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InnerX1 => "inner_x1",
            Self::OuterX1 => "outer_x1",
            Self::InnerX2 => "inner_x2",
            Self::OuterX2 => "outer_x2",
            Self::InnerX3 => "inner_x3",
            Self::OuterX3 => "outer_x3",
        };
        f.write_str(name)
    }
}

/// How a block face is closed off.
///
/// Only [`BoundaryFlag::User`] currently changes kernel behavior (the
/// polar flux fixer runs on `User` X2 faces); the other variants exist so
/// a mesh driver can record its ghost-exchange topology on the block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryFlag {
    /// The face abuts another block; ghosts are filled by exchange.
    #[default]
    Neighbor,
    /// Periodic wraparound.
    Periodic,
    /// Zero-gradient copy into the ghosts.
    Outflow,
    /// Mirror reflection into the ghosts.
    Reflect,
    /// A user-supplied boundary, e.g. a coordinate pole.
    User,
}
