//! Tile sides, tile orientations and the two path slots carried by every tile
//!
//! A Truchet tile joins its four sides in two pairs. Which pairs are joined is
//! the tile's orientation; each pair is one arc (or straight segment) of a path.

use serde::Serialize;
use std::fmt;

/// One of the four edges of a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    /// Edge facing smaller `x`
    Left,
    /// Edge facing smaller `y`
    Top,
    /// Edge facing larger `x`
    Right,
    /// Edge facing larger `y`
    Bottom,
}

impl Side {
    /// All sides, in the order trace origins are visited
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The side of the neighbouring tile that touches this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// Grid offset `(dx, dy)` to the neighbour across this side
    ///
    /// Rows are counted top to bottom, so crossing `Top` moves toward smaller `y`.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
        };
        f.write_str(name)
    }
}

/// The way a tile's two paths connect its sides
///
/// Named after where the path entering from the left side leaves the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Left joins Bottom, Top joins Right (two quarter arcs)
    LeftDown,
    /// Left joins Top, Right joins Bottom (two quarter arcs)
    LeftUp,
    /// Left joins Right, Top joins Bottom (two crossing straight segments)
    LeftRight,
}

impl Orientation {
    /// Every orientation, in random draw order
    pub const ALL: [Self; 3] = [Self::LeftDown, Self::LeftUp, Self::LeftRight];

    /// Orientations a grid may draw from
    ///
    /// The crossing orientation is only available when crossings are allowed.
    pub const fn choices(allow_cross: bool) -> &'static [Self] {
        if allow_cross {
            &Self::ALL
        } else {
            &[Self::LeftDown, Self::LeftUp]
        }
    }

    /// Whether the two paths on this tile cross each other
    pub const fn is_crossing(self) -> bool {
        matches!(self, Self::LeftRight)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftDown => "left-down",
            Self::LeftUp => "left-up",
            Self::LeftRight => "left-right",
        };
        f.write_str(name)
    }
}

/// Which of a tile's two paths a side belongs to
///
/// The first path is always the one touching the left side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathSlot {
    /// Path through the left side
    First,
    /// The other path
    Second,
}

impl PathSlot {
    /// Both slots in index order
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// Position of this slot in a tile's path pair
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// The slot holding the tile's other path
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

impl fmt::Display for PathSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::Second => "second",
        };
        f.write_str(name)
    }
}
