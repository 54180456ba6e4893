//! Completed tiles and the identifiers of the paths running through them

use crate::geometry::{Orientation, PathSlot, Side, path_index_for, slot_sides};
use serde::Serialize;
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of one connected path across the grid
///
/// Identifiers start at 1 and are unique per path, but not contiguous: every
/// trace origin consumes a value even when it turns out to be on a path that
/// already has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PathId(NonZeroU64);

impl PathId {
    /// The first identifier handed out by a labeling pass
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Wrap a raw value, rejecting zero
    pub const fn new(value: u64) -> Option<Self> {
        match NonZeroU64::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Raw numeric value
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    pub(crate) const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled tile of a completed grid
///
/// Tiles are only handed out by a finished [`crate::TruchetGrid`], so both path
/// slots always carry an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    x: usize,
    y: usize,
    orientation: Orientation,
    paths: [PathId; 2],
}

impl Tile {
    pub(crate) const fn new(
        x: usize,
        y: usize,
        orientation: Orientation,
        paths: [PathId; 2],
    ) -> Self {
        Self {
            x,
            y,
            orientation,
            paths,
        }
    }

    /// Column of this tile
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row of this tile
    pub const fn y(&self) -> usize {
        self.y
    }

    /// How the tile joins its sides
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Path identifiers indexed by slot
    pub const fn paths(&self) -> [PathId; 2] {
        self.paths
    }

    /// Path occupying `slot`
    pub const fn path(&self, slot: PathSlot) -> PathId {
        let [first, second] = self.paths;
        match slot {
            PathSlot::First => first,
            PathSlot::Second => second,
        }
    }

    /// Path passing through `side`
    pub fn path_for_side(&self, side: Side) -> PathId {
        self.path(path_index_for(side, self.orientation))
    }

    /// The two sides joined by the path in `slot`
    pub fn sides(&self, slot: PathSlot) -> [Side; 2] {
        slot_sides(slot, self.orientation)
    }
}
