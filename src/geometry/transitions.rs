//! Connectivity tables for following a path from tile to tile
//!
//! Every lookup derives from [`exit_side`], the one table of facts about which
//! side a path leaves through. Slot membership, the entry side of the next tile
//! and the coordinate step are all computed from it.

use crate::geometry::side::{Orientation, PathSlot, Side};

/// Side a path leaves through after entering a tile from `entry`
pub const fn exit_side(entry: Side, orientation: Orientation) -> Side {
    match (entry, orientation) {
        (Side::Top, Orientation::LeftUp)
        | (Side::Right, Orientation::LeftRight)
        | (Side::Bottom, Orientation::LeftDown) => Side::Left,
        (Side::Left, Orientation::LeftUp)
        | (Side::Right, Orientation::LeftDown)
        | (Side::Bottom, Orientation::LeftRight) => Side::Top,
        (Side::Left, Orientation::LeftRight)
        | (Side::Top, Orientation::LeftDown)
        | (Side::Bottom, Orientation::LeftUp) => Side::Right,
        (Side::Left, Orientation::LeftDown)
        | (Side::Top, Orientation::LeftRight)
        | (Side::Right, Orientation::LeftUp) => Side::Bottom,
    }
}

/// Which of the tile's two path slots a path entering from `side` occupies
pub fn path_index_for(side: Side, orientation: Orientation) -> PathSlot {
    if side == Side::Left || side == exit_side(Side::Left, orientation) {
        PathSlot::First
    } else {
        PathSlot::Second
    }
}

/// Side of the *next* tile a path enters after crossing this one from `side`
///
/// Leaving through the right edge means entering the neighbour's left edge, and
/// so on.
pub const fn next_entry_side(side: Side, orientation: Orientation) -> Side {
    exit_side(side, orientation).opposite()
}

/// Grid step `(dx, dy)` to the tile a path reaches after entering from `side`
pub const fn coordinate_delta(side: Side, orientation: Orientation) -> (isize, isize) {
    exit_side(side, orientation).offset()
}

/// The two sides joined by the path in `slot`
///
/// The first entry is the side the slot is anchored on: Left for the first
/// slot, the lower of the remaining sides for the second.
pub fn slot_sides(slot: PathSlot, orientation: Orientation) -> [Side; 2] {
    let anchor = match slot {
        PathSlot::First => Side::Left,
        PathSlot::Second => {
            if path_index_for(Side::Top, orientation) == PathSlot::Second {
                Side::Top
            } else {
                Side::Right
            }
        }
    };
    [anchor, exit_side(anchor, orientation)]
}

/// Everything the tracer needs to cross one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Slot the path occupies on the current tile
    pub slot: PathSlot,
    /// Side the path enters the next tile from
    pub next_entry: Side,
    /// Grid step to the next tile
    pub delta: (isize, isize),
}

/// Fused lookup of slot, next entry side and step for one tile crossing
pub fn transition(entry: Side, orientation: Orientation) -> Transition {
    Transition {
        slot: path_index_for(entry, orientation),
        next_entry: next_entry_side(entry, orientation),
        delta: coordinate_delta(entry, orientation),
    }
}
