//! Tile geometry shared by the grid engine
//!
//! This module contains the stateless connectivity rules:
//! - Tile sides, orientations and path slots
//! - Transition tables mapping an entry side to the next tile along a path

/// Sides, orientations and path slots
pub mod side;
/// Table-driven transitions between neighbouring tiles
pub mod transitions;

pub use side::{Orientation, PathSlot, Side};
pub use transitions::{
    Transition, coordinate_delta, exit_side, next_entry_side, path_index_for, slot_sides,
    transition,
};
