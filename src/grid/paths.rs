//! Per-path views of a completed grid
//!
//! Tiles answer "which paths run through here"; these views answer the reverse,
//! listing every tile slot a path occupies.

use crate::geometry::{PathSlot, Side};
use crate::grid::tile::{PathId, Tile};
use crate::grid::truchet::TruchetGrid;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One tile slot occupied by a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PathSegment {
    /// Column of the tile
    pub x: usize,
    /// Row of the tile
    pub y: usize,
    /// Slot of the tile the path occupies
    pub slot: PathSlot,
}

/// Every segment of one connected path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruchetPath {
    /// Identifier shared by all segments
    pub id: PathId,
    /// Segments in tile order (columns outermost), not path order
    pub segments: Vec<PathSegment>,
    /// True when the path is a loop that never reaches the grid border
    pub closed: bool,
}

impl TruchetPath {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether the path occupies `slot` of tile `(x, y)`
    pub fn contains(&self, x: usize, y: usize, slot: PathSlot) -> bool {
        self.segments.contains(&PathSegment { x, y, slot })
    }
}

impl TruchetGrid {
    /// Every path in the grid, ordered by identifier
    pub fn paths(&self) -> Vec<TruchetPath> {
        let mut by_id: BTreeMap<PathId, TruchetPath> = BTreeMap::new();

        for tile in self.tiles() {
            for slot in PathSlot::ALL {
                let id = tile.path(slot);
                let path = by_id.entry(id).or_insert_with(|| TruchetPath {
                    id,
                    segments: Vec::new(),
                    closed: true,
                });
                path.segments.push(PathSegment {
                    x: tile.x(),
                    y: tile.y(),
                    slot,
                });
                if self.slot_touches_border(tile, slot) {
                    path.closed = false;
                }
            }
        }

        by_id.into_values().collect()
    }

    /// The path labeled `id`, if any tile carries it
    pub fn path(&self, id: PathId) -> Option<TruchetPath> {
        let mut closed = true;
        let mut segments = Vec::new();

        for tile in self.tiles() {
            for slot in PathSlot::ALL {
                if tile.path(slot) != id {
                    continue;
                }
                segments.push(PathSegment {
                    x: tile.x(),
                    y: tile.y(),
                    slot,
                });
                closed &= !self.slot_touches_border(tile, slot);
            }
        }

        if segments.is_empty() {
            return None;
        }

        Some(TruchetPath {
            id,
            segments,
            closed,
        })
    }

    /// Identifiers in use, ascending
    pub fn path_ids(&self) -> BTreeSet<PathId> {
        self.tiles()
            .iter()
            .flat_map(|tile| tile.paths())
            .collect()
    }

    /// Number of distinct paths
    pub fn path_count(&self) -> usize {
        self.path_ids().len()
    }

    fn slot_touches_border(&self, tile: &Tile, slot: PathSlot) -> bool {
        tile.sides(slot)
            .into_iter()
            .any(|side| self.on_border(tile.x(), tile.y(), side))
    }

    fn on_border(&self, x: usize, y: usize, side: Side) -> bool {
        match side {
            Side::Left => x == 0,
            Side::Top => y == 0,
            Side::Right => x + 1 == self.width(),
            Side::Bottom => y + 1 == self.height(),
        }
    }
}
