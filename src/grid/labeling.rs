//! Path tracing that assigns an identifier to every tile slot
//!
//! Every `(tile, entry side)` pair is visited once as a trace origin, columns
//! outermost, then rows, then sides in [`Side::ALL`] order. Each origin takes the
//! next counter value. When the origin slot is already labeled the value is
//! dropped; otherwise the path is walked in both directions from the origin and
//! every slot it crosses receives the new identifier.
//!
//! A walk stops when it leaves the grid or reaches a slot that is already
//! labeled. The second condition closes interior loops. Each step labels one
//! previously unlabeled slot, so no walk is longer than `2 * width * height`.

use crate::geometry::{Orientation, PathSlot, Side, path_index_for, transition};
use crate::grid::tile::{PathId, Tile};
use ndarray::Array2;
use serde::Serialize;

/// Result of visiting one trace origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraceOutcome {
    /// The origin slot was already labeled; the allocated identifier is unused
    Abandoned {
        /// Identifier already present on the origin slot
        existing: PathId,
    },
    /// A new path was discovered and labeled
    Traced {
        /// Number of tile slots labeled, counting both directions
        steps: usize,
    },
}

/// One visited trace origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Column of the origin tile
    pub x: usize,
    /// Row of the origin tile
    pub y: usize,
    /// Side the trace enters the origin tile from
    pub entry: Side,
    /// Counter value allocated for this origin
    pub allocated: PathId,
    /// What the trace did
    pub outcome: TraceOutcome,
}

impl TraceRecord {
    /// Identifier the origin slot carries after this trace
    pub const fn label(&self) -> PathId {
        match self.outcome {
            TraceOutcome::Abandoned { existing } => existing,
            TraceOutcome::Traced { .. } => self.allocated,
        }
    }

    /// Whether this origin discovered a new path
    pub const fn is_discovery(&self) -> bool {
        matches!(self.outcome, TraceOutcome::Traced { .. })
    }
}

/// Receives a record for every trace origin during grid construction
pub trait TraceObserver {
    /// Called once per origin, in visiting order
    fn on_trace(&mut self, record: &TraceRecord);
}

impl TraceObserver for () {
    fn on_trace(&mut self, _record: &TraceRecord) {}
}

impl TraceObserver for Vec<TraceRecord> {
    fn on_trace(&mut self, record: &TraceRecord) {
        self.push(*record);
    }
}

/// Labels of one tile while tracing is in progress
#[derive(Debug, Clone, Copy, Default)]
struct SlotPair {
    first: Option<PathId>,
    second: Option<PathId>,
}

impl SlotPair {
    const fn get(&self, slot: PathSlot) -> Option<PathId> {
        match slot {
            PathSlot::First => self.first,
            PathSlot::Second => self.second,
        }
    }

    const fn set(&mut self, slot: PathSlot, id: PathId) {
        match slot {
            PathSlot::First => self.first = Some(id),
            PathSlot::Second => self.second = Some(id),
        }
    }
}

/// Position of a walk: the tile it is on and the side it came in through
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: usize,
    y: usize,
    entry: Side,
}

impl Cursor {
    /// Move by `delta` onto a tile entered through `entry`, or `None` past the border
    fn step(
        self,
        delta: (isize, isize),
        entry: Side,
        dimensions: (usize, usize),
    ) -> Option<Self> {
        let x = self.x.checked_add_signed(delta.0)?;
        let y = self.y.checked_add_signed(delta.1)?;
        (x < dimensions.0 && y < dimensions.1).then_some(Self { x, y, entry })
    }
}

/// Labeling pass over a fixed orientation layout
pub(crate) struct PathLabeler<'a> {
    orientations: &'a Array2<Orientation>,
    slots: Array2<SlotPair>,
    next_id: PathId,
    discovered: usize,
    abandoned: usize,
}

impl<'a> PathLabeler<'a> {
    pub(crate) fn new(orientations: &'a Array2<Orientation>) -> Self {
        Self {
            orientations,
            slots: Array2::from_elem(orientations.raw_dim(), SlotPair::default()),
            next_id: PathId::FIRST,
            discovered: 0,
            abandoned: 0,
        }
    }

    /// Trace every origin and return the completed tiles, columns outermost
    ///
    /// A tile is finished once its own four origins have been visited: labels
    /// are never overwritten, and between them those origins cover both slots.
    pub(crate) fn label_all<O>(mut self, observer: &mut O) -> Vec<Tile>
    where
        O: TraceObserver + ?Sized,
    {
        let (width, height) = self.orientations.dim();
        let mut tiles = Vec::with_capacity(width * height);

        for x in 0..width {
            for y in 0..height {
                let Some(&orientation) = self.orientations.get((x, y)) else {
                    continue;
                };

                let [left, top, right, _] = Side::ALL
                    .map(|entry| self.trace_origin(Cursor { x, y, entry }, orientation, observer));

                // The second path touches Top unless Top is joined to Left
                let second = match path_index_for(Side::Top, orientation) {
                    PathSlot::Second => top,
                    PathSlot::First => right,
                };

                tiles.push(Tile::new(x, y, orientation, [left, second]));
            }
        }

        tracing::debug!(
            paths = self.discovered,
            abandoned = self.abandoned,
            last_id = self.next_id.get().saturating_sub(1),
            "labeled tile paths"
        );

        tiles
    }

    fn trace_origin<O>(
        &mut self,
        origin: Cursor,
        orientation: Orientation,
        observer: &mut O,
    ) -> PathId
    where
        O: TraceObserver + ?Sized,
    {
        let allocated = self.allocate();
        let slot = path_index_for(origin.entry, orientation);
        let existing = self
            .slots
            .get((origin.x, origin.y))
            .and_then(|pair| pair.get(slot));

        let outcome = if let Some(existing) = existing {
            self.abandoned += 1;
            TraceOutcome::Abandoned { existing }
        } else {
            self.discovered += 1;
            let forward = self.walk(origin, allocated);

            // The part of the path behind the origin starts on the neighbour
            // across the entry side
            let behind = origin.step(
                origin.entry.offset(),
                origin.entry.opposite(),
                self.orientations.dim(),
            );
            let backward = behind.map_or(0, |cursor| self.walk(cursor, allocated));

            TraceOutcome::Traced {
                steps: forward + backward,
            }
        };

        let record = TraceRecord {
            x: origin.x,
            y: origin.y,
            entry: origin.entry,
            allocated,
            outcome,
        };
        tracing::trace!(
            x = record.x,
            y = record.y,
            entry = %record.entry,
            allocated = %record.allocated,
            label = %record.label(),
            "visited trace origin"
        );
        observer.on_trace(&record);

        record.label()
    }

    /// Label slots along the path until the border or an already labeled slot
    fn walk(&mut self, start: Cursor, id: PathId) -> usize {
        let dimensions = self.orientations.dim();
        let mut cursor = Some(start);
        let mut steps = 0;

        while let Some(current) = cursor {
            let Some(&orientation) = self.orientations.get((current.x, current.y)) else {
                break;
            };
            let crossing = transition(current.entry, orientation);
            let Some(pair) = self.slots.get_mut((current.x, current.y)) else {
                break;
            };
            if pair.get(crossing.slot).is_some() {
                break;
            }

            pair.set(crossing.slot, id);
            steps += 1;
            cursor = current.step(crossing.delta, crossing.next_entry, dimensions);
        }

        steps
    }

    const fn allocate(&mut self) -> PathId {
        let id = self.next_id;
        self.next_id = id.successor();
        id
    }
}
