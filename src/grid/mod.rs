//! Truchet grid construction and path labeling
//!
//! This module contains the grid engine:
//! - Completed tiles and path identifiers
//! - The path tracing pass that labels every tile slot
//! - Grid construction from a random source
//! - Per-path enumeration of labeled segments

/// Path tracing over oriented tiles
pub mod labeling;
/// Per-path views of a completed grid
pub mod paths;
/// Completed tiles and path identifiers
pub mod tile;
/// Grid configuration and construction
pub mod truchet;

pub use labeling::{TraceObserver, TraceOutcome, TraceRecord};
pub use paths::{PathSegment, TruchetPath};
pub use tile::{PathId, Tile};
pub use truchet::{GridConfig, TruchetGrid};
