//! Truchet tile grid generation with connected path labeling
//!
//! Each tile of a width x height grid draws one of three orientations, which
//! fixes how its two paths join its four sides. A tracing pass then follows
//! every path across tile borders and gives each connected path, whether it
//! runs border to border or closes into a loop, its own identifier.

#![forbid(unsafe_code)]

/// Tile sides, orientations and connectivity tables
pub mod geometry;
/// Grid construction, path labeling and per-path views
pub mod grid;
/// Configuration, errors, export formats and the command line
pub mod io;
/// Random sources for orientation draws
pub mod random;

pub use grid::{GridConfig, PathId, Tile, TruchetGrid};
pub use io::error::{Result, TruchetError};
