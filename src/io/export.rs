//! Text and JSON encodings of a completed grid
//!
//! The text formats are line oriented: a `#` header line, a column header, then
//! one row per tile or per path with fields joined by [`TEXT_SEPARATOR`].

use crate::grid::{GridConfig, Tile, TruchetGrid, TruchetPath};
use crate::io::configuration::TEXT_SEPARATOR;
use crate::io::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::iter;

/// Output encodings offered by the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One row per tile with its orientation and both path identifiers
    Text,
    /// One row per path with every segment it occupies
    Paths,
    /// Complete grid document as pretty-printed JSON
    Json,
}

/// Serializable snapshot of a completed grid
#[derive(Debug, Serialize)]
pub struct GridDocument<'a> {
    /// Dimensions and options the grid was built with
    pub config: GridConfig,
    /// Number of distinct paths
    pub path_count: usize,
    /// Tiles, columns outermost
    pub tiles: &'a [Tile],
    /// Paths ordered by identifier
    pub paths: Vec<TruchetPath>,
}

impl<'a> GridDocument<'a> {
    /// Snapshot `grid`
    pub fn new(grid: &'a TruchetGrid) -> Self {
        let paths = grid.paths();
        Self {
            config: grid.config(),
            path_count: paths.len(),
            tiles: grid.tiles(),
            paths,
        }
    }
}

/// Encode `grid` in the requested format
///
/// # Errors
///
/// Returns an error if JSON encoding fails
pub fn export(grid: &TruchetGrid, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(tile_table(grid)),
        ExportFormat::Paths => Ok(path_table(grid)),
        ExportFormat::Json => to_json(grid),
    }
}

/// One row per tile: `x y orientation first second`
pub fn tile_table(grid: &TruchetGrid) -> String {
    let header = format!(
        "# truchet {}x{} cross={} paths={}",
        grid.width(),
        grid.height(),
        grid.allow_cross(),
        grid.path_count()
    );
    let columns = ["x", "y", "orientation", "first", "second"].join(TEXT_SEPARATOR);
    let rows = grid.tiles().iter().map(|tile| {
        let [first, second] = tile.paths();
        [
            tile.x().to_string(),
            tile.y().to_string(),
            tile.orientation().to_string(),
            first.to_string(),
            second.to_string(),
        ]
        .join(TEXT_SEPARATOR)
    });

    iter::once(header)
        .chain(iter::once(columns))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One row per path: `id kind segments...` with segments written `x,y:slot`
pub fn path_table(grid: &TruchetGrid) -> String {
    let paths = grid.paths();
    let header = format!("# truchet paths={}", paths.len());
    let columns = ["id", "kind", "segments"].join(TEXT_SEPARATOR);
    let rows = paths.iter().map(|path| {
        let kind = if path.closed { "closed" } else { "open" };
        iter::once(path.id.to_string())
            .chain(iter::once(kind.to_string()))
            .chain(
                path.segments
                    .iter()
                    .map(|segment| format!("{},{}:{}", segment.x, segment.y, segment.slot)),
            )
            .collect::<Vec<_>>()
            .join(TEXT_SEPARATOR)
    });

    iter::once(header)
        .chain(iter::once(columns))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed [`GridDocument`]
///
/// # Errors
///
/// Returns an error if the encoder fails
pub fn to_json(grid: &TruchetGrid) -> Result<String> {
    Ok(serde_json::to_string_pretty(&GridDocument::new(grid))?)
}
