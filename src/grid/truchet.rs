//! Grid configuration and construction
//!
//! A grid is built in one synchronous pass: every tile draws an orientation from
//! the random source, then the labeling pass assigns path identifiers. Nothing
//! can be read from the grid until both steps are done.

use crate::geometry::Orientation;
use crate::grid::labeling::{PathLabeler, TraceObserver};
use crate::grid::tile::Tile;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED_LABEL, DEFAULT_WIDTH};
use crate::random::{RandomSource, SeededRandom};
use ndarray::Array2;
use serde::Serialize;

/// Grid dimensions and tile options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Whether tiles may use the crossing orientation
    pub allow_cross: bool,
}

impl GridConfig {
    /// Create a configuration
    pub const fn new(width: usize, height: usize, allow_cross: bool) -> Self {
        Self {
            width,
            height,
            allow_cross,
        }
    }

    /// Number of tiles in a grid of this size
    pub const fn tile_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, false)
    }
}

/// A grid of Truchet tiles with every path labeled
///
/// Tiles are addressed as `(x, y)` with `x` counting columns left to right and
/// `y` counting rows top to bottom. A zero width or height gives an empty grid.
#[derive(Debug, Clone)]
pub struct TruchetGrid {
    config: GridConfig,
    orientations: Array2<Orientation>,
    /// Column-major: tile `(x, y)` is at `x * height + y`
    tiles: Vec<Tile>,
}

impl TruchetGrid {
    /// Build a grid drawing orientations from `rng`
    pub fn new<R>(config: GridConfig, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self::with_observer(config, rng, &mut ())
    }

    /// Build a grid from the default label-seeded source
    pub fn with_default_source(config: GridConfig) -> Self {
        let mut rng = SeededRandom::new(DEFAULT_SEED_LABEL);
        Self::new(config, &mut rng)
    }

    /// Build a grid, reporting every trace origin to `observer`
    pub fn with_observer<R, O>(config: GridConfig, rng: &mut R, observer: &mut O) -> Self
    where
        R: RandomSource + ?Sized,
        O: TraceObserver + ?Sized,
    {
        tracing::debug!(
            width = config.width,
            height = config.height,
            allow_cross = config.allow_cross,
            "building truchet grid"
        );

        let orientations = assign_orientations(&config, rng);
        let tiles = PathLabeler::new(&orientations).label_all(observer);

        Self {
            config,
            orientations,
            tiles,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.config.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.config.height
    }

    /// Whether crossing tiles were allowed
    pub const fn allow_cross(&self) -> bool {
        self.config.allow_cross
    }

    /// Configuration the grid was built from
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Whether the grid has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile orientations indexed `[x, y]`
    pub const fn orientations(&self) -> &Array2<Orientation> {
        &self.orientations
    }

    /// All tiles, columns outermost
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `(x, y)`, if inside the grid
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if y >= self.height() {
            return None;
        }
        self.column(x).and_then(|column| column.get(y))
    }

    /// All tiles of column `x`, top to bottom
    pub fn column(&self, x: usize) -> Option<&[Tile]> {
        if x >= self.width() {
            return None;
        }
        let start = x * self.height();
        self.tiles.get(start..start + self.height())
    }

    /// Columns left to right
    pub fn columns(&self) -> impl Iterator<Item = &[Tile]> {
        (0..self.width()).filter_map(|x| self.column(x))
    }
}

/// Draw an orientation for every tile, columns outermost
fn assign_orientations<R>(config: &GridConfig, rng: &mut R) -> Array2<Orientation>
where
    R: RandomSource + ?Sized,
{
    let mut orientations = Array2::from_elem((config.width, config.height), Orientation::LeftDown);

    for x in 0..config.width {
        for y in 0..config.height {
            let orientation = draw_orientation(rng, config.allow_cross);
            if let Some(cell) = orientations.get_mut((x, y)) {
                *cell = orientation;
            }
        }
    }

    orientations
}

/// Uniform draw over the orientations a grid may use
///
/// The draw is clamped into range, so a source that ignores its bounds still
/// cannot produce a crossing tile when crossings are disabled.
fn draw_orientation<R>(rng: &mut R, allow_cross: bool) -> Orientation
where
    R: RandomSource + ?Sized,
{
    let max = if allow_cross { 2 } else { 1 };
    match rng.integer(0, max).min(max) {
        0 => Orientation::LeftDown,
        1 => Orientation::LeftUp,
        _ => Orientation::LeftRight,
    }
}
