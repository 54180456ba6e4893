//! Defaults and limits for grid generation

/// Default number of columns
pub const DEFAULT_WIDTH: usize = 10;

/// Default number of rows
pub const DEFAULT_HEIGHT: usize = 10;

/// Label seeding the default random source
pub const DEFAULT_SEED_LABEL: &str = "truchet tiles";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Separator between columns of the text formats
pub const TEXT_SEPARATOR: &str = " ";
