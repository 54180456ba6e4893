//! Command-line interface for generating a grid and writing it out

use crate::grid::{GridConfig, TruchetGrid};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_SEED_LABEL, DEFAULT_WIDTH, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, TruchetError, invalid_parameter};
use crate::io::export::{ExportFormat, export};
use crate::random::SeededRandom;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "truchet")]
#[command(
    author,
    version,
    about = "Generate Truchet tile grids with every connected path labeled"
)]
/// Command-line arguments for grid generation
pub struct Cli {
    /// Number of columns
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Allow crossing tiles (two straight segments)
    #[arg(short, long)]
    pub cross: bool,

    /// Label seeding the random source
    #[arg(short, long, default_value = DEFAULT_SEED_LABEL)]
    pub seed: String,

    /// Output encoding
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Validated grid configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension exceeds `MAX_GRID_DIMENSION`
    pub fn grid_config(&self) -> Result<GridConfig> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        Ok(GridConfig::new(self.width, self.height, self.cross))
    }
}

/// Builds a grid from CLI arguments and writes it in the requested format
pub struct GridExporter {
    cli: Cli,
}

impl GridExporter {
    /// Create an exporter for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the grid described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid
    pub fn build(&self) -> Result<TruchetGrid> {
        let config = self.cli.grid_config()?;
        let mut rng = SeededRandom::new(&self.cli.seed);
        Ok(TruchetGrid::new(config, &mut rng))
    }

    /// Build, encode and write the grid
    ///
    /// # Errors
    ///
    /// Returns an error if validation, encoding or writing fails
    pub fn process(&self) -> Result<()> {
        let grid = self.build()?;
        let body = export(&grid, self.cli.format)?;

        match &self.cli.output {
            Some(path) => Self::write_file(path, &body)?,
            None => Self::write_stdout(&body)?,
        }

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            paths = grid.path_count(),
            seed = %self.cli.seed,
            "generated truchet grid"
        );

        Ok(())
    }

    fn write_file(path: &Path, body: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TruchetError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, format!("{body}\n")).map_err(|e| TruchetError::FileSystem {
            path: path.to_path_buf(),
            operation: "write",
            source: e,
        })
    }

    fn write_stdout(body: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(body.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }
}
