//! CLI entry point for Truchet grid generation

use clap::Parser;
use tracing_subscriber::EnvFilter;
use truchet::io::cli::{Cli, GridExporter};

fn main() -> truchet::Result<()> {
    // Default: WARN for everything, INFO for truchet.
    // Override with RUST_LOG (e.g. RUST_LOG=truchet=trace).
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,truchet=info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();
    GridExporter::new(cli).process()
}
