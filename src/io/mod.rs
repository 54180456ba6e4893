//! Input/output: configuration, errors, export formats and the command line

/// Command-line interface
pub mod cli;
/// Defaults and limits
pub mod configuration;
/// Error types
pub mod error;
/// Text and JSON encodings of a completed grid
pub mod export;
