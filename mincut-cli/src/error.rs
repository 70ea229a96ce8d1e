//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input text was not a valid wiring list
    #[error("Parse error: {0}")]
    Parse(#[from] mincut_graph::ParseError),
}
