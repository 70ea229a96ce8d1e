//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Global minimum cut runner
#[derive(Parser, Debug)]
#[command(
    name = "mincut",
    about = "Partition a wiring graph at its global minimum cut",
    version
)]
pub struct Args {
    /// Input file holding the wiring list
    #[arg(default_value = "input.txt")]
    pub input: PathBuf,

    /// Quiet mode - only output the group size product
    #[arg(short, long)]
    pub quiet: bool,
}
