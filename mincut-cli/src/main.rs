//! mincut - command-line runner for the global minimum cut solver

mod cli;
mod error;
mod output;

use chrono::Utc;
use clap::Parser;
use cli::Args;
use error::CliError;
use mincut_graph::{Graph, minimum_cut};
use output::{CutReport, OutputFormatter};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let input = std::fs::read_to_string(&args.input)?;
    let report = solve(&input)?;

    let formatter = OutputFormatter::new(args.quiet);
    formatter.print_report(&report);
    Ok(())
}

/// Parse the wiring list and compute its minimum cut, timing both stages.
fn solve(input: &str) -> Result<CutReport, CliError> {
    let parse_start = Utc::now();
    let graph = Graph::parse(input)?;
    let parse_end = Utc::now();

    let solve_start = Utc::now();
    let cut = minimum_cut(&graph);
    let solve_end = Utc::now();

    Ok(CutReport {
        graph,
        cut,
        parse_time: parse_end - parse_start,
        solve_time: solve_end - solve_start,
    })
}
