//! Output formatting for cut results

use chrono::TimeDelta;
use itertools::Itertools;
use mincut_graph::{Graph, MinCut};

/// A solved instance ready for display.
pub struct CutReport {
    pub graph: Graph,
    pub cut: MinCut,
    pub parse_time: TimeDelta,
    pub solve_time: TimeDelta,
}

/// Output formatter for cut reports
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a report
    pub fn print_report(&self, report: &CutReport) {
        if self.quiet {
            println!("{}", report.cut.product());
            return;
        }

        let (group_a, group_b) = report.cut.labels(&report.graph);
        println!("Product of group sizes: {}", report.cut.product());
        println!("Minimum cut weight: {}", report.cut.weight);
        println!("Group A ({}): {}", group_a.len(), group_a.iter().join(" "));
        println!("Group B ({}): {}", group_b.len(), group_b.iter().join(" "));
        println!(
            "(parse: {}, solve: {})",
            format_duration(report.parse_time),
            format_duration(report.solve_time)
        );
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
