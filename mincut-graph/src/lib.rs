//! Global minimum cut of undirected weighted graphs.
//!
//! This crate builds a graph from a plain-text wiring list and computes its
//! global minimum cut with the Stoer-Wagner contraction algorithm: repeated
//! maximum-adjacency passes over a dense symmetric weight matrix, merging the
//! last two vertices of each pass until one supernode remains. The lightest
//! cut-of-the-phase seen along the way is the global minimum cut.
//!
//! # Quick Example
//!
//! ```
//! use mincut_graph::{minimum_cut, Graph};
//!
//! // Two triangles bridged by a single wire between c and d.
//! let graph = Graph::parse("a: b c\nb: c\nc: d\nd: e f\ne: f\n")?;
//! let cut = minimum_cut(&graph);
//!
//! assert_eq!(cut.weight, 1);
//! assert_eq!(cut.product(), 9);
//! # Ok::<(), mincut_graph::ParseError>(())
//! ```
//!
//! # Input format
//!
//! One vertex per line, `LABEL: LABEL LABEL ...`, meaning the source label
//! has an undirected unit-weight edge to each listed neighbor. Repeated
//! pairs accumulate weight; blank lines and self-pairs are skipped. A line
//! without a colon is a fatal parse error.

mod error;
mod graph;
mod mincut;

pub use error::ParseError;
pub use graph::Graph;
pub use mincut::{MinCut, minimum_cut};
