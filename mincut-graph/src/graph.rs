//! Graph construction from wiring-list text

use std::collections::{BTreeSet, HashMap};

use anyhow::anyhow;

use crate::error::ParseError;

/// Undirected weighted graph over string-labelled vertices.
///
/// Vertices are indexed `0..N-1` in lexicographic label order, so the same
/// input always produces the same label-to-index assignment. Weights live in
/// a dense symmetric matrix with an unused zero diagonal; every occurrence
/// of a pair in the input adds 1 to both directions.
#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    weights: Vec<Vec<u64>>,
}

impl Graph {
    /// Parse wiring-list text into a graph.
    ///
    /// Each non-blank line reads `LABEL: LABEL LABEL ...`, declaring an
    /// undirected unit-weight edge from the source label to every listed
    /// neighbor. Self-pairs are skipped (the label is still registered),
    /// and a line without a colon delimiter is a fatal error carrying the
    /// 1-based line number.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut labels = BTreeSet::new();
        let mut pairs = Vec::new();

        for (line_idx, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let (source, neighbors) = split_wiring_line(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
            if source.is_empty() {
                return Err(ParseError::MissingData(format!(
                    "(line {}) empty source label",
                    line_idx + 1
                )));
            }

            labels.insert(source.to_string());
            for neighbor in neighbors {
                labels.insert(neighbor.to_string());
                pairs.push((source.to_string(), neighbor.to_string()));
            }
        }

        Ok(Self::assemble(labels, pairs))
    }

    /// Build a graph from explicit label pairs.
    ///
    /// Accumulation matches [`Graph::parse`]: repeated pairs stack weight,
    /// self-pairs register the label without adding an edge.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let pairs: Vec<(String, String)> = edges
            .into_iter()
            .map(|(a, b)| (a.into(), b.into()))
            .collect();

        let mut labels = BTreeSet::new();
        for (a, b) in &pairs {
            labels.insert(a.clone());
            labels.insert(b.clone());
        }

        Self::assemble(labels, pairs)
    }

    fn assemble(labels: BTreeSet<String>, pairs: Vec<(String, String)>) -> Self {
        let labels: Vec<String> = labels.into_iter().collect();
        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let n = labels.len();
        let mut weights = vec![vec![0u64; n]; n];
        for (a, b) in &pairs {
            let u = index[a.as_str()];
            let v = index[b.as_str()];
            if u == v {
                continue;
            }
            weights[u][v] += 1;
            weights[v][u] += 1;
        }

        Self { labels, weights }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of a vertex by index.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    /// All labels in index order (lexicographically sorted).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Index of a label, if present.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|candidate| candidate.as_str().cmp(label))
            .ok()
    }

    /// Combined edge weight between two vertices.
    pub fn weight(&self, a: usize, b: usize) -> u64 {
        self.weights[a][b]
    }

    pub(crate) fn matrix(&self) -> &[Vec<u64>] {
        &self.weights
    }
}

fn split_wiring_line(line: &str) -> Result<(&str, Vec<&str>), anyhow::Error> {
    let (source, neighbor_list) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' between source and neighbor list"))?;
    Ok((source.trim(), neighbor_list.split_whitespace().collect()))
}
