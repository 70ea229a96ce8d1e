//! Stoer-Wagner global minimum cut over a contracting weight matrix

use crate::graph::Graph;

/// A global minimum cut: the crossing weight and the two vertex groups.
///
/// Both groups hold original vertex indices, sorted ascending. Together they
/// partition the full vertex set of the graph the cut was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Total weight of edges crossing between the two groups.
    pub weight: u64,
    /// Vertices on one side of the cut.
    pub group_a: Vec<usize>,
    /// Vertices on the other side.
    pub group_b: Vec<usize>,
}

impl MinCut {
    /// Product of the two group sizes.
    pub fn product(&self) -> u64 {
        self.group_a.len() as u64 * self.group_b.len() as u64
    }

    /// Resolve both groups to labels through the graph's bijection.
    pub fn labels<'g>(&self, graph: &'g Graph) -> (Vec<&'g str>, Vec<&'g str>) {
        let group_a = self.group_a.iter().map(|&v| graph.label(v)).collect();
        let group_b = self.group_b.iter().map(|&v| graph.label(v)).collect();
        (group_a, group_b)
    }
}

/// Compute the global minimum cut of an undirected weighted graph.
///
/// Runs N-1 contraction phases. Each phase orders the active supernodes by
/// maximum adjacency, reads off the cut separating the last-ordered vertex
/// from the rest, and merges the last two vertices of the order. The
/// lightest cut-of-the-phase over all phases is the global minimum.
///
/// Total over every well-formed graph: an empty graph yields cut 0 with
/// empty groups, a single vertex yields cut 0 with that vertex alone on
/// one side. A disconnected graph yields cut 0 with the components split.
pub fn minimum_cut(graph: &Graph) -> MinCut {
    let n = graph.len();
    if n == 0 {
        return MinCut {
            weight: 0,
            group_a: Vec::new(),
            group_b: Vec::new(),
        };
    }
    if n == 1 {
        return MinCut {
            weight: 0,
            group_a: Vec::new(),
            group_b: vec![0],
        };
    }

    let mut state = Contraction::new(graph);
    let mut best_weight = u64::MAX;
    let mut best_a: Vec<usize> = Vec::new();

    while state.active.len() > 1 {
        let cut = state.phase();
        if cut.weight < best_weight {
            best_weight = cut.weight;
            best_a = state.flatten(&cut.prefix);
        }
        state = state.contract(cut.s, cut.t);
    }

    let mut in_a = vec![false; n];
    for &v in &best_a {
        in_a[v] = true;
    }
    let mut group_a = best_a;
    group_a.sort_unstable();
    let group_b: Vec<usize> = (0..n).filter(|&v| !in_a[v]).collect();

    MinCut {
        weight: best_weight,
        group_a,
        group_b,
    }
}

/// Working state of one contraction run.
///
/// `weights` is a mutable copy of the graph's matrix, `members` holds the
/// original vertices merged into each representative, and `active` lists the
/// representatives still standing. Every original vertex belongs to exactly
/// one active supernode at all times.
struct Contraction {
    weights: Vec<Vec<u64>>,
    members: Vec<Vec<usize>>,
    active: Vec<usize>,
}

/// Outcome of one maximum-adjacency pass: the last two vertices of the
/// order, the weight accumulated on `t` at selection, and the
/// representatives ordered before `t`.
struct PhaseCut {
    s: usize,
    t: usize,
    weight: u64,
    prefix: Vec<usize>,
}

impl Contraction {
    fn new(graph: &Graph) -> Self {
        let n = graph.len();
        Self {
            weights: graph.matrix().to_vec(),
            members: (0..n).map(|v| vec![v]).collect(),
            active: (0..n).collect(),
        }
    }

    /// Maximum-adjacency ordering over the active supernodes.
    ///
    /// Starting from the first active vertex, repeatedly selects the
    /// unordered vertex with the greatest accumulated weight to the ordered
    /// prefix. Ties go to the first candidate in active-list order.
    fn phase(&self) -> PhaseCut {
        let m = self.active.len();
        debug_assert!(m >= 2, "phase needs at least 2 active supernodes");

        let mut attach = vec![0u64; self.weights.len()];
        let mut ordered = vec![false; self.weights.len()];
        let mut order = Vec::with_capacity(m);
        let mut last_attach = 0u64;

        for _ in 0..m {
            let mut pick: Option<usize> = None;
            for &v in &self.active {
                if !ordered[v] && pick.is_none_or(|p| attach[v] > attach[p]) {
                    pick = Some(v);
                }
            }
            let Some(v) = pick else { break };

            ordered[v] = true;
            last_attach = attach[v];
            order.push(v);
            for &u in &self.active {
                if !ordered[u] {
                    attach[u] += self.weights[v][u];
                }
            }
        }

        let t = order[m - 1];
        let s = order[m - 2];
        order.truncate(m - 1);
        PhaseCut {
            s,
            t,
            weight: last_attach,
            prefix: order,
        }
    }

    /// Merge supernode `t` into `s`.
    ///
    /// Edge weights of `t` accumulate onto `s` in both matrix directions,
    /// `t`'s members move to `s`, and `t` leaves the active set. The merge
    /// is irreversible.
    fn contract(mut self, s: usize, t: usize) -> Self {
        for &v in &self.active {
            if v == s || v == t {
                continue;
            }
            self.weights[s][v] += self.weights[t][v];
            self.weights[v][s] = self.weights[s][v];
        }
        let moved = std::mem::take(&mut self.members[t]);
        self.members[s].extend(moved);
        self.active.retain(|&v| v != t);
        self
    }

    /// Original vertices of every supernode in `reps`, flattened.
    fn flatten(&self, reps: &[usize]) -> Vec<usize> {
        reps.iter()
            .flat_map(|&r| self.members[r].iter().copied())
            .collect()
    }
}
