//! Minimum cut on graph families with known answers

use mincut_graph::{Graph, minimum_cut};

fn vertex(i: usize) -> String {
    format!("v{:02}", i)
}

#[test]
fn cycle_cut_is_two() {
    for n in 3..=9 {
        let edges: Vec<(String, String)> =
            (0..n).map(|i| (vertex(i), vertex((i + 1) % n))).collect();
        let cut = minimum_cut(&Graph::from_edges(edges));
        assert_eq!(cut.weight, 2, "cycle of {} vertices", n);
    }
}

#[test]
fn complete_graph_cut_isolates_one_vertex() {
    for n in 2..=8 {
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((vertex(i), vertex(j)));
            }
        }
        let cut = minimum_cut(&Graph::from_edges(edges));
        assert_eq!(cut.weight, (n - 1) as u64, "complete graph on {} vertices", n);
        assert_eq!(cut.product(), (n - 1) as u64);
    }
}

#[test]
fn disconnected_components_split_exactly() {
    let graph = Graph::from_edges([
        ("a", "b"),
        ("b", "c"),
        ("a", "c"),
        ("x", "y"),
        ("y", "z"),
        ("x", "z"),
    ]);
    let cut = minimum_cut(&graph);
    assert_eq!(cut.weight, 0);

    let (group_a, group_b) = cut.labels(&graph);
    let mut sides = [group_a, group_b];
    sides.sort();
    assert_eq!(sides[0], ["a", "b", "c"]);
    assert_eq!(sides[1], ["x", "y", "z"]);
}

#[test]
fn bridged_triangles_cut_the_bridge() {
    let input = "a: b c\nb: c\nc: d\nd: e f\ne: f\n";
    let graph = Graph::parse(input).unwrap();
    let cut = minimum_cut(&graph);

    assert_eq!(cut.weight, 1);
    assert_eq!(cut.product(), 9);

    let (group_a, group_b) = cut.labels(&graph);
    let mut sides = [group_a, group_b];
    sides.sort();
    assert_eq!(sides[0], ["a", "b", "c"]);
    assert_eq!(sides[1], ["d", "e", "f"]);
}

#[test]
fn wiring_diagram_splits_into_nine_and_six() {
    // 13-component wiring diagram held together by exactly 3 wires.
    let input = "\
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";
    let graph = Graph::parse(input).unwrap();
    assert_eq!(graph.len(), 15);

    let cut = minimum_cut(&graph);
    assert_eq!(cut.weight, 3);
    assert_eq!(cut.product(), 54);

    // Both sides together cover every component exactly once.
    let mut all: Vec<usize> = cut
        .group_a
        .iter()
        .chain(cut.group_b.iter())
        .copied()
        .collect();
    all.sort_unstable();
    assert_eq!(all, (0..graph.len()).collect::<Vec<_>>());
}

#[test]
fn repeated_runs_report_the_same_weight() {
    let input = "a: b c\nb: c\nc: d\nd: e f\ne: f\n";
    let first = minimum_cut(&Graph::parse(input).unwrap());
    let second = minimum_cut(&Graph::parse(input).unwrap());
    assert_eq!(first.weight, second.weight);
}
