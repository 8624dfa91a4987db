use strata::graph::DirectedGraph;
use strata::order::{cross_count, transpose};

fn layered(layers: &[&[&str]], edges: &[(&str, &str)]) -> DirectedGraph {
    let mut g = DirectedGraph::new();
    for (rank, layer) in layers.iter().enumerate() {
        for id in *layer {
            let n = g.add_node(*id, 10.0, 10.0).unwrap();
            g.node_mut(n).unwrap().rank = rank as i32;
        }
    }
    for (v, w) in edges {
        let v = g.node_by_name(v).unwrap();
        let w = g.node_by_name(w).unwrap();
        g.add_edge(v, w).unwrap();
    }
    g.rebuild_ranks();
    g
}

#[test]
fn transpose_swaps_a_crossed_pair() {
    let mut g = layered(&[&["a", "b"], &["c", "d"]], &[("a", "d"), ("b", "c")]);
    assert_eq!(cross_count(&g, g.ranks()), 1);

    let summary = transpose::run(&mut g);
    assert_eq!(summary.swaps, 1);
    assert_eq!(summary.passes, 2);
    assert_eq!(cross_count(&g, g.ranks()), 0);

    let b = g.node_by_name("b").unwrap();
    assert_eq!(g.node(b).unwrap().order, 0);
}

#[test]
fn transpose_does_nothing_without_a_strict_improvement() {
    let mut g = layered(
        &[&["a", "b"], &["c", "d"]],
        &[("a", "c"), ("a", "d"), ("b", "c"), ("b", "d")],
    );
    let before = g.ranks().to_vec();

    let summary = transpose::run(&mut g);
    assert_eq!(summary.swaps, 0);
    assert_eq!(summary.passes, 1);
    assert_eq!(g.ranks(), before.as_slice());
}

#[test]
fn transpose_never_increases_crossings() {
    let mut g = layered(
        &[&["a", "b", "c"], &["d", "e", "f"], &["g", "h"]],
        &[
            ("a", "f"),
            ("b", "d"),
            ("c", "e"),
            ("c", "d"),
            ("d", "h"),
            ("f", "g"),
            ("e", "g"),
        ],
    );
    let before = cross_count(&g, g.ranks());
    transpose::run(&mut g);
    assert!(cross_count(&g, g.ranks()) <= before);
}

#[test]
fn pair_crossings_counts_both_adjacent_ranks() {
    let g = layered(
        &[&["a", "b"], &["c", "d"], &["e", "f"]],
        &[("b", "c"), ("a", "d"), ("c", "f"), ("d", "e")],
    );
    let mut pos = vec![0; g.node_bound()];
    for layer in g.ranks() {
        for (i, &n) in layer.iter().enumerate() {
            pos[n.index()] = i;
        }
    }
    let c = g.node_by_name("c").unwrap();
    let d = g.node_by_name("d").unwrap();
    assert_eq!(transpose::pair_crossings(&g, &pos, c, d), 2);
    assert_eq!(transpose::pair_crossings(&g, &pos, d, c), 0);
}
