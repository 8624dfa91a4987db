use strata::graph::{DirectedGraph, NodeId};
use strata::order::{cross_count, two_layer_cross_count};

fn layered(layers: &[&[&str]], edges: &[(&str, &str)]) -> (DirectedGraph, Vec<Vec<NodeId>>) {
    let mut g = DirectedGraph::new();
    let mut layering = Vec::new();
    for layer in layers {
        let ids: Vec<NodeId> = layer
            .iter()
            .map(|id| g.add_node(*id, 10.0, 10.0).unwrap())
            .collect();
        layering.push(ids);
    }
    for (v, w) in edges {
        let v = g.node_by_name(v).unwrap();
        let w = g.node_by_name(w).unwrap();
        g.add_edge(v, w).unwrap();
    }
    (g, layering)
}

#[test]
fn cross_count_returns_0_for_an_empty_layering() {
    let g = DirectedGraph::new();
    assert_eq!(cross_count(&g, &[]), 0);
}

#[test]
fn cross_count_returns_0_for_a_layering_with_no_crossings() {
    let (g, layering) = layered(&[&["a1", "a2"], &["b1", "b2"]], &[("a1", "b1"), ("a2", "b2")]);
    assert_eq!(cross_count(&g, &layering), 0);
}

#[test]
fn cross_count_returns_1_for_a_layering_with_1_crossing() {
    let (g, layering) = layered(&[&["a1", "a2"], &["b1", "b2"]], &[("a1", "b2"), ("a2", "b1")]);
    assert_eq!(cross_count(&g, &layering), 1);
}

#[test]
fn cross_count_ignores_edge_weights() {
    let mut g = DirectedGraph::new();
    let a1 = g.add_node("a1", 10.0, 10.0).unwrap();
    let a2 = g.add_node("a2", 10.0, 10.0).unwrap();
    let b1 = g.add_node("b1", 10.0, 10.0).unwrap();
    let b2 = g.add_node("b2", 10.0, 10.0).unwrap();
    g.add_weighted_edge(a1, b2, 5).unwrap();
    g.add_weighted_edge(a2, b1, 7).unwrap();
    assert_eq!(two_layer_cross_count(&g, &[a1, a2], &[b1, b2]), 1);
}

#[test]
fn cross_count_calculates_crossings_across_layers() {
    let (g, layering) = layered(
        &[&["a1", "a2"], &["b1", "b2"], &["c1", "c2"]],
        &[
            ("a1", "b1"),
            ("b1", "c1"),
            ("a2", "b2"),
            ("b2", "c2"),
            ("a1", "b2"),
            ("b2", "c1"),
        ],
    );
    assert_eq!(cross_count(&g, &layering), 0);

    let swapped = vec![
        layering[0].clone(),
        vec![layering[1][1], layering[1][0]],
        layering[2].clone(),
    ];
    assert_eq!(cross_count(&g, &swapped), 2);
}

#[test]
fn cross_count_counts_every_pair_in_a_complete_bipartite_graph() {
    let (g, layering) = layered(
        &[&["a1", "a2", "a3"], &["b1", "b2", "b3"]],
        &[
            ("a1", "b1"),
            ("a1", "b2"),
            ("a1", "b3"),
            ("a2", "b1"),
            ("a2", "b2"),
            ("a2", "b3"),
            ("a3", "b1"),
            ("a3", "b2"),
            ("a3", "b3"),
        ],
    );
    assert_eq!(cross_count(&g, &layering), 9);
}
