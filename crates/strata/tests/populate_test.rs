use strata::graph::{DirectedGraph, NodeId};
use strata::{LayoutConfig, populate};

fn ranked(g: &mut DirectedGraph, id: &str, rank: i32) -> NodeId {
    let n = g.add_node(id, 10.0, 10.0).unwrap();
    g.node_mut(n).unwrap().rank = rank;
    n
}

#[test]
fn populate_splits_a_long_edge_into_a_virtual_chain() {
    let mut g = DirectedGraph::new();
    let a = ranked(&mut g, "a", 0);
    let x = ranked(&mut g, "x", 1);
    let y = ranked(&mut g, "y", 2);
    let b = ranked(&mut g, "b", 3);
    g.add_edge(a, x).unwrap();
    g.add_edge(x, y).unwrap();
    g.add_edge(y, b).unwrap();
    let long = g.add_weighted_edge(a, b, 3).unwrap();

    let summary = populate::run(&mut g, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.virtual_nodes, 2);
    assert_eq!(summary.split_edges, 1);

    let edge = g.edge(long).unwrap();
    assert!(!edge.is_live());
    assert_eq!(edge.chain().len(), 2);
    let ranks: Vec<i32> = edge.chain().iter().map(|&v| g.rank_of(v)).collect();
    assert_eq!(ranks, vec![1, 2]);
    assert!(edge.chain().iter().all(|&v| g.node(v).unwrap().is_virtual()));

    let weights: Vec<u32> = edge
        .segments()
        .iter()
        .map(|&s| g.edge(s).unwrap().weight)
        .collect();
    assert_eq!(weights, vec![3 * 2, 3 * 8, 3 * 2]);
    assert!(edge.segments().iter().all(|&s| g.edge(s).unwrap().is_segment()));

    assert_eq!(g.ranks().len(), 4);
    assert_eq!(g.ranks()[1].len(), 2);
    for e in g.live_edge_ids() {
        assert_eq!(g.slack(e), 0);
    }
}

#[test]
fn populate_uses_configured_weight_factors() {
    let mut g = DirectedGraph::new();
    let a = ranked(&mut g, "a", 0);
    let b = ranked(&mut g, "b", 2);
    let long = g.add_edge(a, b).unwrap();

    let config = LayoutConfig {
        virtual_weight_single: 5,
        ..LayoutConfig::default()
    };
    populate::run(&mut g, &config).unwrap();

    let edge = g.edge(long).unwrap();
    let weights: Vec<u32> = edge
        .segments()
        .iter()
        .map(|&s| g.edge(s).unwrap().weight)
        .collect();
    assert_eq!(weights, vec![5, 5]);
}

#[test]
fn populate_leaves_unit_edges_untouched() {
    let mut g = DirectedGraph::new();
    let a = ranked(&mut g, "a", 0);
    let b = ranked(&mut g, "b", 1);
    let e = g.add_edge(a, b).unwrap();

    let summary = populate::run(&mut g, &LayoutConfig::default()).unwrap();
    assert_eq!(summary.virtual_nodes, 0);
    assert!(g.edge(e).unwrap().is_live());
    assert_eq!(g.ranks(), &[vec![a], vec![b]]);
}

#[test]
fn populate_places_pruned_nodes_on_rank_zero() {
    let mut g = DirectedGraph::new();
    let a = ranked(&mut g, "a", 0);
    let b = ranked(&mut g, "b", 1);
    let lonely = ranked(&mut g, "lonely", 4);
    g.add_edge(a, b).unwrap();
    g.node_mut(lonely).unwrap().pruned = true;

    populate::run(&mut g, &LayoutConfig::default()).unwrap();
    assert_eq!(g.rank_of(lonely), 0);
    assert_eq!(g.ranks(), &[vec![a, lonely], vec![b]]);
}
