use strata_graph::{DirectedGraph, GraphError, alg};

fn path(g: &mut DirectedGraph, ids: &[&str]) {
    for w in ids.windows(2) {
        let v = g
            .node_by_name(w[0])
            .unwrap_or_else(|| g.add_node(w[0], 10.0, 10.0).unwrap());
        let u = g
            .node_by_name(w[1])
            .unwrap_or_else(|| g.add_node(w[1], 10.0, 10.0).unwrap());
        g.add_edge(v, u).unwrap();
    }
}

#[test]
fn add_node_rejects_non_positive_sizes() {
    let mut g = DirectedGraph::new();
    assert!(matches!(
        g.add_node("a", 0.0, 10.0),
        Err(GraphError::InvalidNodeSize { .. })
    ));
    assert!(matches!(
        g.add_node("a", 10.0, -1.0),
        Err(GraphError::InvalidNodeSize { .. })
    ));
    assert!(matches!(
        g.add_node("a", f64::NAN, 10.0),
        Err(GraphError::InvalidNodeSize { .. })
    ));
    assert!(g.is_empty());
}

#[test]
fn add_node_rejects_duplicate_ids() {
    let mut g = DirectedGraph::new();
    g.add_node("a", 1.0, 1.0).unwrap();
    assert_eq!(
        g.add_node("a", 1.0, 1.0),
        Err(GraphError::DuplicateNode {
            node: "a".to_string()
        })
    );
}

#[test]
fn add_edge_rejects_self_loops() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    assert_eq!(
        g.add_edge(a, a),
        Err(GraphError::InvalidEdge {
            node: "a".to_string()
        })
    );
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn add_edge_rejects_removed_endpoints() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    g.remove_node(b).unwrap();
    assert!(matches!(
        g.add_edge(a, b),
        Err(GraphError::UnknownNode { .. })
    ));
}

#[test]
fn edges_default_to_weight_one_and_update_adjacency() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    let e = g.add_edge(a, b).unwrap();

    assert_eq!(g.edge(e).unwrap().weight, 1);
    assert_eq!(g.out_edges(a), &[e]);
    assert_eq!(g.in_edges(b), &[e]);
    assert_eq!(g.degree(a), 1);
    assert_eq!(g.degree(b), 1);
}

#[test]
fn remove_node_removes_incident_edges() {
    let mut g = DirectedGraph::new();
    path(&mut g, &["a", "b", "c"]);
    let b = g.node_by_name("b").unwrap();
    let a = g.node_by_name("a").unwrap();
    let c = g.node_by_name("c").unwrap();

    let removed = g.remove_node(b).unwrap();
    assert_eq!(removed.id(), "b");
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 0);
    assert!(g.out_edges(a).is_empty());
    assert!(g.in_edges(c).is_empty());
    assert_eq!(g.node_by_name("b"), None);
}

#[test]
fn iteration_follows_insertion_order_across_removals() {
    let mut g = DirectedGraph::new();
    let ids: Vec<_> = ["d", "a", "c", "b"]
        .iter()
        .map(|id| g.add_node(*id, 1.0, 1.0).unwrap())
        .collect();
    g.remove_node(ids[1]).unwrap();
    let names: Vec<&str> = g.node_ids().map(|n| g.node(n).unwrap().id()).collect();
    assert_eq!(names, vec!["d", "c", "b"]);
}

#[test]
fn reverse_edge_flips_direction_and_reports_caller_endpoints() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    let e = g.add_edge(a, b).unwrap();

    g.reverse_edge(e).unwrap();
    let edge = g.edge(e).unwrap();
    assert!(edge.is_reversed());
    assert_eq!((edge.source(), edge.target()), (b, a));
    assert_eq!(edge.caller_endpoints(), (a, b));
    assert_eq!(g.out_edges(b), &[e]);
    assert_eq!(g.in_edges(a), &[e]);
}

#[test]
fn slack_is_rank_difference_minus_one() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    let e = g.add_edge(a, b).unwrap();
    g.node_mut(b).unwrap().rank = 3;
    assert_eq!(g.slack(e), 2);
}

#[test]
fn detach_and_reset_layout_restore_the_caller_graph() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    let e = g.add_edge(a, b).unwrap();
    g.node_mut(b).unwrap().rank = 2;

    let v = g.add_virtual_node(1);
    let s1 = g.add_segment(a, v, 2).unwrap();
    let s2 = g.add_segment(v, b, 2).unwrap();
    g.detach_edge(e, vec![v], vec![s1, s2]).unwrap();
    g.reverse_edge(e).unwrap();

    assert!(!g.edge(e).unwrap().is_live());
    assert_eq!(g.out_edges(a), &[s1]);
    assert_eq!(g.live_edge_ids().count(), 2);
    assert_eq!(g.caller_edge_ids().collect::<Vec<_>>(), vec![e]);

    g.reset_layout();

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    let edge = g.edge(e).unwrap();
    assert!(edge.is_live());
    assert!(!edge.is_reversed());
    assert!(edge.chain().is_empty());
    assert_eq!(g.out_edges(a), &[e]);
    assert_eq!(g.in_edges(b), &[e]);
    assert_eq!(g.node(b).unwrap().rank, 0);
}

#[test]
fn rebuild_ranks_groups_by_rank_and_sorts_by_order() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 1.0, 1.0).unwrap();
    let b = g.add_node("b", 1.0, 1.0).unwrap();
    let c = g.add_node("c", 1.0, 1.0).unwrap();
    g.node_mut(a).unwrap().order = 1;
    g.node_mut(c).unwrap().rank = 1;

    g.rebuild_ranks();
    assert_eq!(g.ranks(), &[vec![b, a], vec![c]]);

    g.set_layering(vec![vec![a, b], vec![c]]);
    assert_eq!(g.node(a).unwrap().order, 0);
    assert_eq!(g.node(b).unwrap().order, 1);
}

#[test]
fn components_are_undirected_and_skip_pruned_nodes() {
    let mut g = DirectedGraph::new();
    path(&mut g, &["a", "b"]);
    path(&mut g, &["d", "c"]);
    let e = g.add_node("e", 1.0, 1.0).unwrap();
    g.node_mut(e).unwrap().pruned = true;

    let names: Vec<Vec<&str>> = alg::components(&g)
        .into_iter()
        .map(|c| c.into_iter().map(|n| g.node(n).unwrap().id()).collect())
        .collect();
    assert_eq!(names, vec![vec!["a", "b"], vec!["d", "c"]]);
}

#[test]
fn reset_layout_restores_adjacency_in_edge_order() {
    let mut g = DirectedGraph::new();
    path(&mut g, &["a", "b"]);
    let a = g.node_by_name("a").unwrap();
    let b = g.node_by_name("b").unwrap();
    let c = g.add_node("c", 10.0, 10.0).unwrap();
    let ab = g.out_edges(a)[0];
    let ca = g.add_edge(c, a).unwrap();
    let cb = g.add_edge(c, b).unwrap();

    g.reverse_edge(ab).unwrap();
    assert_eq!(g.in_edges(b), &[cb]);
    assert_eq!(g.in_edges(a), &[ca, ab]);

    g.reset_layout();
    assert_eq!(g.out_edges(a), &[ab]);
    assert_eq!(g.in_edges(a), &[ca]);
    assert_eq!(g.in_edges(b), &[ab, cb]);
}

#[test]
fn set_padding_rejects_negative_and_non_finite_values() {
    let mut g = DirectedGraph::new();
    let a = g.add_node("a", 40.0, 10.0).unwrap();
    let node = g.node_mut(a).unwrap();

    assert_eq!(
        node.set_padding(Some(-30.0)),
        Err(GraphError::InvalidPadding {
            node: "a".to_string(),
            padding: -30.0,
        })
    );
    assert!(matches!(
        node.set_padding(Some(f64::NAN)),
        Err(GraphError::InvalidPadding { .. })
    ));
    assert!(matches!(
        node.set_padding(Some(f64::INFINITY)),
        Err(GraphError::InvalidPadding { .. })
    ));
    assert_eq!(node.padding(), None);

    node.set_padding(Some(0.0)).unwrap();
    assert_eq!(node.padding(), Some(0.0));
    node.set_padding(Some(35.0)).unwrap();
    assert_eq!(node.padding(), Some(35.0));
    node.set_padding(None).unwrap();
    assert_eq!(node.padding(), None);
}
