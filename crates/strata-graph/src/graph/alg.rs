//! Traversal helpers shared by the layout passes.

use super::{DirectedGraph, NodeId};

/// Undirected connected components over live edges, skipping pruned nodes.
///
/// Components are listed in order of their first node's insertion, and nodes within a
/// component in discovery (DFS preorder) order.
pub fn components(g: &DirectedGraph) -> Vec<Vec<NodeId>> {
    let mut seen = vec![false; g.node_bound()];
    let mut out: Vec<Vec<NodeId>> = Vec::new();

    for start in g.node_ids() {
        if seen[start.index()] || g.node(start).is_some_and(|n| n.pruned) {
            continue;
        }
        seen[start.index()] = true;
        let mut component: Vec<NodeId> = Vec::new();
        let mut stack: Vec<NodeId> = vec![start];
        while let Some(v) = stack.pop() {
            component.push(v);
            for w in neighbors(g, v) {
                if seen[w.index()] || g.node(w).is_some_and(|n| n.pruned) {
                    continue;
                }
                seen[w.index()] = true;
                stack.push(w);
            }
        }
        out.push(component);
    }
    out
}

/// Nodes adjacent to `v` through live edges, in-edges first, each edge contributing once.
pub fn neighbors(g: &DirectedGraph, v: NodeId) -> Vec<NodeId> {
    let mut out: Vec<NodeId> = Vec::with_capacity(g.degree(v));
    for &e in g.in_edges(v) {
        if let Some(edge) = g.edge(e) {
            out.push(edge.source());
        }
    }
    for &e in g.out_edges(v) {
        if let Some(edge) = g.edge(e) {
            out.push(edge.target());
        }
    }
    out
}

/// Predecessors of `v` through live edges, one entry per edge.
pub fn predecessors(g: &DirectedGraph, v: NodeId) -> Vec<NodeId> {
    g.in_edges(v)
        .iter()
        .filter_map(|&e| g.edge(e).map(|edge| edge.source()))
        .collect()
}

/// Successors of `v` through live edges, one entry per edge.
pub fn successors(g: &DirectedGraph, v: NodeId) -> Vec<NodeId> {
    g.out_edges(v)
        .iter()
        .filter_map(|&e| g.edge(e).map(|edge| edge.target()))
        .collect()
}
