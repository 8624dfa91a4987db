//! Rank helpers.

use strata_graph::{DirectedGraph, NodeId};

/// Σ weight × (rank(target) − rank(source)) over live edges; the quantity ranking minimizes.
pub fn weighted_length(g: &DirectedGraph) -> i64 {
    g.live_edge_ids()
        .filter_map(|e| {
            let edge = g.edge(e)?;
            let span = g.rank_of(edge.target()) - g.rank_of(edge.source());
            Some(i64::from(edge.weight) * i64::from(span))
        })
        .sum()
}

/// Shifts each group of nodes so its minimum rank becomes 0.
pub fn normalize_ranks(g: &mut DirectedGraph, groups: &[Vec<NodeId>]) {
    for group in groups {
        let Some(min) = group.iter().map(|&n| g.rank_of(n)).min() else {
            continue;
        };
        if min == 0 {
            continue;
        }
        for &n in group {
            if let Some(node) = g.node_mut(n) {
                node.rank -= min;
            }
        }
    }
}
